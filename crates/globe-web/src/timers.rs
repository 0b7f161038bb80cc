use globe_core::{TimerDirective, TimerRequest, TimerToken};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The one browser timeout backing the session's live timer.
///
/// Owns its callback; dropping the handle clears the timeout and frees the
/// closure. A handle dropped from inside its own callback is freed once the
/// callback returns.
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(self.id);
        }
    }
}

fn schedule(request: TimerRequest, fire: fn(TimerToken)) -> Option<Timeout> {
    let window = web::window()?;
    let token = request.token;
    let callback = Closure::wrap(Box::new(move || fire(token)) as Box<dyn FnMut()>);
    let delay = i32::try_from(request.delay.as_millis()).unwrap_or(i32::MAX);
    let scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        delay,
    );
    match scheduled {
        Ok(id) => Some(Timeout {
            id,
            _callback: callback,
        }),
        Err(e) => {
            log::error!("[timer] setTimeout failed: {e:?}");
            None
        }
    }
}

/// Apply a session directive to the pending slot.
pub fn apply(pending: &mut Option<Timeout>, directive: TimerDirective, fire: fn(TimerToken)) {
    match directive {
        TimerDirective::Keep => {}
        TimerDirective::Cancel => {
            pending.take();
        }
        TimerDirective::Arm(request) => {
            // dropping the old handle clears its browser timeout
            *pending = schedule(request, fire);
        }
    }
}
