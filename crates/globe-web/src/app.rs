use crate::outbox;
use crate::present;
use crate::timers::{self, Timeout};
use globe_core::{RoundEvent, Session, SessionError, Step, TimerToken};
use std::cell::RefCell;
use web_sys as web;

pub struct App {
    pub session: Session,
    pub document: web::Document,
    pending: Option<Timeout>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

impl App {
    pub fn new(session: Session, document: web::Document) -> Self {
        Self {
            session,
            document,
            pending: None,
        }
    }

    /// Render a step into the page and reconcile the browser timeout.
    /// Returns the events still to be sent to the scene.
    fn apply(&mut self, step: Step) -> Vec<RoundEvent> {
        let mode = self.session.mode();
        for event in &step.events {
            if matches!(event, RoundEvent::ShuffleStarted { .. }) {
                present::fill_country_list(&self.document, self.session.pool());
            }
            present::render(&self.document, event, mode);
        }
        timers::apply(&mut self.pending, step.timer, on_timeout);
        step.events
    }
}

pub fn install(app: App) {
    APP.with(|cell| *cell.borrow_mut() = Some(app));
}

/// Run `f` against the installed app; `None` until the dataset has loaded.
pub fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    APP.with(|cell| outbox::with(cell, f))
}

/// Run one session call, render it, then notify the scene.
pub fn drive(f: impl FnOnce(&mut App) -> Result<Step, SessionError>) {
    APP.with(|cell| {
        outbox::drive(
            cell,
            |app| match f(app) {
                Ok(step) => app.apply(step),
                Err(e) => {
                    log::debug!("[input] ignored: {e}");
                    Vec::new()
                }
            },
            present::dispatch,
        )
    });
}

fn on_timeout(token: TimerToken) {
    drive(|app| Ok(app.session.on_timer(token)));
}
