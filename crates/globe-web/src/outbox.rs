//! Borrow discipline for the single app instance.
//!
//! Session calls run with the app mutably borrowed. Scene listeners run
//! synchronously on `dispatchEvent` and may call back into the app, so
//! their events are only emitted once the borrow has been released.

use std::cell::RefCell;

/// Run `f` against the app; `None` before install or on a nested call.
pub fn with<A, R>(cell: &RefCell<Option<A>>, f: impl FnOnce(&mut A) -> R) -> Option<R> {
    match cell.try_borrow_mut() {
        Ok(mut guard) => guard.as_mut().map(f),
        Err(_) => {
            log::warn!("[app] re-entrant call dropped");
            None
        }
    }
}

/// Like [`with`], then hands each produced item to `emit` with the app free.
pub fn drive<A, T>(
    cell: &RefCell<Option<A>>,
    f: impl FnOnce(&mut A) -> Vec<T>,
    mut emit: impl FnMut(&T),
) {
    let Some(items) = with(cell, f) else {
        return;
    };
    for item in &items {
        emit(item);
    }
}
