//! Browser-facing services: REST access, booking submission, deep links.

pub mod api;
pub mod submit;
pub mod whatsapp;

use std::cell::Cell;
use std::rc::Rc;

/// Liveness flag shared between a view and its in-flight fetches.
///
/// The effect cleanup cancels the guard when the view is torn down, so a
/// late response is dropped instead of being applied to a dead view.
#[derive(Clone)]
pub struct FetchGuard(Rc<Cell<bool>>);

impl FetchGuard {
    #[must_use]
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.0.get()
    }

    pub fn cancel(&self) {
        self.0.set(false);
    }
}

impl Default for FetchGuard {
    fn default() -> Self {
        Self::new()
    }
}
