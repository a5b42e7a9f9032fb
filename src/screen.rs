//! The default output window.
//!
//! `stdscr` is a global in most builds but a function call in reentrant ones,
//! so it is only reachable through the C accessor.

use std::ptr::NonNull;

use crate::error::{Error, Result};
use crate::ffi;

pub use crate::ffi::WINDOW;

/// `stdscr` as the library currently sees it; null before `initscr`.
pub fn raw_stdscr() -> *mut WINDOW {
    // Safety: the accessor takes no arguments and only reads library state.
    unsafe { ffi::nc_stdscr() }
}

/// Non-null window handle. Not `Send`: ncurses windows belong to the thread
/// that drives the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window(NonNull<WINDOW>);

impl Window {
    pub fn as_ptr(self) -> *mut WINDOW {
        self.0.as_ptr()
    }
}

/// The default output window, or `NotInitialized` before `initscr`.
pub fn default_window() -> Result<Window> {
    match NonNull::new(raw_stdscr()) {
        Some(ptr) => Ok(Window(ptr)),
        None => {
            tracing::trace!("stdscr requested before initscr");
            Err(Error::NotInitialized)
        }
    }
}
