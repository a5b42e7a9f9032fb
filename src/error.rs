//! Error types for ncurses-shim

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `stdscr` is still null: `initscr` (or `newterm`) has not run.
    #[error("stdscr is not initialized")]
    NotInitialized,

    #[error("{call} returned ERR")]
    CallFailed { call: &'static str },

    #[error("unknown constant: {0}")]
    UnknownConstant(String),
}

pub type Result<T> = std::result::Result<T, Error>;
