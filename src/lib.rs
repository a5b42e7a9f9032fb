//! ncurses constants and the `stdscr` accessor, extracted from the installed
//! headers at build time.
//!
//! The values are never hardcoded: the build script compiles a small C shim
//! against whichever ncurses it finds (preferring the wide-character build)
//! and bindgen turns the shim's enums into the constants re-exported here.
//!
//! ```
//! use ncurses_shim::{attr, table};
//! let bold = table::lookup("A_BOLD").unwrap();
//! assert_eq!(bold.value, attr::A_BOLD as i64);
//! ```

mod ffi;

pub mod attr;
pub mod build_info;
pub mod error;
pub mod header;
pub mod screen;
pub mod table;

#[cfg(not(feature = "attrs-only"))]
pub mod key;
#[cfg(not(feature = "attrs-only"))]
pub mod limits;
#[cfg(not(feature = "attrs-only"))]
pub mod status;

#[doc(hidden)]
pub mod reference;

pub use attr::{Attributes, attr_t};
pub use build_info::{BuildInfo, build_info};
pub use error::{Error, Result};
pub use screen::{Window, default_window, raw_stdscr};
pub use table::{ExportedConstant, Group};
