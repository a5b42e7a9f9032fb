//! Macro values read from a translation unit compiled without the extraction
//! prelude. Used to check that the exported constants match what an ordinary
//! ncurses consumer sees.

use std::ffi::CStr;

use crate::ffi;

/// `(name, value)` for every macro the reference unit evaluated.
pub fn values() -> Vec<(String, i64)> {
    // Safety: the reference unit returns a static array of `count` entries
    // whose names are static NUL-terminated literals.
    unsafe {
        let count = ffi::nc_reference_count();
        let entries = ffi::nc_reference_entries();
        std::slice::from_raw_parts(entries, count)
            .iter()
            .map(|e| {
                let name = CStr::from_ptr(e.name).to_string_lossy().into_owned();
                (name, e.value as i64)
            })
            .collect()
    }
}

/// `stdscr` read directly, without the shim accessor.
pub fn stdscr() -> *mut std::ffi::c_void {
    // Safety: no arguments; reads library state only.
    unsafe { ffi::nc_reference_stdscr() }
}
