//! What the build script found.

/// Which header the constants were extracted from, and how it was located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    /// Path of the `ncurses.h` that was compiled.
    pub header: &'static str,
    /// Whether the wide-character (`ncursesw`) header was used.
    pub wide: bool,
    /// `pkg-config:<name>`, `env:NCURSES_SHIM_INCLUDE_DIR` or `system`.
    pub probe: &'static str,
}

pub const fn build_info() -> BuildInfo {
    BuildInfo {
        header: env!("NCURSES_SHIM_HEADER"),
        wide: cfg!(nc_wide),
        probe: env!("NCURSES_SHIM_PROBE"),
    }
}
