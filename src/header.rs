//! Locating the installed ncurses header.
//!
//! This file is also compiled into `build.rs` via `#[path]`, so it sticks to std.

use std::path::{Path, PathBuf};

/// Subdirectory that wide-character builds of ncurses install into.
pub const WIDE_SUBDIR: &str = "ncursesw";
pub const HEADER_NAME: &str = "ncurses.h";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVariant {
    /// `ncursesw/ncurses.h`, built with wide-character support.
    Wide,
    /// Plain `ncurses.h`.
    Plain,
}

impl HeaderVariant {
    /// Library name to link against for this variant.
    pub fn link_name(self) -> &'static str {
        match self {
            HeaderVariant::Wide => "ncursesw",
            HeaderVariant::Plain => "ncurses",
        }
    }
}

/// A resolved header. `include_root` is the directory that, placed on the
/// include path, makes the header reachable under its conventional name
/// (`<ncursesw/ncurses.h>` or `<ncurses.h>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderChoice {
    pub variant: HeaderVariant,
    pub include_root: PathBuf,
    pub path: PathBuf,
}

/// Resolve the header from an ordered list of include directories.
///
/// A wide header anywhere in `dirs` wins over a plain one anywhere. A directory
/// that is itself named `ncursesw` (what `pkg-config ncursesw` usually reports)
/// counts as wide. Returns `None` when no candidate exists.
pub fn select_header<P: AsRef<Path>>(dirs: &[P]) -> Option<HeaderChoice> {
    for dir in dirs {
        let dir = dir.as_ref();
        let nested = dir.join(WIDE_SUBDIR).join(HEADER_NAME);
        if nested.is_file() {
            return Some(HeaderChoice {
                variant: HeaderVariant::Wide,
                include_root: dir.to_path_buf(),
                path: nested,
            });
        }
        if dir.file_name().is_some_and(|n| n == WIDE_SUBDIR) {
            let direct = dir.join(HEADER_NAME);
            if let (true, Some(parent)) = (direct.is_file(), dir.parent()) {
                return Some(HeaderChoice {
                    variant: HeaderVariant::Wide,
                    include_root: parent.to_path_buf(),
                    path: direct,
                });
            }
        }
    }
    select_plain(dirs)
}

/// Resolve only the plain header, ignoring any wide variant.
pub fn select_plain<P: AsRef<Path>>(dirs: &[P]) -> Option<HeaderChoice> {
    dirs.iter().map(AsRef::as_ref).find_map(|dir| {
        let direct = dir.join(HEADER_NAME);
        direct.is_file().then(|| HeaderChoice {
            variant: HeaderVariant::Plain,
            include_root: dir.to_path_buf(),
            path: direct,
        })
    })
}

/// Conventional system include directories, searched after anything
/// pkg-config or the environment supplied.
pub fn default_search_dirs() -> Vec<PathBuf> {
    [
        "/usr/include",
        "/usr/local/include",
        "/opt/homebrew/opt/ncurses/include",
        "/usr/local/opt/ncurses/include",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}
