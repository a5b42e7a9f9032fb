#![allow(dead_code)]

use std::collections::HashMap;

use ncurses_shim::{reference, table};

/// Macro values as an unrestricted C consumer sees them, keyed by name.
pub fn reference_map() -> HashMap<String, i64> {
    reference::values().into_iter().collect()
}

pub fn exported_value(name: &str) -> i64 {
    table::lookup(name)
        .unwrap_or_else(|e| panic!("{}", e))
        .value
}

/// Lay out an include tree under `root` with the given header files.
pub fn include_tree(root: &std::path::Path, headers: &[&str]) {
    for rel in headers {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "/* stub */\n").unwrap();
    }
}
