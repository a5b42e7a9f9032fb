mod common;

use common::{exported_value, reference_map};
use itertools::Itertools;
use ncurses_shim::{Group, attr, table};

#[test]
fn every_exported_constant_matches_the_library_macro() {
    let reference = reference_map();
    for c in table::all() {
        let expected = reference
            .get(c.name)
            .unwrap_or_else(|| panic!("{} missing from reference unit", c.name));
        assert_eq!(c.value, *expected, "{} differs from the macro", c.name);
    }
}

#[cfg(not(feature = "attrs-only"))]
#[test]
fn reference_names_are_all_exported() {
    // CCHARW_MAX only shows up on both sides when the headers define it
    for name in reference_map().keys() {
        assert!(table::lookup(name).is_ok(), "{} not exported", name);
    }
}

#[cfg(not(feature = "attrs-only"))]
#[test]
fn status_sentinels() {
    assert_eq!(exported_value("OK"), 0);
    assert_eq!(exported_value("ERR"), -1);
    assert_eq!(ncurses_shim::status::OK, 0);
    assert_eq!(ncurses_shim::status::ERR, -1);
}

#[cfg(not(feature = "attrs-only"))]
#[test]
fn function_keys_step_by_one() {
    let codes: Vec<i64> = (0..=12)
        .map(|n| exported_value(&format!("KEY_F{}", n)))
        .collect();
    for (a, b) in codes.iter().tuple_windows() {
        assert_eq!(b - a, 1);
    }
    assert_eq!(codes[1], exported_value("KEY_F0") + 1);
}

#[test]
fn style_flags_are_distinct_single_bits() {
    let flags: Vec<i64> = table::in_group(Group::Attribute)
        .filter(|c| !matches!(c.name, "A_NORMAL" | "A_ATTRIBUTES" | "A_CHARTEXT" | "A_COLOR"))
        .map(|c| c.value)
        .collect();
    assert_eq!(flags.len(), 16);
    for v in &flags {
        assert_eq!(v.count_ones(), 1, "{:#x} is not a single bit", v);
        assert_eq!(*v & attr::A_ATTRIBUTES as i64, *v);
    }
    assert!(flags.iter().all_unique());
}

#[test]
fn masks_do_not_overlap() {
    assert_eq!(attr::A_CHARTEXT & attr::A_COLOR, 0);
    assert_eq!(attr::A_COLOR & attr::A_ATTRIBUTES, attr::A_COLOR);
    assert_eq!(attr::A_CHARTEXT & attr::A_ATTRIBUTES, 0);
}

#[cfg(not(feature = "attrs-only"))]
#[test]
fn ccharw_max_follows_the_headers() {
    match ncurses_shim::limits::CCHARW_MAX {
        Some(n) => {
            assert!(n >= 1);
            assert_eq!(exported_value("CCHARW_MAX"), n as i64);
        }
        None => assert!(table::lookup("CCHARW_MAX").is_err()),
    }
}
