mod common;

use common::include_tree;
use ncurses_shim::build_info;
use ncurses_shim::header::{HeaderVariant, select_header, select_plain};
use tempfile::TempDir;

#[test]
fn wide_header_preferred_over_plain() {
    let tmp = TempDir::new().unwrap();
    include_tree(tmp.path(), &["ncurses.h", "ncursesw/ncurses.h"]);

    let choice = select_header(&[tmp.path()]).unwrap();
    assert_eq!(choice.variant, HeaderVariant::Wide);
    assert_eq!(choice.include_root, tmp.path());
    assert_eq!(choice.path, tmp.path().join("ncursesw/ncurses.h"));
}

#[test]
fn wide_in_later_dir_still_wins() {
    let plain = TempDir::new().unwrap();
    let wide = TempDir::new().unwrap();
    include_tree(plain.path(), &["ncurses.h"]);
    include_tree(wide.path(), &["ncursesw/ncurses.h"]);

    let choice = select_header(&[plain.path(), wide.path()]).unwrap();
    assert_eq!(choice.variant, HeaderVariant::Wide);
    assert_eq!(choice.include_root, wide.path());
}

#[test]
fn pkg_config_style_ncursesw_dir_is_wide() {
    let tmp = TempDir::new().unwrap();
    include_tree(tmp.path(), &["ncursesw/ncurses.h"]);
    let dir = tmp.path().join("ncursesw");

    let choice = select_header(&[&dir]).unwrap();
    assert_eq!(choice.variant, HeaderVariant::Wide);
    assert_eq!(choice.include_root, tmp.path());
}

#[test]
fn falls_back_to_plain_header() {
    let tmp = TempDir::new().unwrap();
    include_tree(tmp.path(), &["ncurses.h"]);

    let choice = select_header(&[tmp.path()]).unwrap();
    assert_eq!(choice.variant, HeaderVariant::Plain);
    assert_eq!(choice.variant.link_name(), "ncurses");
    assert_eq!(choice.path, tmp.path().join("ncurses.h"));
}

#[test]
fn forced_plain_ignores_wide_header() {
    let tmp = TempDir::new().unwrap();
    include_tree(tmp.path(), &["ncurses.h", "ncursesw/ncurses.h"]);

    let choice = select_plain(&[tmp.path()]).unwrap();
    assert_eq!(choice.variant, HeaderVariant::Plain);
}

#[test]
fn no_headers_means_no_choice() {
    let tmp = TempDir::new().unwrap();
    include_tree(tmp.path(), &["curses.h", "ncursesw/term.h"]);

    assert_eq!(select_header(&[tmp.path()]), None);
    assert_eq!(select_header::<&std::path::Path>(&[]), None);
}

#[test]
fn build_used_the_header_it_reports() {
    let info = build_info();
    assert!(std::path::Path::new(info.header).is_file());
    assert!(info.header.ends_with("ncurses.h"));
    if info.wide {
        assert!(info.header.contains("ncursesw"));
    }
}
