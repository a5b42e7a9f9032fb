//! Raw bindgen output for the C shim.
//!
//! Constants keep their `_NC_` prefix here; the typed modules re-export them
//! under the ncurses names.

#![allow(
    non_camel_case_types,
    non_snake_case,
    non_upper_case_globals,
    dead_code
)]

include!(concat!(env!("OUT_DIR"), "/bindings.rs"));
