//! Video attributes.
//!
//! `A_*` values come from the installed headers, so the bit layout follows
//! whatever `chtype` width and attribute shift the library was built with.

use bitflags::bitflags;

use crate::table::{Group, shim_consts};

/// The library's attribute type (`chtype`-sized).
#[allow(non_camel_case_types)]
pub type attr_t = crate::ffi::attr_t;

shim_consts! {
    /// Attribute constants, in export order.
    table TABLE: attr_t, Group::Attribute;
    A_NORMAL = _NC_A_NORMAL;
    A_STANDOUT = _NC_A_STANDOUT;
    A_UNDERLINE = _NC_A_UNDERLINE;
    A_REVERSE = _NC_A_REVERSE;
    A_BLINK = _NC_A_BLINK;
    A_DIM = _NC_A_DIM;
    A_BOLD = _NC_A_BOLD;
    /// Alternate character set (line drawing).
    A_ALTCHARSET = _NC_A_ALTCHARSET;
    A_INVIS = _NC_A_INVIS;
    A_PROTECT = _NC_A_PROTECT;
    A_HORIZONTAL = _NC_A_HORIZONTAL;
    A_LEFT = _NC_A_LEFT;
    A_LOW = _NC_A_LOW;
    A_RIGHT = _NC_A_RIGHT;
    A_TOP = _NC_A_TOP;
    A_VERTICAL = _NC_A_VERTICAL;
    A_ITALIC = _NC_A_ITALIC;
    /// Every attribute bit, excluding character and color bits.
    A_ATTRIBUTES = _NC_A_ATTRIBUTES;
    A_CHARTEXT = _NC_A_CHARTEXT;
    /// Color pair bits.
    A_COLOR = _NC_A_COLOR;
}

const PAIR_SHIFT: u32 = A_COLOR.trailing_zeros();

bitflags! {
    /// Attribute set; `Attributes::empty()` is `A_NORMAL`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Attributes: attr_t {
        const STANDOUT = A_STANDOUT;
        const UNDERLINE = A_UNDERLINE;
        const REVERSE = A_REVERSE;
        const BLINK = A_BLINK;
        const DIM = A_DIM;
        const BOLD = A_BOLD;
        const ALTCHARSET = A_ALTCHARSET;
        const INVIS = A_INVIS;
        const PROTECT = A_PROTECT;
        const HORIZONTAL = A_HORIZONTAL;
        const LEFT = A_LEFT;
        const LOW = A_LOW;
        const RIGHT = A_RIGHT;
        const TOP = A_TOP;
        const VERTICAL = A_VERTICAL;
        const ITALIC = A_ITALIC;
    }
}

impl Attributes {
    /// Keep the attribute bits of a raw `attr_t`, dropping character and color bits.
    pub fn from_raw(raw: attr_t) -> Self {
        Self::from_bits_truncate(raw & A_ATTRIBUTES)
    }
}

/// `COLOR_PAIR(n)`: the attribute bits selecting color pair `n`.
pub const fn color_pair(n: u16) -> attr_t {
    ((n as attr_t) << PAIR_SHIFT) & A_COLOR
}

/// `PAIR_NUMBER(a)`: the color pair encoded in `a`.
pub const fn pair_number(a: attr_t) -> u16 {
    ((a & A_COLOR) >> PAIR_SHIFT) as u16
}
