//! Limits taken from the library's own build configuration.

use crate::table::ExportedConstant;

#[cfg(nc_ccharw_max)]
mod present {
    use crate::table::{Group, shim_consts};

    shim_consts! {
        table TABLE: usize, Group::Limit;
        CCHARW_MAX = _NC_CCHARW_MAX;
    }
}

/// Maximum number of characters (base plus combining) in one `cchar_t` cell.
/// `None` when the installed headers do not define `CCHARW_MAX`.
#[cfg(nc_ccharw_max)]
pub const CCHARW_MAX: Option<usize> = Some(present::CCHARW_MAX);
#[cfg(not(nc_ccharw_max))]
pub const CCHARW_MAX: Option<usize> = None;

#[cfg(nc_ccharw_max)]
pub const TABLE: &[ExportedConstant] = present::TABLE;
#[cfg(not(nc_ccharw_max))]
pub const TABLE: &[ExportedConstant] = &[];
