//! `OK` / `ERR` return codes.

use libc::c_int;

use crate::error::{Error, Result};
use crate::table::{Group, shim_consts};

shim_consts! {
    table TABLE: c_int, Group::Status;
    OK = _NC_OK;
    ERR = _NC_ERR;
}

/// Turn an ncurses return code into a `Result`, naming the call on failure.
pub fn check(call: &'static str, rc: c_int) -> Result<c_int> {
    if rc == ERR {
        tracing::debug!(call, rc, "ncurses call failed");
        Err(Error::CallFailed { call })
    } else {
        Ok(rc)
    }
}
