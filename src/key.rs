//! Special key codes as returned by `getch`/`get_wch`.

use crate::table::{self, Group, shim_consts};

shim_consts! {
    table TABLE: i32, Group::Key;
    /// `get_wch` status meaning "the value is a key code".
    KEY_CODE_YES = _NC_KEY_CODE_YES;
    KEY_MIN = _NC_KEY_MIN;
    KEY_MAX = _NC_KEY_MAX;
    KEY_BREAK = _NC_KEY_BREAK;
    KEY_SRESET = _NC_KEY_SRESET;
    KEY_RESET = _NC_KEY_RESET;

    KEY_DOWN = _NC_KEY_DOWN;
    KEY_UP = _NC_KEY_UP;
    KEY_LEFT = _NC_KEY_LEFT;
    KEY_RIGHT = _NC_KEY_RIGHT;
    KEY_HOME = _NC_KEY_HOME;
    KEY_BACKSPACE = _NC_KEY_BACKSPACE;

    KEY_F0 = _NC_KEY_F0;
    KEY_F1 = _NC_KEY_F1;
    KEY_F2 = _NC_KEY_F2;
    KEY_F3 = _NC_KEY_F3;
    KEY_F4 = _NC_KEY_F4;
    KEY_F5 = _NC_KEY_F5;
    KEY_F6 = _NC_KEY_F6;
    KEY_F7 = _NC_KEY_F7;
    KEY_F8 = _NC_KEY_F8;
    KEY_F9 = _NC_KEY_F9;
    KEY_F10 = _NC_KEY_F10;
    KEY_F11 = _NC_KEY_F11;
    KEY_F12 = _NC_KEY_F12;

    /// Delete line.
    KEY_DL = _NC_KEY_DL;
    /// Insert line.
    KEY_IL = _NC_KEY_IL;
    /// Delete character.
    KEY_DC = _NC_KEY_DC;
    /// Insert character or enter insert mode.
    KEY_IC = _NC_KEY_IC;
    KEY_EIC = _NC_KEY_EIC;
    KEY_CLEAR = _NC_KEY_CLEAR;
    KEY_EOS = _NC_KEY_EOS;
    KEY_EOL = _NC_KEY_EOL;
    /// Scroll forward.
    KEY_SF = _NC_KEY_SF;
    /// Scroll backward.
    KEY_SR = _NC_KEY_SR;
    KEY_NPAGE = _NC_KEY_NPAGE;
    KEY_PPAGE = _NC_KEY_PPAGE;
    KEY_STAB = _NC_KEY_STAB;
    KEY_CTAB = _NC_KEY_CTAB;
    KEY_CATAB = _NC_KEY_CATAB;
    KEY_ENTER = _NC_KEY_ENTER;
    KEY_PRINT = _NC_KEY_PRINT;
    KEY_LL = _NC_KEY_LL;
    KEY_A1 = _NC_KEY_A1;
    KEY_A3 = _NC_KEY_A3;
    KEY_B2 = _NC_KEY_B2;
    KEY_C1 = _NC_KEY_C1;
    KEY_C3 = _NC_KEY_C3;
    KEY_BTAB = _NC_KEY_BTAB;
    KEY_BEG = _NC_KEY_BEG;
    KEY_CANCEL = _NC_KEY_CANCEL;
    KEY_CLOSE = _NC_KEY_CLOSE;
    KEY_COMMAND = _NC_KEY_COMMAND;
    KEY_COPY = _NC_KEY_COPY;
    KEY_CREATE = _NC_KEY_CREATE;
    KEY_END = _NC_KEY_END;
    KEY_EXIT = _NC_KEY_EXIT;
    KEY_FIND = _NC_KEY_FIND;
    KEY_HELP = _NC_KEY_HELP;
    KEY_MARK = _NC_KEY_MARK;
    KEY_MESSAGE = _NC_KEY_MESSAGE;
    KEY_MOVE = _NC_KEY_MOVE;
    KEY_NEXT = _NC_KEY_NEXT;
    KEY_OPEN = _NC_KEY_OPEN;
    KEY_OPTIONS = _NC_KEY_OPTIONS;
    KEY_PREVIOUS = _NC_KEY_PREVIOUS;
    KEY_REDO = _NC_KEY_REDO;
    KEY_REFERENCE = _NC_KEY_REFERENCE;
    KEY_REFRESH = _NC_KEY_REFRESH;
    KEY_REPLACE = _NC_KEY_REPLACE;
    KEY_RESTART = _NC_KEY_RESTART;
    KEY_RESUME = _NC_KEY_RESUME;
    KEY_SAVE = _NC_KEY_SAVE;
    KEY_SUSPEND = _NC_KEY_SUSPEND;
    KEY_UNDO = _NC_KEY_UNDO;
    KEY_MOUSE = _NC_KEY_MOUSE;
    /// Terminal resize (SIGWINCH).
    KEY_RESIZE = _NC_KEY_RESIZE;

    KEY_SBEG = _NC_KEY_SBEG;
    KEY_SCANCEL = _NC_KEY_SCANCEL;
    KEY_SCOMMAND = _NC_KEY_SCOMMAND;
    KEY_SCOPY = _NC_KEY_SCOPY;
    KEY_SCREATE = _NC_KEY_SCREATE;
    KEY_SDC = _NC_KEY_SDC;
    KEY_SDL = _NC_KEY_SDL;
    KEY_SELECT = _NC_KEY_SELECT;
    KEY_SEND = _NC_KEY_SEND;
    KEY_SEOL = _NC_KEY_SEOL;
    KEY_SEXIT = _NC_KEY_SEXIT;
    KEY_SFIND = _NC_KEY_SFIND;
    KEY_SHELP = _NC_KEY_SHELP;
    KEY_SHOME = _NC_KEY_SHOME;
    KEY_SIC = _NC_KEY_SIC;
    KEY_SLEFT = _NC_KEY_SLEFT;
    KEY_SMESSAGE = _NC_KEY_SMESSAGE;
    KEY_SMOVE = _NC_KEY_SMOVE;
    KEY_SNEXT = _NC_KEY_SNEXT;
    KEY_SOPTIONS = _NC_KEY_SOPTIONS;
    KEY_SPREVIOUS = _NC_KEY_SPREVIOUS;
    KEY_SPRINT = _NC_KEY_SPRINT;
    KEY_SREDO = _NC_KEY_SREDO;
    KEY_SREPLACE = _NC_KEY_SREPLACE;
    KEY_SRIGHT = _NC_KEY_SRIGHT;
    KEY_SRSUME = _NC_KEY_SRSUME;
    KEY_SSAVE = _NC_KEY_SSAVE;
    KEY_SSUSPEND = _NC_KEY_SSUSPEND;
    KEY_SUNDO = _NC_KEY_SUNDO;
}

/// ncurses reserves 64 codes starting at `KEY_F0` for function keys.
pub const FUNCTION_KEY_SLOTS: u8 = 64;

/// `KEY_F(n)`, or `None` past the reserved function-key range.
pub const fn key_f(n: u8) -> Option<i32> {
    if n < FUNCTION_KEY_SLOTS {
        Some(KEY_F0 + n as i32)
    } else {
        None
    }
}

/// Inverse of [`key_f`].
pub const fn function_key_number(code: i32) -> Option<u8> {
    let n = code - KEY_F0;
    if n >= 0 && n < FUNCTION_KEY_SLOTS as i32 {
        Some(n as u8)
    } else {
        None
    }
}

/// The ncurses name of a key code, for codes this crate exports.
///
/// A few codes share a value (e.g. `KEY_MIN` and `KEY_BREAK`); the first
/// exported name wins.
pub fn key_name(code: i32) -> Option<&'static str> {
    table::in_group(Group::Key)
        .find(|c| c.value == code as i64 && c.name != "KEY_MIN")
        .map(|c| c.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_f_steps_from_f0() {
        assert_eq!(key_f(0), Some(KEY_F0));
        assert_eq!(key_f(1), Some(KEY_F1));
        assert_eq!(key_f(12), Some(KEY_F12));
        assert_eq!(key_f(FUNCTION_KEY_SLOTS), None);
    }

    #[test]
    fn function_key_number_inverts_key_f() {
        assert_eq!(function_key_number(KEY_F7), Some(7));
        assert_eq!(function_key_number(KEY_F0 - 1), None);
        assert_eq!(function_key_number(KEY_F0 + FUNCTION_KEY_SLOTS as i32), None);
    }

    #[test]
    fn key_name_of_shifted_left() {
        assert_eq!(key_name(KEY_SLEFT), Some("KEY_SLEFT"));
        assert_eq!(key_name(KEY_BREAK), Some("KEY_BREAK"));
        assert_eq!(key_name('a' as i32), None);
    }
}
