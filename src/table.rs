//! The exported constant table.
//!
//! Every constant the shim extracts appears here exactly once, with the value
//! the installed headers produced at build time.

use std::fmt;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Attribute,
    Status,
    Limit,
    Key,
}

impl Group {
    pub fn as_str(self) -> &'static str {
        match self {
            Group::Attribute => "attr",
            Group::Status => "status",
            Group::Limit => "limit",
            Group::Key => "key",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Group {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "attr" | "attribute" => Ok(Group::Attribute),
            "status" => Ok(Group::Status),
            "limit" => Ok(Group::Limit),
            "key" => Ok(Group::Key),
            other => Err(format!("unknown group `{}` (attr, status, limit, key)", other)),
        }
    }
}

/// A library macro re-exported under its own name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportedConstant {
    pub name: &'static str,
    pub value: i64,
    pub group: Group,
}

/// Declares typed `pub const`s from bindgen constants together with a table
/// of their names and widened values.
macro_rules! shim_consts {
    (
        $(#[$tmeta:meta])*
        table $table:ident: $ty:ty, $group:expr;
        $($(#[$meta:meta])* $name:ident = $raw:ident;)*
    ) => {
        $(
            $(#[$meta])*
            pub const $name: $ty = crate::ffi::$raw as $ty;
        )*

        $(#[$tmeta])*
        pub const $table: &[crate::table::ExportedConstant] = &[
            $(crate::table::ExportedConstant {
                name: stringify!($name),
                value: $name as i64,
                group: $group,
            },)*
        ];
    };
}

pub(crate) use shim_consts;

fn tables() -> impl Iterator<Item = &'static [ExportedConstant]> {
    let attrs: &'static [ExportedConstant] = crate::attr::TABLE;
    #[cfg(not(feature = "attrs-only"))]
    let rest: Vec<&'static [ExportedConstant]> = vec![
        crate::status::TABLE,
        crate::limits::TABLE,
        crate::key::TABLE,
    ];
    #[cfg(feature = "attrs-only")]
    let rest: Vec<&'static [ExportedConstant]> = Vec::new();
    std::iter::once(attrs).chain(rest)
}

/// Every exported constant, grouped in declaration order.
pub fn all() -> impl Iterator<Item = &'static ExportedConstant> {
    tables().flatten()
}

pub fn in_group(group: Group) -> impl Iterator<Item = &'static ExportedConstant> {
    all().filter(move |c| c.group == group)
}

/// Find a constant by its ncurses name, e.g. `"KEY_F1"` or `"A_BOLD"`.
pub fn lookup(name: &str) -> Result<&'static ExportedConstant> {
    all().find(|c| c.name == name).ok_or_else(|| {
        tracing::debug!(name, "constant lookup missed");
        Error::UnknownConstant(name.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let mut seen = HashSet::new();
        for c in all() {
            assert!(seen.insert(c.name), "duplicate {}", c.name);
        }
    }

    #[test]
    fn lookup_finds_attribute() {
        let c = lookup("A_BOLD").unwrap();
        assert_eq!(c.group, Group::Attribute);
        assert_eq!(c.value, crate::attr::A_BOLD as i64);
    }

    #[test]
    fn lookup_miss_is_an_error() {
        assert_eq!(
            lookup("A_SPARKLE"),
            Err(Error::UnknownConstant("A_SPARKLE".into()))
        );
    }

    #[test]
    fn group_parses_from_cli_names() {
        assert_eq!("attr".parse::<Group>(), Ok(Group::Attribute));
        assert_eq!("key".parse::<Group>(), Ok(Group::Key));
        assert!("keys".parse::<Group>().is_err());
    }
}
