//! Serialization modes and the alias table.

use crate::error::SerializerError;

/// A selected wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Json = 1,
    MsgPack = 2,
    Igbinary = 3,
}

impl Mode {
    /// Canonical numeric identifier.
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Json => "json",
            Mode::MsgPack => "msgpack",
            Mode::Igbinary => "igbinary",
        }
    }
}

/// One row of the mode table.
pub struct ModeInfo {
    pub mode: Mode,
    pub id: u8,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

/// Every supported mode with its accepted aliases. Immutable,
/// process-wide; alias lookup is case-insensitive over this table.
pub static MODES: [ModeInfo; 3] = [
    ModeInfo {
        mode: Mode::Json,
        id: 1,
        name: "json",
        aliases: &["1", "j", "json"],
    },
    ModeInfo {
        mode: Mode::MsgPack,
        id: 2,
        name: "msgpack",
        aliases: &["2", "m", "mp", "msgpack", "messagepack"],
    },
    ModeInfo {
        mode: Mode::Igbinary,
        id: 3,
        name: "igbinary",
        aliases: &["3", "i", "ib", "ig", "igbinary"],
    },
];

/// A mode identifier as callers hand it over: a number or a name/alias.
///
/// Conversions exist from the integer types and from strings, so
/// `set_mode(2)` and `set_mode("msgpack")` both read naturally.
#[derive(Debug, Clone)]
pub enum ModeSelector {
    Id(i64),
    Name(String),
}

impl From<i64> for ModeSelector {
    fn from(id: i64) -> Self {
        ModeSelector::Id(id)
    }
}

impl From<i32> for ModeSelector {
    fn from(id: i32) -> Self {
        ModeSelector::Id(id as i64)
    }
}

impl From<u8> for ModeSelector {
    fn from(id: u8) -> Self {
        ModeSelector::Id(id as i64)
    }
}

impl From<&str> for ModeSelector {
    fn from(name: &str) -> Self {
        ModeSelector::Name(name.to_owned())
    }
}

impl From<String> for ModeSelector {
    fn from(name: String) -> Self {
        ModeSelector::Name(name)
    }
}

impl From<Mode> for ModeSelector {
    fn from(mode: Mode) -> Self {
        ModeSelector::Id(mode.id() as i64)
    }
}

/// Resolves a selector against the alias table.
pub(crate) fn resolve(selector: ModeSelector) -> Result<Mode, SerializerError> {
    let name = match selector {
        ModeSelector::Id(0) => return Err(SerializerError::EmptyModeIdentifier),
        ModeSelector::Id(id) => id.to_string(),
        ModeSelector::Name(name) => {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(SerializerError::EmptyModeIdentifier);
            }
            trimmed.to_lowercase()
        }
    };
    MODES
        .iter()
        .find(|info| info.aliases.contains(&name.as_str()))
        .map(|info| info.mode)
        .ok_or(SerializerError::UnsupportedMode)
}

#[cfg(test)]
mod tests {
    use super::{resolve, Mode, ModeSelector};
    use crate::error::SerializerError;

    #[test]
    fn every_alias_resolves() {
        let table: &[(&str, Mode)] = &[
            ("1", Mode::Json),
            ("j", Mode::Json),
            ("json", Mode::Json),
            ("2", Mode::MsgPack),
            ("m", Mode::MsgPack),
            ("mp", Mode::MsgPack),
            ("msgpack", Mode::MsgPack),
            ("messagepack", Mode::MsgPack),
            ("3", Mode::Igbinary),
            ("i", Mode::Igbinary),
            ("ib", Mode::Igbinary),
            ("ig", Mode::Igbinary),
            ("igbinary", Mode::Igbinary),
        ];
        for (alias, expected) in table {
            assert_eq!(resolve(ModeSelector::from(*alias)).unwrap(), *expected);
        }
    }

    #[test]
    fn aliases_are_case_insensitive_and_trimmed() {
        assert_eq!(resolve(ModeSelector::from("JSON")).unwrap(), Mode::Json);
        assert_eq!(
            resolve(ModeSelector::from("  MessagePack  ")).unwrap(),
            Mode::MsgPack
        );
        assert_eq!(resolve(ModeSelector::from("Ig")).unwrap(), Mode::Igbinary);
    }

    #[test]
    fn numeric_ids_resolve() {
        assert_eq!(resolve(ModeSelector::from(1)).unwrap(), Mode::Json);
        assert_eq!(resolve(ModeSelector::from(2i64)).unwrap(), Mode::MsgPack);
        assert_eq!(resolve(ModeSelector::from(3u8)).unwrap(), Mode::Igbinary);
    }

    #[test]
    fn unknown_identifiers_are_rejected() {
        assert_eq!(
            resolve(ModeSelector::from("yaml")),
            Err(SerializerError::UnsupportedMode)
        );
        assert_eq!(
            resolve(ModeSelector::from(4)),
            Err(SerializerError::UnsupportedMode)
        );
        assert_eq!(
            resolve(ModeSelector::from(-1)),
            Err(SerializerError::UnsupportedMode)
        );
    }

    #[test]
    fn empty_identifiers_are_a_distinct_error() {
        assert_eq!(
            resolve(ModeSelector::from("")),
            Err(SerializerError::EmptyModeIdentifier)
        );
        assert_eq!(
            resolve(ModeSelector::from("   ")),
            Err(SerializerError::EmptyModeIdentifier)
        );
        assert_eq!(
            resolve(ModeSelector::from(0)),
            Err(SerializerError::EmptyModeIdentifier)
        );
    }
}
