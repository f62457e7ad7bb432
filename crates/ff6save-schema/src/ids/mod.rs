//! Closed code tables for the integer identifiers stored in a save.
//!
//! Each table is a plain enum. Decoding accepts only the listed codes;
//! anything else is a schema violation.

use thiserror::Error;

/// A value that is not part of a code table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {table} value {value}")]
pub struct UnknownCode {
    pub table: &'static str,
    pub value: String,
}

/// Declare a closed code table: the enum, its lookups and its serde form
/// (the bare integer code).
macro_rules! code_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(i32)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant = $code, )+
        }

        impl $name {
            /// Every entry, in code order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn code(self) -> i32 {
                self as i32
            }

            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }

            pub fn from_code(code: i64) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl TryFrom<i64> for $name {
            type Error = $crate::ids::UnknownCode;

            fn try_from(code: i64) -> Result<Self, Self::Error> {
                Self::from_code(code).ok_or_else(|| $crate::ids::UnknownCode {
                    table: stringify!($name),
                    value: code.to_string(),
                })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::ids::UnknownCode;

            /// Parse a symbolic name (`Ramuh`) or an integer code (`62`).
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let unknown = || $crate::ids::UnknownCode {
                    table: stringify!($name),
                    value: s.to_string(),
                };
                if let Some(found) = Self::ALL.iter().copied().find(|v| v.name() == s) {
                    return Ok(found);
                }
                s.parse::<i64>()
                    .ok()
                    .and_then(Self::from_code)
                    .ok_or_else(unknown)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i32(self.code())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = <i64 as serde::Deserialize>::deserialize(deserializer)?;
                Self::from_code(code).ok_or_else(|| {
                    <D::Error as serde::de::Error>::custom(format!(
                        "unknown {} code {code}",
                        stringify!($name)
                    ))
                })
            }
        }
    };
}

mod ability;
mod character;
mod esper;
mod global;
mod item;

pub use ability::{AbilityId, AbilityType};
pub use character::CharacterId;
pub use esper::{esper_slot, EsperId};
pub use global::GlobalValuesKey;
pub use item::ItemId;
