//! Document-as-string fields
//!
//! The save format nests most objects and arrays as JSON *text* inside a
//! string value, e.g. `"parameter": "{\"currentHP\":512,...}"`. Decoding
//! reads the outer string and parses it again as the target type; encoding
//! serializes the inner value to compact JSON first and embeds the text.
//!
//! Fields opt in with `#[serde(with = "crate::embedded")]`, or
//! `crate::embedded::seq` for arrays whose elements are each embedded.

use ff6save_core::SaveResult;
use serde::de::{DeserializeOwned, Error as _};
use serde::ser::{Error as _, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Parse one embedded document.
pub fn decode_document<T: DeserializeOwned>(text: &str) -> SaveResult<T> {
    Ok(serde_json::from_str(text)?)
}

/// Encode one value as embedded document text.
pub fn encode_document<T: Serialize>(value: &T) -> SaveResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Serializes the borrowed value as a string holding its JSON encoding.
pub struct Embedded<'a, T>(pub &'a T);

impl<T: Serialize> Serialize for Embedded<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = serde_json::to_string(self.0).map_err(S::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

/// Serializes each element as a separate embedded document.
pub struct EmbeddedSeq<'a, T>(pub &'a [T]);

impl<T: Serialize> Serialize for EmbeddedSeq<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for item in self.0 {
            seq.serialize_element(&Embedded(item))?;
        }
        seq.end()
    }
}

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    Embedded(value).serialize(serializer)
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: DeserializeOwned,
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    serde_json::from_str(&text).map_err(D::Error::custom)
}

/// Arrays of embedded documents: `["{...}", "{...}"]`.
pub mod seq {
    use serde::de::{DeserializeOwned, Error as _};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::EmbeddedSeq;

    pub fn serialize<T, S>(items: &[T], serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        EmbeddedSeq(items).serialize(serializer)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        T: DeserializeOwned,
        D: Deserializer<'de>,
    {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|text| serde_json::from_str(text).map_err(D::Error::custom))
            .collect()
    }
}
