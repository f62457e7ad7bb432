//! ff6save-schema: typed model of the FF6 save document
//!
//! The decrypted payload is JSON, but most objects and arrays inside it are
//! stored as JSON *text* in string fields. The models here decode those
//! layers depth-first into one typed tree and re-embed them on encode.
//!
//! Decoding is closed: unknown fields, unknown enum codes and mismatched
//! key/value arrays are all errors.

pub mod embedded;
pub mod ids;
pub mod models;
pub mod timestamp;
pub mod wrappers;

use ff6save_core::SaveResult;
use serde_json::Value;
use tracing::debug;

pub use embedded::{decode_document, encode_document};
pub use ids::{AbilityId, AbilityType, CharacterId, EsperId, GlobalValuesKey, ItemId, UnknownCode};
pub use models::{
    Ability, AbilitySlot, Character, DataStorage, Item, Job, Parameter, SaveDocument, UserData,
};
pub use timestamp::{Timestamp, TIMESTAMP_FORMAT};
pub use wrappers::{
    KeyValues, LengthMismatch, ModelKeyValueList, ModelList, PrimitiveKeyValueList, PrimitiveList,
};

/// Decode a complete save document from its top-level JSON bytes.
///
/// A malformed `timeStamp` string is reported as
/// [`SaveError::TimestampFormat`](ff6save_core::SaveError::TimestampFormat)
/// rather than as a generic schema violation.
pub fn decode_save(json: &[u8]) -> SaveResult<SaveDocument> {
    let value: Value = serde_json::from_slice(json)?;
    if let Some(raw) = value.get("timeStamp").and_then(Value::as_str) {
        Timestamp::parse(raw)?;
    }

    let doc: SaveDocument = serde_json::from_value(value)?;
    debug!(
        id = doc.id,
        characters = doc.user_data.owned_character_list.len(),
        "decoded save document"
    );
    Ok(doc)
}

/// Encode a save document to compact top-level JSON bytes.
pub fn encode_save(doc: &SaveDocument) -> SaveResult<Vec<u8>> {
    let json = serde_json::to_vec(doc)?;
    debug!(id = doc.id, bytes = json.len(), "encoded save document");
    Ok(json)
}
