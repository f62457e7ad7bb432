use serde::{Deserialize, Serialize};

use super::data_storage::DataStorage;
use super::user_data::UserData;
use crate::timestamp::Timestamp;

/// Root of a decrypted, inflated save file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SaveDocument {
    pub id: i64,
    /// Screenshot shown on the load menu, base64 text (see [`Self::picture_bytes`])
    pub picture_data: String,
    #[serde(with = "crate::embedded")]
    pub user_data: UserData,
    pub config_data: String,
    #[serde(with = "crate::embedded")]
    pub data_storage: DataStorage,
    pub map_data: String,
    #[serde(rename = "timeStamp")]
    pub timestamp: Timestamp,
    /// Seconds
    pub play_time: f64,
    pub clear_flag: i32,
    pub is_complete_flag: i32,
}

impl SaveDocument {
    /// Decode the picture payload. The document keeps the text verbatim.
    pub fn picture_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        use base64::engine::general_purpose::STANDARD;
        use base64::Engine;

        STANDARD.decode(self.picture_data.trim())
    }
}
