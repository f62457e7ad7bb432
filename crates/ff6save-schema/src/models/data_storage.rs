use serde::{Deserialize, Serialize};

use crate::ids::GlobalValuesKey;

/// The `dataStorage` document: scenario and world flag arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DataStorage {
    pub scenario: Vec<i32>,
    pub treasure: Vec<i32>,
    #[serde(rename = "global")]
    pub global_values: Vec<i32>,
    pub area: Vec<i32>,
    pub map: Vec<i32>,
    pub selected: i32,
    pub item_selected: i32,
    pub transportation: Vec<String>,
}

impl DataStorage {
    pub fn global_value(&self, key: GlobalValuesKey) -> Option<i32> {
        self.global_values.get(key.index()).copied()
    }

    /// Returns the previous value, or `None` (and changes nothing) when the
    /// array is too short to hold `key`.
    pub fn set_global_value(&mut self, key: GlobalValuesKey, value: i32) -> Option<i32> {
        self.global_values
            .get_mut(key.index())
            .map(|slot| std::mem::replace(slot, value))
    }
}
