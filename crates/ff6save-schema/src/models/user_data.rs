use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::character::Character;
use super::records::Item;
use crate::ids::{CharacterId, EsperId};
use crate::wrappers::{ModelList, PrimitiveList};

/// The `userData` document: party, inventory and progression counters.
///
/// Fields typed as `String` hold embedded documents whose structure is not
/// modeled; they are carried through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserData {
    pub corps_list: String,
    pub corps_slots: String,
    #[serde(with = "crate::embedded")]
    pub owned_character_list: ModelList<Character>,
    #[serde(with = "crate::embedded")]
    pub released_jobs: PrimitiveList<i32>,
    #[serde(rename = "owendGil")]
    pub owned_gil: i64,
    pub play_time: f64,
    #[serde(rename = "normalOwnedItemList", with = "crate::embedded")]
    pub normal_owned_items: ModelList<Item>,
    #[serde(rename = "importantOwendItemList", with = "crate::embedded")]
    pub important_owned_items: ModelList<Item>,
    #[serde(with = "crate::embedded")]
    pub normal_owned_item_sort_id_list: PrimitiveList<i32>,
    pub current_area: String,
    pub current_location: String,
    #[serde(rename = "ownedTransportationList")]
    pub owned_transportations: String,
    #[serde(rename = "owendCrystalFlags", with = "crate::embedded")]
    pub owned_crystal_flags: PrimitiveList<bool>,
    pub config_data: String,
    #[serde(rename = "warehouseItemList")]
    pub warehouse_items: String,
    #[serde(rename = "ownedKeyWaordList")]
    pub owned_key_items: String,
    #[serde(rename = "ownedMagicList", with = "crate::embedded")]
    pub owned_magics: PrimitiveList<i32>,
    #[serde(rename = "learnedAbilityList", with = "crate::embedded")]
    pub learned_abilities: PrimitiveList<i32>,
    pub escape_count: i32,
    pub battle_count: i32,
    pub corps_slot_index: i32,
    pub open_chest_count: i32,
    #[serde(rename = "ownedMagicStoneList", with = "crate::embedded")]
    pub owned_espers: PrimitiveList<EsperId>,
    pub steps: i64,
    pub save_complete_count: i32,
    pub monsters_killed_count: i32,
    pub total_gil: i64,
    /// Plain JSON object, not an embedded document
    #[serde(rename = "cheatSettingsData")]
    pub cheat_settings: Map<String, Value>,
    pub is_opened_game_booster_window: bool,
}

impl UserData {
    pub fn characters(&self) -> &[Character] {
        &self.owned_character_list
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.owned_character_list.iter().find(|c| c.id == id)
    }

    pub fn character_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.owned_character_list.iter_mut().find(|c| c.id == id)
    }

    /// Append `esper` to the owned list and re-sort it by code.
    pub fn add_esper(&mut self, esper: EsperId) {
        self.owned_espers.push(esper);
        self.owned_espers.sort();
    }

    pub fn has_esper(&self, esper: EsperId) -> bool {
        self.owned_espers.contains(&esper)
    }
}
