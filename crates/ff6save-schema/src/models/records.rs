//! Leaf records shared by characters and the inventory.

use serde::{Deserialize, Serialize};

use crate::ids::{AbilityId, ItemId};
use crate::wrappers::PrimitiveKeyValueList;

/// A stack of one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Item {
    pub content_id: ItemId,
    pub count: i32,
}

impl Item {
    pub fn new(content_id: ItemId, count: i32) -> Self {
        Self { content_id, count }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Ability {
    pub ability_id: AbilityId,
    /// Message/content table entry for the ability; not an item id
    pub content_id: i32,
    /// Learning progress toward the ability
    pub skill_level: i32,
    pub ability_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AbilitySlot {
    pub level: i32,
    #[serde(with = "crate::embedded")]
    pub slot_info: PrimitiveKeyValueList<i32, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Job {
    pub id: i32,
    pub level: i32,
    pub current_proficiency: i32,
}
