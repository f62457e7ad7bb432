use serde::{Deserialize, Serialize};

use super::parameter::Parameter;
use super::records::{Ability, AbilitySlot, Item, Job};
use crate::ids::{AbilityType, CharacterId, EsperId};
use crate::wrappers::{ModelKeyValueList, ModelList, PrimitiveKeyValueList, PrimitiveList};

/// One entry of `ownedCharacterList`.
///
/// Every collection field is an embedded document on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Character {
    pub id: CharacterId,
    pub character_status_id: i32,
    pub is_enable_corps: bool,
    pub job_id: i32,
    pub name: String,
    pub current_exp: i64,
    #[serde(with = "crate::embedded")]
    pub parameter: Parameter,
    #[serde(with = "crate::embedded")]
    pub command_list: PrimitiveList<i32>,
    #[serde(with = "crate::embedded")]
    pub ability_list: ModelList<Ability>,
    #[serde(with = "crate::embedded")]
    pub ability_slot_data_list: ModelList<AbilitySlot>,
    #[serde(with = "crate::embedded")]
    pub job_list: ModelList<Job>,
    /// Equipment slot → item
    #[serde(with = "crate::embedded")]
    pub equipment_list: ModelKeyValueList<i32, Item>,
    /// Ability ids in the order they were learned
    #[serde(with = "crate::embedded")]
    pub addition_order_owned_ability_ids: PrimitiveList<i32>,
    #[serde(with = "crate::embedded")]
    pub sort_order_owned_ability_ids: PrimitiveList<i32>,
    /// Abilities grouped by category (magic, blitz, lore, ...)
    #[serde(with = "crate::embedded")]
    pub ability_dictionary: ModelKeyValueList<AbilityType, ModelList<Ability>>,
    #[serde(with = "crate::embedded")]
    pub skill_level_targets: PrimitiveKeyValueList<i32, String>,
    #[serde(rename = "learningAbilitys", with = "crate::embedded")]
    pub learning_abilities: PrimitiveList<i32>,
    #[serde(rename = "equipmentAbilitys", with = "crate::embedded")]
    pub equipment_abilities: PrimitiveList<i32>,
    #[serde(rename = "numberOfButtles")]
    pub number_of_battles: i32,
    /// Monster captured by Gau/Relm; 0 when none
    pub owned_monster_id: i32,
    /// Equipped esper, `None` when the slot is empty (wire value 0)
    #[serde(rename = "magicStoneId", with = "crate::ids::esper_slot")]
    pub esper: Option<EsperId>,
    pub magic_learning_value: i32,
    pub is_default_name: bool,
}

impl Character {
    /// Abilities of one category, if the character has any.
    pub fn abilities_of(&self, kind: AbilityType) -> Option<&[Ability]> {
        self.ability_dictionary.get(&kind).map(|list| list.as_slice())
    }

    pub fn equipped(&self) -> impl Iterator<Item = (i32, &Item)> {
        self.equipment_list.iter().map(|(slot, item)| (*slot, item))
    }
}
