use serde::{Deserialize, Serialize};

use crate::wrappers::{PrimitiveKeyValueList, PrimitiveList};

/// Live HP/MP and the bonus ("additional") stats layered on top of a
/// character's base stats.
///
/// The wire names carry the game's `addtional` misspelling, and weight is
/// spelled `addionalWeight`; both are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameter {
    #[serde(rename = "currentHP")]
    pub current_hp: i32,
    #[serde(rename = "currentMP")]
    pub current_mp: i32,
    #[serde(rename = "currentMpCountList", with = "crate::embedded")]
    pub current_mp_count_list: PrimitiveKeyValueList<i32, i32>,
    #[serde(rename = "addtionalMaxMpCountList", with = "crate::embedded")]
    pub additional_max_mp_count_list: PrimitiveKeyValueList<i32, i32>,
    #[serde(rename = "addtionalLevel")]
    pub additional_level: i32,
    #[serde(rename = "addtionalMaxHp")]
    pub additional_max_hp: i32,
    #[serde(rename = "addtionalMaxMp")]
    pub additional_max_mp: i32,
    #[serde(rename = "addtionalPower")]
    pub additional_power: i32,
    #[serde(rename = "addtionalVitality")]
    pub additional_vitality: i32,
    #[serde(rename = "addtionalAgility")]
    pub additional_agility: i32,
    #[serde(rename = "addionalWeight")]
    pub additional_weight: i32,
    #[serde(rename = "addtionalIntelligence")]
    pub additional_intelligence: i32,
    #[serde(rename = "addtionalSpirit")]
    pub additional_spirit: i32,
    #[serde(rename = "addtionalAttack")]
    pub additional_attack: i32,
    #[serde(rename = "addtionalDefense")]
    pub additional_defense: i32,
    #[serde(rename = "addtionalAbilityDefense")]
    pub additional_ability_defense: i32,
    #[serde(rename = "addtionalAbilityEvasionRate")]
    pub additional_ability_evasion_rate: i32,
    #[serde(rename = "addtionalMagic")]
    pub additional_magic: i32,
    #[serde(rename = "addtionalLuck")]
    pub additional_luck: i32,
    #[serde(rename = "addtionalAccuracyRate")]
    pub additional_accuracy_rate: i32,
    #[serde(rename = "addtionalEvasionRate")]
    pub additional_evasion_rate: i32,
    #[serde(rename = "addtionalAbilityDisturbedRate")]
    pub additional_ability_disturbed_rate: i32,
    #[serde(rename = "addtionalCriticalRate")]
    pub additional_critical_rate: i32,
    #[serde(rename = "addtionalDamageDirmeter")]
    pub additional_damage_dirmeter: i32,
    #[serde(rename = "addtionalAbilityDefenseRate")]
    pub additional_ability_defense_rate: i32,
    #[serde(rename = "addtionalAccuracyCount")]
    pub additional_accuracy_count: i32,
    #[serde(rename = "addtionalEvasionCount")]
    pub additional_evasion_count: i32,
    #[serde(rename = "addtionalDefenseCount")]
    pub additional_defense_count: i32,
    #[serde(rename = "addtionalMagicDefenseCount")]
    pub additional_magic_defense_count: i32,
    #[serde(rename = "currentConditionList", with = "crate::embedded")]
    pub current_condition_list: PrimitiveList<i32>,
}
