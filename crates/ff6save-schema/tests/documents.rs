//! Whole-document decode/encode against the wire-format fixture.

use ff6save_core::SaveError;
use ff6save_schema::{
    decode_save, encode_save, AbilityType, CharacterId, EsperId, GlobalValuesKey, ItemId,
    SaveDocument,
};
use serde_json::{json, Value};

const SAMPLE: &str = include_str!("fixtures/sample_save.json");

fn sample() -> SaveDocument {
    decode_save(SAMPLE.as_bytes()).unwrap()
}

fn sample_value() -> Value {
    serde_json::from_str(SAMPLE).unwrap()
}

/// Re-parse an embedded document in place, edit it, and embed it again.
fn edit_text(v: &mut Value, f: impl FnOnce(&mut Value)) {
    let mut inner: Value = serde_json::from_str(v.as_str().unwrap()).unwrap();
    f(&mut inner);
    *v = Value::String(inner.to_string());
}

fn edit_first_character(doc: &mut Value, f: impl FnOnce(&mut Value)) {
    edit_text(&mut doc["userData"], |ud| {
        edit_text(&mut ud["ownedCharacterList"], |list| {
            edit_text(&mut list["target"][0], f);
        });
    });
}

fn decode_value(doc: &Value) -> Result<SaveDocument, SaveError> {
    decode_save(doc.to_string().as_bytes())
}

#[test]
fn decodes_every_layer() {
    let doc = sample();

    assert_eq!(doc.id, 3);
    assert_eq!(doc.timestamp.to_string(), "03/14/2023 09:26:53 PM");
    assert_eq!(doc.play_time, 86400.5);

    let ud = &doc.user_data;
    assert_eq!(ud.owned_gil, 48213);
    assert_eq!(ud.characters().len(), 2);
    assert_eq!(
        *ud.owned_espers,
        vec![EsperId::Ramuh, EsperId::Ifrit, EsperId::Maduin]
    );
    assert_eq!(*ud.owned_crystal_flags, vec![true, false, false]);

    let terra = ud.character(CharacterId::Terra).unwrap();
    assert_eq!(terra.name, "Terra");
    assert_eq!(terra.esper, Some(EsperId::Ifrit));
    assert_eq!(terra.number_of_battles, 412);
    assert_eq!(terra.parameter.current_hp, 1742);
    assert_eq!(terra.parameter.additional_power, 3);
    assert_eq!(
        terra.equipment_list.get(&2).map(|item| item.content_id),
        Some(ItemId::CursedShield)
    );
    assert_eq!(terra.abilities_of(AbilityType::Magic).map(<[_]>::len), Some(3));
    assert_eq!(terra.ability_slot_data_list[0].slot_info.len(), 2);

    assert_eq!(
        doc.data_storage
            .global_value(GlobalValuesKey::CursedShieldBattles),
        Some(17)
    );
}

#[test]
fn empty_esper_slot_is_none_and_encodes_as_zero() {
    let doc = sample();
    let shadow = doc.user_data.character(CharacterId::Shadow).unwrap();
    assert_eq!(shadow.esper, None);

    let encoded: Value = serde_json::to_value(shadow).unwrap();
    assert_eq!(encoded["magicStoneId"], json!(0));
}

#[test]
fn roundtrip_is_structurally_equal() {
    let doc = sample();
    let bytes = encode_save(&doc).unwrap();
    assert_eq!(decode_save(&bytes).unwrap(), doc);
}

#[test]
fn encoding_keeps_misspelled_wire_names() {
    let bytes = encode_save(&sample()).unwrap();
    let outer: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(outer.get("timeStamp").is_some());

    let ud: Value = serde_json::from_str(outer["userData"].as_str().unwrap()).unwrap();
    for name in [
        "owendGil",
        "importantOwendItemList",
        "owendCrystalFlags",
        "ownedKeyWaordList",
        "ownedMagicStoneList",
    ] {
        assert!(ud.get(name).is_some(), "missing wire field {name}");
    }
    assert!(ud.get("ownedGil").is_none());

    let list: Value = serde_json::from_str(ud["ownedCharacterList"].as_str().unwrap()).unwrap();
    let terra: Value = serde_json::from_str(list["target"][0].as_str().unwrap()).unwrap();
    for name in ["numberOfButtles", "learningAbilitys", "equipmentAbilitys", "magicStoneId"] {
        assert!(terra.get(name).is_some(), "missing wire field {name}");
    }

    let param: Value = serde_json::from_str(terra["parameter"].as_str().unwrap()).unwrap();
    assert!(param.get("addionalWeight").is_some());
    assert!(param.get("addtionalPower").is_some());
    assert!(param.get("currentHP").is_some());
}

#[test]
fn unknown_top_level_field_is_rejected() {
    let mut doc = sample_value();
    doc["saveVersion"] = json!(2);
    let err = decode_value(&doc).unwrap_err();
    assert!(matches!(err, SaveError::SchemaViolation(_)));
    assert!(err.to_string().contains("saveVersion"));
}

#[test]
fn unknown_field_in_nested_document_is_rejected() {
    let mut doc = sample_value();
    edit_text(&mut doc["dataStorage"], |ds| ds["weather"] = json!([]));
    let err = decode_value(&doc).unwrap_err();
    assert!(matches!(err, SaveError::SchemaViolation(_)));
}

#[test]
fn unknown_ability_id_is_rejected() {
    let mut doc = sample_value();
    edit_first_character(&mut doc, |ch| {
        edit_text(&mut ch["abilityList"], |list| {
            edit_text(&mut list["target"][0], |ability| {
                ability["abilityId"] = json!(99999);
            });
        });
    });

    let err = decode_value(&doc).unwrap_err();
    assert!(matches!(err, SaveError::SchemaViolation(_)));
    assert!(err.to_string().contains("99999"));
}

#[test]
fn unknown_esper_in_slot_is_rejected() {
    let mut doc = sample_value();
    edit_first_character(&mut doc, |ch| ch["magicStoneId"] = json!(61));
    assert!(decode_value(&doc).is_err());
}

#[test]
fn key_value_length_mismatch_is_rejected() {
    let mut doc = sample_value();
    edit_first_character(&mut doc, |ch| {
        edit_text(&mut ch["equipmentList"], |kv| {
            kv["keys"].as_array_mut().unwrap().push(json!(9));
        });
    });

    let err = decode_value(&doc).unwrap_err();
    assert!(err.to_string().contains("keys but"));
}

#[test]
fn bad_timestamp_is_rejected() {
    let mut doc = sample_value();
    doc["timeStamp"] = json!("2023-03-14 21:26:53");
    let err = decode_value(&doc).unwrap_err();
    assert!(
        matches!(&err, SaveError::TimestampFormat { value, .. } if value == "2023-03-14 21:26:53"),
        "unexpected error: {err:?}"
    );
    assert!(err.to_string().contains("MM/DD/YYYY"));
}

#[test]
fn non_string_timestamp_is_schema_violation() {
    let mut doc = sample_value();
    doc["timeStamp"] = json!(1678829213);
    let err = decode_value(&doc).unwrap_err();
    assert!(matches!(err, SaveError::SchemaViolation(_)));
}

#[test]
fn picture_payload_decodes_on_demand() {
    let doc = sample();
    assert!(doc.picture_bytes().unwrap().starts_with(b"\x89PNG"));
}

#[test]
fn edits_survive_roundtrip() {
    let mut doc = sample();
    doc.user_data.add_esper(EsperId::Kirin);
    doc.user_data.owned_gil = 9_999_999;
    if let Some(shadow) = doc.user_data.character_mut(CharacterId::Shadow) {
        shadow.esper = Some(EsperId::Shiva);
    }

    let back = decode_save(&encode_save(&doc).unwrap()).unwrap();
    assert_eq!(
        *back.user_data.owned_espers,
        vec![EsperId::Ramuh, EsperId::Kirin, EsperId::Ifrit, EsperId::Maduin]
    );
    assert_eq!(back.user_data.owned_gil, 9_999_999);
    assert_eq!(
        back.user_data.character(CharacterId::Shadow).unwrap().esper,
        Some(EsperId::Shiva)
    );
}
