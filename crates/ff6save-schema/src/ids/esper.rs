code_table! {
    /// Espers (magicite). The wire format calls these "magic stones".
    pub enum EsperId {
        Ramuh = 62,
        Kirin = 63,
        Siren = 64,
        CaitSith = 65,
        Ifrit = 66,
        Shiva = 67,
        Unicorn = 68,
        Maduin = 69,
        Catoblepas = 70,
        Phantom = 71,
        Carbuncle = 72,
        Bismarck = 73,
        Golem = 74,
        ZonaSeeker = 75,
        Seraph = 76,
        Quetzalli = 77,
        Fenrir = 78,
        Valigarmanda = 79,
        Midgarsormr = 80,
        Lakshmi = 81,
        Alexander = 82,
        Phoenix = 83,
        Odin = 84,
        Bahamut = 85,
        Ragnarok = 86,
        Crusader = 87,
        Raiden = 88,
    }
}

/// `magicStoneId` holds either an esper code or `0` for an empty slot.
pub mod esper_slot {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::EsperId;

    /// Wire value of an empty slot
    pub const NONE: i32 = 0;

    pub fn serialize<S: Serializer>(
        slot: &Option<EsperId>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(slot.map_or(NONE, EsperId::code))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<EsperId>, D::Error> {
        let code = i64::deserialize(deserializer)?;
        if code == i64::from(NONE) {
            return Ok(None);
        }
        EsperId::from_code(code).map(Some).ok_or_else(|| {
            D::Error::custom(format!("unknown EsperId code {code} (0 = none)"))
        })
    }
}
