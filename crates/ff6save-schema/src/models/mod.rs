//! Typed save-document tree, root first:
//!
//! ```text
//! SaveDocument
//! ├── userData      → UserData
//! │   └── ownedCharacterList → [Character]
//! │       └── parameter, abilityList, equipmentList, ...
//! └── dataStorage   → DataStorage
//! ```

mod character;
mod data_storage;
mod parameter;
mod records;
mod save;
mod user_data;

pub use character::Character;
pub use data_storage::DataStorage;
pub use parameter::Parameter;
pub use records::{Ability, AbilitySlot, Item, Job};
pub use save::SaveDocument;
pub use user_data::UserData;
