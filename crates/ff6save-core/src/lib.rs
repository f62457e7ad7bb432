pub mod config;
pub mod error;

pub use error::{SaveError, SaveResult};
