/// Settings: typed record, name table, and the loading/repair store.

pub mod settings;
pub mod store;

use thiserror::Error;

pub use settings::{SettingKey, SettingKind, SettingValue, Settings};
pub use store::{validate, ConfigStore, FallbackReason, LoadOutcome, ValidationReport};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown setting: {0}")]
    UnknownKey(String),
}
