use std::fmt;
use std::path::Path;

use serde_json::{Map, Value as JsonValue};

use super::settings::{SettingKey, SettingValue, Settings};
use super::ConfigError;

/// Extension a settings file must carry to be read at all.
pub const SETTINGS_EXTENSION: &str = "json";

pub type JsonMap = Map<String, JsonValue>;

// ---------------------------------------------------------------------------
// Load outcome
// ---------------------------------------------------------------------------

/// How the active settings came to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Built in code; no file was consulted.
    Builtin,
    /// The file parsed; entries were repaired as listed.
    Parsed(ValidationReport),
    /// The file could not be used; defaults are active.
    Defaulted(FallbackReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    UnrecognizedExtension,
    Io(String),
    Parse(String),
    NotAnObject,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::UnrecognizedExtension => {
                write!(f, "not a .{SETTINGS_EXTENSION} file")
            }
            FallbackReason::Io(e) => write!(f, "cannot read file: {e}"),
            FallbackReason::Parse(e) => write!(f, "malformed JSON: {e}"),
            FallbackReason::NotAnObject => write!(f, "top level is not a JSON object"),
        }
    }
}

/// Keys touched while repairing a parsed record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Missing keys that received their default.
    pub filled: Vec<SettingKey>,
    /// Keys whose value had the wrong kind and were reset to default.
    pub replaced: Vec<SettingKey>,
    /// Unknown keys that were dropped.
    pub removed: Vec<String>,
}

impl ValidationReport {
    /// True when the record was accepted exactly as written.
    pub fn is_clean(&self) -> bool {
        self.filled.is_empty() && self.replaced.is_empty() && self.removed.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Repair a parsed record so it holds exactly the default key set.
///
/// Missing keys get their default, entries of the wrong kind are reset to
/// their default, and unknown keys are dropped. Never fails.
pub fn validate(mut record: JsonMap) -> (JsonMap, ValidationReport) {
    let defaults = Settings::default();
    let mut report = ValidationReport::default();

    for key in SettingKey::ALL {
        let name = key.as_str();
        match record.get(name) {
            None => {
                record.insert(name.to_string(), defaults.get(key).to_json());
                report.filled.push(key);
            }
            Some(value) if !key.kind().matches(value) => {
                log::warn!("illegal value for setting {name}: {value}, using default");
                record.insert(name.to_string(), defaults.get(key).to_json());
                report.replaced.push(key);
            }
            Some(_) => {}
        }
    }

    record.retain(|name, _| {
        let known = name.parse::<SettingKey>().is_ok();
        if !known {
            log::debug!("dropping unknown setting {name}");
            report.removed.push(name.clone());
        }
        known
    });

    (record, report)
}

// ---------------------------------------------------------------------------
// ConfigStore
// ---------------------------------------------------------------------------

/// Active settings plus a record of where they came from.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    settings: Settings,
    outcome: LoadOutcome,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::from_settings(Settings::default())
    }
}

impl ConfigStore {
    pub fn from_settings(settings: Settings) -> Self {
        Self {
            settings,
            outcome: LoadOutcome::Builtin,
        }
    }

    /// Load settings from `path`, falling back to defaults on any problem.
    pub fn load(path: &Path) -> Self {
        match read_record(path) {
            Ok(record) => {
                let (record, report) = validate(record);
                if !report.is_clean() {
                    log::info!(
                        "repaired settings from {}: {} filled, {} replaced, {} removed",
                        path.display(),
                        report.filled.len(),
                        report.replaced.len(),
                        report.removed.len()
                    );
                }
                match serde_json::from_value::<Settings>(JsonValue::Object(record)) {
                    Ok(settings) => Self {
                        settings,
                        outcome: LoadOutcome::Parsed(report),
                    },
                    Err(e) => Self::fallback(path, FallbackReason::Parse(e.to_string())),
                }
            }
            Err(reason) => Self::fallback(path, reason),
        }
    }

    fn fallback(path: &Path, reason: FallbackReason) -> Self {
        log::warn!(
            "using default settings, {} unusable: {reason}",
            path.display()
        );
        Self {
            settings: Settings::default(),
            outcome: LoadOutcome::Defaulted(reason),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn outcome(&self) -> &LoadOutcome {
        &self.outcome
    }

    /// Look up a setting by its persisted name.
    pub fn get(&self, name: &str) -> Result<SettingValue, ConfigError> {
        let key: SettingKey = name.parse()?;
        Ok(self.settings.get(key))
    }

    /// File size ceiling for the decoder, in KiB.
    pub fn max_file_size_kib(&self) -> u64 {
        u64::from(self.settings.max_file_size)
    }
}

fn read_record(path: &Path) -> Result<JsonMap, FallbackReason> {
    let recognized = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == SETTINGS_EXTENSION);
    if !recognized {
        return Err(FallbackReason::UnrecognizedExtension);
    }

    let text = std::fs::read_to_string(path).map_err(|e| FallbackReason::Io(e.to_string()))?;
    let root: JsonValue =
        serde_json::from_str(&text).map_err(|e| FallbackReason::Parse(e.to_string()))?;
    match root {
        JsonValue::Object(map) => Ok(map),
        _ => Err(FallbackReason::NotAnObject),
    }
}
