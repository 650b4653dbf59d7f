use std::path::Path;

use crate::config::ConfigStore;
use crate::data::error::LoadError;
use crate::data::loader::decode;
use crate::data::model::SeriesBundle;
use crate::data::transform::{difference, integrate};

/// Decode `path` and derive the differential and integral series.
///
/// Every call reads the file again; nothing is cached between calls.
pub fn run_pipeline(path: &Path, max_size_kib: u64) -> Result<SeriesBundle, LoadError> {
    let samples = decode(path, max_size_kib)?;
    let diffs = difference(&samples);
    let ints = integrate(&samples);
    Ok(SeriesBundle::new(samples, diffs, ints))
}

/// The pipeline bound to the settings it reads its size ceiling from.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: ConfigStore,
}

impl Pipeline {
    pub fn new(config: ConfigStore) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    /// Run the pipeline with the configured `MaxFileSize`.
    pub fn load(&self, path: &Path) -> Result<SeriesBundle, LoadError> {
        run_pipeline(path, self.config.max_file_size_kib())
    }
}
