use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::data::error::LoadError;
use crate::data::model::{SeriesBundle, SeriesName};
use crate::pipeline::Pipeline;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// Everything a front end needs between frames, independent of rendering.
pub struct ViewerState {
    pub pipeline: Pipeline,

    /// Last successfully loaded bundle (None until a file loads).
    pub bundle: Option<SeriesBundle>,

    /// File the current bundle was read from.
    pub current_path: Option<PathBuf>,

    /// Per-series visibility, seeded from settings.
    pub visibility: BTreeMap<SeriesName, bool>,

    /// Status / error message shown to the user.
    pub status_message: Option<String>,
}

impl ViewerState {
    pub fn new(pipeline: Pipeline) -> Self {
        let settings = pipeline.config().settings();
        let visibility = SeriesName::ALL
            .into_iter()
            .map(|name| (name, settings.is_visible(name)))
            .collect();
        Self {
            pipeline,
            bundle: None,
            current_path: None,
            visibility,
            status_message: None,
        }
    }

    /// Load `path` and, only if that succeeds, replace the held bundle.
    ///
    /// On failure the previous bundle and path stay as they were and the
    /// error text is kept in `status_message`.
    pub fn open(&mut self, path: &Path) -> Result<(), LoadError> {
        match self.pipeline.load(path) {
            Ok(bundle) => {
                log::info!("Loaded {} samples from {}", bundle.len(), path.display());
                self.bundle = Some(bundle);
                self.current_path = Some(path.to_path_buf());
                self.status_message = None;
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Re-read the current file. Returns `Ok(false)` when nothing is loaded.
    pub fn reload(&mut self) -> Result<bool, LoadError> {
        let Some(path) = self.current_path.clone() else {
            return Ok(false);
        };
        self.open(&path)?;
        Ok(true)
    }

    pub fn is_visible(&self, name: SeriesName) -> bool {
        self.visibility.get(&name).copied().unwrap_or(false)
    }

    pub fn set_visible(&mut self, name: SeriesName, visible: bool) {
        self.visibility.insert(name, visible);
    }

    pub fn toggle_visible(&mut self, name: SeriesName) {
        let visible = self.is_visible(name);
        self.set_visible(name, !visible);
    }

    /// Visible series in display order.
    pub fn visible_series(&self) -> Vec<SeriesName> {
        SeriesName::ALL
            .into_iter()
            .filter(|name| self.is_visible(*name))
            .collect()
    }

    /// Height of each visible plot so that together they fill the space the
    /// full set of plots would take. `None` when no plot is visible, in which
    /// case the layout should be left alone.
    pub fn plot_height(&self) -> Option<f64> {
        let visible = self.visible_series().len();
        if visible == 0 {
            return None;
        }
        let base = f64::from(self.pipeline.config().settings().plot_height);
        Some(base * SeriesName::ALL.len() as f64 / visible as f64)
    }
}
