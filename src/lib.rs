pub mod color;
pub mod config;
pub mod data;
pub mod pipeline;
pub mod state;

pub use config::ConfigStore;
pub use data::error::{LoadError, LoadErrorKind};
pub use data::model::{SeriesBundle, SeriesName};
pub use pipeline::{run_pipeline, Pipeline};
pub use state::ViewerState;
