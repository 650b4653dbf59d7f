use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use signal_viewer::config::Settings;
use signal_viewer::{ConfigStore, Pipeline, SeriesName, ViewerState};

/// Decode a binary sample file and summarize its value, differential and
/// integral series.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Settings file; anything other than readable JSON falls back to defaults.
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Print the default settings as JSON and exit.
    #[arg(long)]
    dump_config: bool,

    /// Sample file of raw 16-bit signed integers.
    #[arg(required_unless_present = "dump_config")]
    file: Option<PathBuf>,
}

fn default_config_json() -> Result<String> {
    serde_json::to_string_pretty(&Settings::default()).context("serializing default settings")
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.dump_config {
        println!("{}", default_config_json()?);
        return Ok(());
    }
    let file = cli.file.context("no input file given")?;

    let config = ConfigStore::load(&cli.config);
    log::debug!("settings outcome: {:?}", config.outcome());
    let settings = config.settings();
    log::debug!(
        "plot colours: background {}, curve {}, marker {}",
        settings.plot_bg_color.to_hex(),
        settings.plot_curve_color.to_hex(),
        settings.marker_color.to_hex()
    );

    let mut state = ViewerState::new(Pipeline::new(config));
    if let Err(e) = state.open(&file) {
        bail!("{}", e.user_message());
    }

    let Some(bundle) = &state.bundle else {
        bail!("no data loaded from {}", file.display());
    };
    println!("{}", file.display());
    for name in state.visible_series() {
        match bundle.summary(name) {
            Some(summary) => println!("  {:<13}{summary}", name.as_str()),
            None => println!("  {:<13}no samples", name.as_str()),
        }
    }
    let hidden = SeriesName::ALL.len() - state.visible_series().len();
    if hidden > 0 {
        log::info!("{hidden} series hidden by settings");
    }
    Ok(())
}
