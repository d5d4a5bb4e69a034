use crate::reports;
use chordforge::api;
use chordforge::config::Config;
use chordforge::error::CfResult;
use clap::Args;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ChordsArgs {
    /// Show which comfort features each chord earns.
    #[arg(long, default_value_t = false)]
    pub features: bool,
}

pub fn run(args: &ChordsArgs, config: &Config) -> CfResult<()> {
    let ranked = api::list_free_chords(config)?;
    info!("🎹 {} chords available after fixed assignments", ranked.len());
    reports::print_chord_listing(&ranked, args.features);
    Ok(())
}
