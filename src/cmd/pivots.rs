use crate::reports;
use chordforge::api;
use chordforge::config::Config;
use chordforge::consts::DEFAULT_CORPUS_PATH;
use chordforge::error::CfResult;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct PivotsArgs {
    /// Word list, one word per line.
    #[arg(short, long, default_value = DEFAULT_CORPUS_PATH)]
    pub corpus: PathBuf,

    /// Distinct example words shown per pivot.
    #[arg(long, default_value_t = 5)]
    pub sample: usize,
}

pub fn run(args: &PivotsArgs, config: &Config) -> CfResult<()> {
    let map = api::build_chord_map(config)?;
    info!(
        "🔎 Scanning {} with merge policy '{}'",
        args.corpus.display(),
        config.pivots.merge_policy
    );
    let report = api::analyze_corpus(&args.corpus, &map, &config.pivots)?;
    reports::print_pivot_report(&report, config.pivots.top, args.sample);
    Ok(())
}
