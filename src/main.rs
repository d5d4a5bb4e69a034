use chordforge::config::Config;
use chordforge::error::CfResult;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    config: Config,

    /// JSON settings file. Flags given on the command line take precedence.
    #[arg(global = true, long)]
    config_file: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank the chords left free by the fixed table.
    Chords(cmd::chords::ChordsArgs),
    /// List every key with its chord.
    Mappings,
    /// Emit the firmware chord table as C.
    Firmware,
    /// Emit the firmware macro handler as C.
    Macros,
    /// Report the most frequent pivots in a word corpus.
    Pivots(cmd::pivots::PivotsArgs),
}

fn resolve_config(cli: &Cli, matches: &clap::ArgMatches) -> CfResult<Config> {
    let Some(path) = &cli.config_file else {
        return Ok(cli.config.clone());
    };

    info!("⚖️  Loading Settings from: {}", path.display());
    let mut config = Config::load_from_file(path)?;
    // Global flags are propagated to the subcommand's matches.
    let source = matches
        .subcommand()
        .map(|(_, sub)| sub)
        .unwrap_or(matches);
    config.merge_from_cli(&cli.config, source);
    Ok(config)
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = resolve_config(&cli, &matches).and_then(|config| match &cli.command {
        Commands::Chords(args) => cmd::chords::run(args, &config),
        Commands::Mappings => cmd::mappings::run(&config),
        Commands::Firmware => cmd::firmware::run(&config),
        Commands::Macros => cmd::macros::run(&config),
        Commands::Pivots(args) => cmd::pivots::run(args, &config),
    });

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
