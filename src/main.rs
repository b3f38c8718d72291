use anyhow::{Context, Result};
use clap::Parser;
use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use songid_midi::config::NotifyConfig;
use songid_midi::input;
use songid_midi::midi::HexSink;

/// Turn song id events into MIDI notification messages
#[derive(Parser, Debug)]
#[command(name = "songid-midi")]
#[command(about = "Encode song id changes as MIDI messages", long_about = None)]
struct Args {
    /// Configuration file (YAML)
    #[arg(short = 'c', long = "config")]
    config: PathBuf,

    /// Read events from this file instead of stdin
    #[arg(short = 'i', long = "input")]
    input: Option<PathBuf>,
}

/// Log filter from `RUST_LOG`-style directives
/// Defaults to warnings when no directives are given
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn main() -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    // Logs go to stderr, stdout carries only messages
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = NotifyConfig::load(&args.config)?;
    let notifiers = config.build()?;
    info!(
        start = notifiers.start.command().name(),
        stop = notifiers.stop.command().name(),
        mappings = config.idmap.len(),
        "notifiers ready"
    );

    let (event_tx, event_rx) = crossbeam_channel::unbounded();
    let reader = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            input::spawn_reader(BufReader::new(file), event_tx)?
        }
        None => input::spawn_reader(BufReader::new(io::stdin()), event_tx)?,
    };

    let mut sink = HexSink::new(io::stdout().lock());
    notifiers.run(event_rx, &mut sink)?;

    reader
        .join()
        .map_err(|_| anyhow::anyhow!("Input reader thread panicked"))?;

    Ok(())
}
