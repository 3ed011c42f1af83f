//! PackPlanner CLI

use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use packplanner_cli::{OutputFormat, RunConfig, Runner};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "packplanner")]
#[command(about = "Greedily partitions items into packs bounded by item count and weight")]
#[command(version)]
struct Cli {
    /// Input file with line-delimited batches (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    format: FormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Plain text, one block per pack
    Text,
    /// Pretty-printed JSON, one document per batch
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Logs go to stderr so the report on stdout stays clean.
/// Verbosity follows `RUST_LOG`, defaulting to warnings only.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = RunConfig::new().with_format(cli.format.into());
    if let Some(path) = cli.input {
        config = config.with_input_file(path);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = Runner::new(config).run(&mut out)?;

    tracing::debug!(batches = stats.batches, packs = stats.packs, "done");
    Ok(())
}
