//! Build the reference sample collections and write their rendering to a file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use containers_model::samples::{decimal_sample, float_sample};
use containers_model::{containers_list, dump_to_file, SampleConfig};

#[derive(Debug, Parser)]
#[command(name = "containers-demo", version, about = "Generate and dump sample containers")]
struct Args {
    /// JSON sample configuration; defaults are used when omitted.
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Where to write the rendered collections.
    #[arg(short, long, default_value = "allData.txt")]
    output: PathBuf,

    /// RNG seed, overriding the configuration file.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("CONTAINERS_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(Args::parse()) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => SampleConfig::load(path)
            .with_context(|| format!("loading sample configuration from {}", path.display()))?,
        None => SampleConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut rng = config.rng();
    let decimals = decimal_sample(&config.decimal, &mut rng).context("building decimal sample")?;
    let floats = float_sample(&config.float, &mut rng).context("building float sample")?;
    info!(
        decimal_containers = decimals.len(),
        float_containers = floats.len(),
        "samples built"
    );

    let collections = containers_list![decimals, floats];
    dump_to_file(&collections, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!("All data saved in {}", args.output.display());
    Ok(())
}
