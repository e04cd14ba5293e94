//! Sensitivity sweep over one assumption
//!
//! Writes one CSV row per candidate value: value, buy total, rent total, difference.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use buy_vs_rent::report::write_sweep_csv;
use buy_vs_rent::{inclusive_range, sweep, AssumptionField, Assumptions};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "run_sweep")]
#[command(about = "Re-run the buy vs rent comparison across a range of one assumption")]
struct Args {
    /// Assumption to vary, e.g. mortgage_rate_pct
    #[arg(short, long)]
    field: AssumptionField,

    /// Explicit candidate values, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, conflicts_with_all = ["start", "end"])]
    values: Vec<f64>,

    /// Start of the closed range
    #[arg(long, allow_negative_numbers = true)]
    start: Option<f64>,

    /// End of the closed range
    #[arg(long, allow_negative_numbers = true)]
    end: Option<f64>,

    /// Spacing between candidates
    #[arg(long, default_value_t = 1.0)]
    step: f64,

    /// JSON file with the base assumptions
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSV output path; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn candidates(args: &Args) -> Result<Vec<f64>> {
    if !args.values.is_empty() {
        return Ok(args.values.clone());
    }
    match (args.start, args.end) {
        (Some(start), Some(end)) => Ok(inclusive_range(start, end, args.step)?),
        _ => bail!("give either --values or both --start and --end"),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let base = match &args.config {
        Some(path) => Assumptions::from_json_file(path)?,
        None => Assumptions::default(),
    };
    let values = candidates(&args)?;

    let start = Instant::now();
    let result = sweep(&base, args.field, &values)?;
    log::info!("{} runs complete in {:?}", result.points.len(), start.elapsed());

    match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            write_sweep_csv(file, &result.points)?;
        }
        None => write_sweep_csv(io::stdout().lock(), &result.points)?,
    }

    if let Some((lo, hi)) = result.break_even_bracket() {
        eprintln!(
            "verdict flips between {} = {} and {}",
            result.field, lo.value, hi.value
        );
    }

    Ok(())
}
