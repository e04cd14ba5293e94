//! Run a single buy vs rent comparison
//!
//! Prints the per-column sums and the verdict; optionally writes the monthly
//! ledgers as CSV or dumps the whole comparison as JSON.

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use buy_vs_rent::report::{
    summary_table, write_buy_ledger_csv, write_investment_ledger_csv, write_rent_ledger_csv,
};
use buy_vs_rent::{compare, AssumptionField, Assumptions};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "run_comparison")]
#[command(about = "Compare buying and renting a property month by month")]
struct Args {
    /// JSON file with assumptions; missing fields use the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override one assumption, e.g. `--set mortgage_rate_pct=4.5` (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    overrides: Vec<String>,

    /// Directory for buy.csv, rent.csv and the investment ledgers
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print the full comparison as JSON instead of the summary
    #[arg(long)]
    json: bool,
}

fn parse_override(raw: &str) -> Result<(AssumptionField, f64)> {
    let (name, value) = raw
        .split_once('=')
        .with_context(|| format!("override `{raw}` is not FIELD=VALUE"))?;
    let field: AssumptionField = name.parse()?;
    let value: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("override `{raw}` has a non-numeric value"))?;
    Ok((field, value))
}

fn load_assumptions(args: &Args) -> Result<Assumptions> {
    let mut assumptions = match &args.config {
        Some(path) => Assumptions::from_json_file(path)?,
        None => Assumptions::default(),
    };
    for raw in &args.overrides {
        let (field, value) = parse_override(raw)?;
        assumptions = assumptions.with_field(field, value)?;
    }
    Ok(assumptions)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let assumptions = load_assumptions(&args)?;
    let comparison = compare(&assumptions)?;

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

        let path = dir.join("buy.csv");
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        write_buy_ledger_csv(file, &comparison.buy)?;

        let path = dir.join("rent.csv");
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        write_rent_ledger_csv(file, &comparison.rent)?;

        let path = dir.join("buy_investment.csv");
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        write_investment_ledger_csv(file, comparison.buy_investment.rows())?;

        let path = dir.join("rent_investment.csv");
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        write_investment_ledger_csv(file, comparison.rent_investment.rows())?;

        log::info!("ledgers written to {}", dir.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    print!("{}", summary_table(&comparison));
    println!();
    println!("{}", comparison.analysis());

    Ok(())
}
