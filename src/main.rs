//! Card ROI CLI
//!
//! Command-line interface for running ROI projections

use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use card_roi::{
    AutomaticRoiInput, CalculatorConfig, ManualRoiInput, RoiCalculator, RoiRequest, RoiResult,
};
use clap::{Parser, Subcommand};
use log::info;

#[derive(Parser, Debug)]
#[command(name = "card_roi", version, about = "Project card program ROI for in-house vs IaaS operation")]
struct Cli {
    /// Seed for reproducible simulations (overrides CARD_ROI_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// JSON file with simulation parameters
    #[arg(long, global = true)]
    sim_config: Option<PathBuf>,

    /// Write the yearly table to a CSV file
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    /// Print results as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cardholders follow a growth curve
    Auto {
        #[arg(long)]
        years: i64,

        /// Target card count (cap)
        #[arg(long)]
        cards_number: i64,

        #[arg(long)]
        starting_number: i64,

        /// Yearly growth factor (1.0 = flat)
        #[arg(long)]
        growth_rate: f64,

        #[arg(long, default_value = "Virtual")]
        card_type: String,

        /// Enabled feature (repeatable)
        #[arg(long = "feature")]
        features: Vec<String>,
    },

    /// Cardholders given per year
    Manual {
        /// Year and cardholder count as YEAR=COUNT (repeatable)
        #[arg(long = "year-count", value_parser = parse_year_count, required = true)]
        year_counts: Vec<(i64, i64)>,

        #[arg(long, default_value = "Virtual")]
        card_type: String,

        /// Enabled feature (repeatable)
        #[arg(long = "feature")]
        features: Vec<String>,
    },

    /// Read a JSON request (or an array of requests) from a file
    File { path: PathBuf },
}

fn parse_year_count(raw: &str) -> Result<(i64, i64), String> {
    let (year, count) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected YEAR=COUNT, got '{}'", raw))?;
    let year = year.trim().parse().map_err(|e| format!("bad year '{}': {}", year, e))?;
    let count = count.trim().parse().map_err(|e| format!("bad count '{}': {}", count, e))?;
    Ok((year, count))
}

fn load_requests(path: &Path) -> anyhow::Result<Vec<RoiRequest>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Unable to read {}", path.display()))?;

    let requests = if text.trim_start().starts_with('[') {
        serde_json::from_str(&text)
    } else {
        serde_json::from_str(&text).map(|request| vec![request])
    };
    requests.with_context(|| format!("Invalid request JSON in {}", path.display()))
}

fn print_table(result: &RoiResult) {
    println!("{:>4} {:>16} {:>16} {:>16} {:>16} {:>16} {:>10} {:>10}",
        "Year", "Income", "InHouseCost", "IaaSCost", "InHouseNet", "IaaSNet", "InHouseROI", "IaaSROI");
    println!("{}", "-".repeat(112));

    for row in result.rows() {
        println!("{:>4} {:>16.2} {:>16.2} {:>16.2} {:>16.2} {:>16.2} {:>9.1}% {:>9.1}%",
            row.year,
            row.income,
            row.in_house_cost,
            row.iaas_cost,
            row.in_house_net,
            row.iaas_net,
            row.in_house_roi_pct,
            row.iaas_roi_pct,
        );
    }

    let summary = &result.summary;
    let year_or_none = |year: Option<u32>| year.map_or_else(|| "never".to_string(), |y| y.to_string());

    println!("\nSummary ({} years):", summary.projection_years);
    println!("  Total Income:        ${:.2}", summary.total_income);
    println!("  Total Net (in-house): ${:.2}", summary.total_net.in_house);
    println!("  Total Net (IaaS):     ${:.2}", summary.total_net.iaas);
    println!("  Average ROI (in-house): {:.1}%", summary.average_roi.in_house);
    println!("  Average ROI (IaaS):     {:.1}%", summary.average_roi.iaas);
    println!("  Break-even (in-house): {}", year_or_none(summary.break_even_year.in_house));
    println!("  Break-even (IaaS):     {}", year_or_none(summary.break_even_year.iaas));
}

fn write_csv(result: &RoiResult, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
    result.write_csv(file)?;
    println!("\nYearly results written to: {}", path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = CalculatorConfig::from_env().with_seed(cli.seed);
    if let Some(path) = &cli.sim_config {
        let params = CalculatorConfig::load_simulation(path)
            .map_err(|e| anyhow::anyhow!("Unable to load {}: {}", path.display(), e))?;
        config = config.with_simulation(params);
    }
    info!("Simulation: {:?}, seed: {:?}", config.simulation, config.seed);

    let requests = match cli.command {
        Command::Auto { years, cards_number, starting_number, growth_rate, card_type, features } => {
            vec![RoiRequest::Automatic(AutomaticRoiInput {
                years,
                cards_number,
                card_type,
                features,
                starting_number,
                expected_cards_growth_rate: growth_rate,
            })]
        }
        Command::Manual { year_counts, card_type, features } => {
            vec![RoiRequest::Manual(ManualRoiInput {
                explicit_cards_number: year_counts.into_iter().collect::<BTreeMap<_, _>>(),
                card_type,
                features,
            })]
        }
        Command::File { path } => load_requests(&path)?,
    };

    if requests.is_empty() {
        bail!("No requests to run");
    }

    let calculator = RoiCalculator::new(config);
    let results = calculator.run_batch(&requests);

    let mut failures = 0;
    for (i, result) in results.iter().enumerate() {
        if results.len() > 1 {
            println!("\nRequest {}:", i + 1);
        }
        match result {
            Ok(result) => {
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(result)?);
                } else {
                    print_table(result);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                failures += 1;
            }
        }
    }

    // CSV export covers the first successful result
    if let Some(path) = &cli.csv {
        match results.iter().find_map(|r| r.as_ref().ok()) {
            Some(result) => write_csv(result, path)?,
            None => bail!("No successful result to export"),
        }
    }

    if failures > 0 {
        bail!("{} of {} requests failed", failures, results.len());
    }
    Ok(())
}
