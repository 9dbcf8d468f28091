//! Headless Sparring Runner
//!
//! Pits two fighters against each other and reports the result as JSON or
//! text. With `--bouts N` a series of seeded bouts runs in parallel.

use clap::Parser;
use serde::Serialize;

use kumite::combat::{ActionCatalog, MoveSet};
use kumite::core::error::Result;
use kumite::sparring::{
    build_fighter, host_config, run_bout, run_series, BoutReport, SeriesSummary, SparringRules,
    BLUE_SEED_OFFSET,
};

/// Headless Sparring Runner - engine vs engine bouts
#[derive(Parser, Debug)]
#[command(name = "sparring_runner")]
#[command(about = "Run sparring bouts between strike planners and report the outcome")]
struct Args {
    /// Red corner: cumulative, windowed, random, or a path to an engine .toml
    #[arg(long, default_value = "cumulative")]
    red: String,

    /// Blue corner: cumulative, windowed, random, or a path to an engine .toml
    #[arg(long, default_value = "windowed")]
    blue: String,

    /// Price list and energy budget charged by the host: cumulative,
    /// windowed, or a path to an engine .toml
    #[arg(long, default_value = "cumulative")]
    host: String,

    /// Maximum rounds per bout
    #[arg(long, default_value_t = 40)]
    rounds: u32,

    /// Starting life for both fighters
    #[arg(long, default_value_t = 150)]
    life: i32,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Number of bouts (seeds seed..seed+bouts); more than one prints a summary
    #[arg(long, default_value_t = 1)]
    bouts: u64,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Enable debug logging of every planned round
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output for a single bout
#[derive(Serialize)]
struct BoutResult<'a> {
    seed: u64,
    #[serde(flatten)]
    report: &'a BoutReport,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let seed = args.seed.unwrap_or_else(|| rand::random());
    let host = host_config(&args.host)?;
    let costs = ActionCatalog::from_config(&host)?;
    let rules = SparringRules {
        starting_life: args.life,
        max_rounds: args.rounds,
        ..SparringRules::for_host(&host)
    };

    if args.bouts > 1 {
        let end = seed.saturating_add(args.bouts);
        tracing::info!(red = %args.red, blue = %args.blue, seed, end, "running series");

        let reports = run_series(&args.red, &args.blue, &rules, &costs, seed..end)?;
        let summary = SeriesSummary::from_reports(&args.red, &args.blue, &reports);
        print_summary(&summary, &args.format)?;
        return Ok(());
    }

    let mut red = build_fighter(&args.red, seed)?;
    let mut blue = build_fighter(&args.blue, seed.wrapping_add(BLUE_SEED_OFFSET))?;
    let report = run_bout(&rules, &costs, red.as_mut(), blue.as_mut());

    print_bout(&report, seed, &args.format)
}

fn print_bout(report: &BoutReport, seed: u64, format: &str) -> Result<()> {
    match format {
        "text" => {
            println!("Bout Result");
            println!("===========");
            println!("{} (red) vs {} (blue)", report.red, report.blue);
            for record in &report.rounds {
                println!(
                    "Round {:>2}: red [{}] dealt {:>2} | blue [{}] dealt {:>2} | life {:>4} / {:>4}",
                    record.round,
                    describe(&record.red_moves),
                    record.red_damage,
                    describe(&record.blue_moves),
                    record.blue_damage,
                    record.red_life,
                    record.blue_life
                );
            }
            println!();
            println!("Outcome: {:?}", report.outcome);
            println!("Final life: {} / {}", report.red_life, report.blue_life);
            println!("Seed: {}", seed);
        }
        other => {
            if other != "json" {
                eprintln!("Unknown format '{}', defaulting to json", other);
            }
            let result = BoutResult { seed, report };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }
    Ok(())
}

fn print_summary(summary: &SeriesSummary, format: &str) -> Result<()> {
    match format {
        "text" => {
            println!("Series Result");
            println!("=============");
            println!("{} (red) vs {} (blue)", summary.red, summary.blue);
            println!("Bouts: {}", summary.bouts);
            println!(
                "Red wins: {}  Blue wins: {}  Draws: {}",
                summary.red_wins, summary.blue_wins, summary.draws
            );
            println!(
                "Mean final life: {:.1} / {:.1}",
                summary.mean_red_life, summary.mean_blue_life
            );
            println!("Mean rounds: {:.1}", summary.mean_rounds);
        }
        other => {
            if other != "json" {
                eprintln!("Unknown format '{}', defaulting to json", other);
            }
            println!("{}", serde_json::to_string_pretty(summary)?);
        }
    }
    Ok(())
}

fn describe(moves: &MoveSet) -> String {
    let attacks: Vec<&str> = moves.attacks().iter().map(|a| a.name()).collect();
    let defenses: Vec<&str> = moves.defenses().iter().map(|a| a.name()).collect();
    format!("atk: {} def: {}", attacks.join(","), defenses.join(","))
}
