use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use study_stress::{dataset, normalize, report, summarize, Intensity};

#[derive(Parser)]
#[command(name = "study-stress")]
#[command(about = "Study hours vs. financial stress survey analytics", long_about = None)]
struct Cli {
    /// Survey CSV to analyse instead of the built-in responses
    #[arg(long, global = true, env = "STUDY_STRESS_CSV")]
    csv: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print overall and per-group figures
    Summary,
    /// Show the stress breakdown for one study group
    Panel {
        #[arg(long, value_enum)]
        bucket: BucketArg,
    },
    /// Generate a markdown report
    Report {
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Export the summary as JSON
    Json {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List every response with its normalized values
    Records,
}

#[derive(Clone, Copy, ValueEnum)]
enum BucketArg {
    Light,
    Moderate,
    Intense,
}

impl From<BucketArg> for Intensity {
    fn from(arg: BucketArg) -> Self {
        match arg {
            BucketArg::Light => Intensity::Low,
            BucketArg::Moderate => Intensity::Medium,
            BucketArg::Intense => Intensity::High,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let records = dataset::load(cli.csv.as_deref()).context("failed to load survey data")?;

    match cli.command {
        Commands::Summary => {
            print!("{}", report::render_summary(&summarize(&records)));
        }
        Commands::Panel { bucket } => {
            let summary = summarize(&records);
            print!("{}", report::render_panel(summary.bucket(bucket.into())));
        }
        Commands::Report { out } => {
            let text = report::build_report(&summarize(&records), chrono::Utc::now());
            std::fs::write(&out, text)
                .with_context(|| format!("failed to write report to {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Json { out } => {
            let json = report::to_json(&summarize(&records)).context("failed to encode summary")?;
            match out {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("failed to write JSON to {}", path.display()))?;
                    println!("Summary written to {}.", path.display());
                }
                None => println!("{json}"),
            }
        }
        Commands::Records => {
            for record in records.iter().map(normalize) {
                println!(
                    "- {} / {}: {} ({:.1}h, {}) stress {}",
                    record.record.college,
                    record.record.major,
                    record.record.study_hours_raw,
                    record.study_hours_midpoint,
                    Intensity::classify(record.study_hours_midpoint).label(),
                    record.stress_category.as_str()
                );
            }
        }
    }

    Ok(())
}
