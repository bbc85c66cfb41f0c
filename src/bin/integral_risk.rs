//! Command-line entry point for integral-risk assessments.
//!
//! Usage:
//!   integral-risk assess --row "personal data breach|1000|0.3" --row "hardware failure|200|0.1"
//!   integral-risk sweep --row "data leak|300|0.3" --steps 11
//!   integral-risk generate-config --output integral-risk.toml
//!
//! Rows are `situation|loss|probability`; unreadable numbers count as 0.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use integral_risk::config::{AppConfig, DEFAULT_CONFIG_PATH, LogFormat};
use integral_risk::core::{RiskStatistics, RowEntry, to_json_pretty};
use integral_risk::report::{RiskAssessment, format_amount, format_probability};
use integral_risk::risk::weight_sweep;
use integral_risk::worksheet::RiskWorksheet;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser)]
#[command(name = "integral-risk")]
#[command(version, about = "Integral risk assessment with a data-protection scenario")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Log level directive (overrides config, overridden by RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format (overrides config)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess baseline and mitigated risk for a list of situations
    Assess {
        /// Situation as `situation|loss|probability`; repeat for more rows
        #[arg(short, long = "row", required = true)]
        rows: Vec<RowEntry>,

        /// Weight of the expected loss in the integral risk (config default otherwise)
        #[arg(short, long)]
        weight: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Integral risk of both scenarios across weights in [0, 1]
    Sweep {
        /// Situation as `situation|loss|probability`; repeat for more rows
        #[arg(short, long = "row", required = true)]
        rows: Vec<RowEntry>,

        /// Number of evenly spaced weights, both ends included
        #[arg(short, long, default_value_t = 11)]
        steps: usize,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Write a configuration file with every default spelled out
    GenerateConfig {
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Commands::GenerateConfig { output } = &cli.command {
        return generate_sample_config(output);
    }

    let config = AppConfig::load(&cli.config)?;
    setup_logging(&config, &cli);

    match cli.command {
        Commands::Assess {
            rows,
            weight,
            format,
        } => {
            let sheet = build_worksheet(rows, weight.unwrap_or(config.weight), &config);
            let report = sheet.assessment();
            info!(
                rows = report.rows.len(),
                weight = report.weight,
                baseline = report.baseline.integral_risk,
                mitigated = report.mitigated.integral_risk,
                "assessment computed"
            );
            match format {
                OutputFormat::Text => print_assessment(&report),
                OutputFormat::Json => println!("{}", to_json_pretty(&report)?),
            }
        }
        Commands::Sweep {
            rows,
            steps,
            format,
        } => {
            let report = build_worksheet(rows, config.weight, &config).assessment();
            let points = weight_sweep(&report.baseline, &report.mitigated, steps);
            match format {
                OutputFormat::Text => {
                    println!("{:>8}  {:>14}  {:>14}", "weight", "baseline", "mitigated");
                    for p in &points {
                        println!(
                            "{:>8.2}  {:>14}  {:>14}",
                            p.weight,
                            format_amount(p.baseline_integral_risk),
                            format_amount(p.mitigated_integral_risk)
                        );
                    }
                }
                OutputFormat::Json => println!("{}", to_json_pretty(&points)?),
            }
        }
        Commands::GenerateConfig { .. } => {}
    }

    Ok(())
}

fn build_worksheet(rows: Vec<RowEntry>, weight: f64, config: &AppConfig) -> RiskWorksheet {
    RiskWorksheet::from_entries(rows, weight, config.policy.clone())
}

fn setup_logging(config: &AppConfig, cli: &Cli) {
    let level = cli.log_level.as_deref().unwrap_or(config.logging.level.as_str());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let format = cli.log_format.unwrap_or(config.logging.format);

    let registry = tracing_subscriber::registry().with(filter);
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    match format {
        LogFormat::Pretty => registry.with(layer.pretty()).init(),
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}

fn generate_sample_config(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let content = AppConfig::default().to_toml()?;
    let with_comments = format!(
        "# Integral risk calculator configuration\n\
         # See: integral-risk --help\n\n{content}"
    );
    std::fs::write(path, with_comments)?;
    println!("Sample config written to: {}", path.display());
    Ok(())
}

fn print_assessment(report: &RiskAssessment) {
    println!("Possible situations (weight {})", report.weight);
    print_rows(
        report
            .rows
            .iter()
            .map(|r| (r.situation.as_str(), r.loss, r.probability)),
    );
    print_statistics(&report.baseline);

    println!();
    println!("Updated risk assessment with data protection system");
    print_rows(
        report
            .projections
            .iter()
            .map(|p| (p.situation.as_str(), p.adjusted_loss, p.adjusted_probability)),
    );
    print_statistics(&report.mitigated);

    println!();
    println!("{}", report.summary());
}

fn print_rows<'a>(rows: impl Iterator<Item = (&'a str, f64, f64)>) {
    println!("  {:<40} {:>14} {:>12}", "situation", "loss", "probability");
    for (situation, loss, probability) in rows {
        println!(
            "  {:<40} {:>14} {:>12}",
            situation,
            format_amount(loss),
            format_probability(probability)
        );
    }
}

fn print_statistics(stats: &RiskStatistics) {
    println!("  average loss   {:>14}", format_amount(stats.average_loss));
    println!("  variance       {:>14}", format_amount(stats.variance));
    println!("  rms loss       {:>14}", format_amount(stats.rms_loss));
    println!("  integral risk  {:>14}", format_amount(stats.integral_risk));
}
