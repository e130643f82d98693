//! tmdsgen CLI - Generate balanced 8b/10b codeword tables for pasting into source.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tmdsgen::models::OutputFormat;
use tmdsgen::{decode, Codeword, Config, Encoder, RoundTripReport, Table, TableRenderer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "tmdsgen")]
#[command(version)]
#[command(about = "Generate DC-balanced TMDS-style codeword tables for limited-range video")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file (defaults are used when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the codeword table to stdout
    Generate {
        /// Number of sample points
        #[arg(short, long)]
        points: Option<usize>,

        /// Lowest input value
        #[arg(long)]
        min: Option<u8>,

        /// Highest input value
        #[arg(long)]
        max: Option<u8>,

        /// Disable the neighbor balance search
        #[arg(long)]
        no_balance: bool,

        /// Balance search radius
        #[arg(short, long)]
        radius: Option<u8>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<Format>,
    },

    /// Encode and decode every value in the range and report the deviation
    Check {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Largest accepted distance between a value and its decoded codeword
        #[arg(short, long)]
        tolerance: Option<u8>,
    },

    /// Decode binary literals back to their values
    Decode {
        /// Literals such as 0b0111110000
        #[arg(required = true)]
        literals: Vec<String>,
    },

    /// Validate configuration file
    Validate,

    /// Show example configuration
    Example,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Format {
    Literals,
    Rust,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Literals => OutputFormat::Literals,
            Format::Rust => OutputFormat::Rust,
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

fn print_example_config() {
    let example = r#"# tmdsgen configuration file

[table]
# Input range, inclusive ("limited range" video levels)
min = 16
max = 235
# Evenly spaced sample points
points = 32

[balance]
# Substitute a neighbor's codeword when it is closer to target_ones set bits
enabled = true
target_ones = 5
# Decoded values may differ from the source by up to this much
radius = 2

[check]
# `tmdsgen check` fails for values decoding further away than this
tolerance = 1

[output]
# "literals" or "rust"
format = "literals"
name = "TMDS_LIMITED"
"#;
    println!("{example}");
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config = Config::load(path.map(PathBuf::as_path))
        .with_context(|| format!("Failed to load config from {path:?}"))?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Example => {
            print_example_config();
        }

        Commands::Validate => {
            let config = load_config(cli.config.as_ref())?;
            println!("Configuration is valid");
            println!("  Range:    {}..={}", config.table.min, config.table.max);
            println!("  Points:   {}", config.table.points);
            if config.balance.enabled {
                println!(
                    "  Balance:  {} ones, radius {}",
                    config.balance.target_ones, config.balance.radius
                );
            } else {
                println!("  Balance:  disabled");
            }
            println!("  Check:    ±{}", config.check.tolerance);
        }

        Commands::Generate {
            points,
            min,
            max,
            no_balance,
            radius,
            format,
        } => {
            let mut config = load_config(cli.config.as_ref())?;

            // Override from CLI
            if let Some(points) = points {
                config.table.points = points;
            }
            if let Some(min) = min {
                config.table.min = min;
            }
            if let Some(max) = max {
                config.table.max = max;
            }
            if no_balance {
                config.balance.enabled = false;
            }
            if let Some(radius) = radius {
                config.balance.radius = radius;
            }
            if let Some(format) = format {
                config.output.format = format.into();
            }
            config.validate().context("Invalid options")?;

            let encoder = Encoder::from_config(&config.balance);
            let table = Table::generate(&config.table, &encoder)?;

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            TableRenderer::new(config.output.format, config.output.name.clone())
                .write_to(&table, &mut out)?;
        }

        Commands::Check { json, tolerance } => {
            let mut config = load_config(cli.config.as_ref())?;
            if let Some(tolerance) = tolerance {
                config.check.tolerance = tolerance;
            }

            let encoder = Encoder::from_config(&config.balance);
            let report = RoundTripReport::run(
                &encoder,
                config.table.min,
                config.table.max,
                config.check.tolerance,
            )?;

            if json {
                println!("{}", report.to_json()?);
            } else {
                print!("{report}");
            }
            report.into_result()?;
            info!("Round trip check passed");
        }

        Commands::Decode { literals } => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let mut failures = 0usize;

            for literal in &literals {
                let decoded = literal
                    .parse::<Codeword>()
                    .and_then(|codeword| decode(codeword).map(|value| (codeword, value)));

                match decoded {
                    Ok((codeword, value)) => writeln!(
                        out,
                        "{codeword}  {value:>3} ({} ones)",
                        codeword.count_ones()
                    )?,
                    Err(e) => {
                        failures += 1;
                        eprintln!("{literal}: {e}");
                    }
                }
            }

            if failures > 0 {
                bail!("{failures} literal(s) could not be decoded");
            }
        }
    }

    Ok(())
}
