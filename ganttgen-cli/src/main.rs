//! ganttgen CLI - render static Gantt charts from YAML schedules

mod commands;

use clap::{Parser, Subcommand};
use ganttgen_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{CheckArgs, RenderArgs};

/// Render a static Gantt chart from a declarative YAML task file
#[derive(Parser, Debug)]
#[command(name = "ganttgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the chart image(s) from a task file
    #[command(visible_alias = "r")]
    Render(RenderArgs),

    /// Resolve the schedule and print the rows without rendering
    Check(CheckArgs),

    /// Show current chart configuration
    Config,

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    let config = Config::load()?;

    match cli.command {
        Some(Commands::Render(args)) => {
            args.execute(cli.verbose, &config.chart)?;
        }
        Some(Commands::Check(args)) => {
            args.execute(cli.verbose, &config.chart)?;
        }
        Some(Commands::Config) => {
            println!("ganttgen Configuration");
            println!("======================");
            println!();
            println!("Chart settings:");
            println!("  palette: {}", config.chart.palette.join(", "));
            println!("  hours_per_day: {}", config.chart.hours_per_day);
            println!("  workdays: {}", config.chart.workdays);
            println!("  width: {}", config.chart.width);
            println!("  row_height: {}", config.chart.row_height);
            println!("  today_color: {}", config.chart.today_color);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        Some(Commands::Version) => {
            println!("ganttgen {}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            // bare `ganttgen` renders tasks.yaml with the defaults
            RenderArgs::default().execute(cli.verbose, &config.chart)?;
        }
    }

    Ok(())
}
