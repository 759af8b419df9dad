mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "circlebound", about = "Color blob detection with enclosing-circle annotation")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the detection node over a SER video or an image directory
    Run(commands::run::RunArgs),
    /// Detect the target blob in a single image
    Detect(commands::detect::DetectArgs),
    /// Show SER file metadata
    Info(commands::info::InfoArgs),
    /// Print or save the default node config as TOML
    Config(commands::config::ConfigArgs),
}

fn init_logging(verbose: bool, default_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Run(args) => {
            let config = commands::run::load_config(args)?;
            init_logging(cli.verbose, &config.log_level);
            commands::run::run(args, &config)
        }
        Commands::Detect(args) => {
            init_logging(cli.verbose, "warn");
            commands::detect::run(args)
        }
        Commands::Info(args) => {
            init_logging(cli.verbose, "warn");
            commands::info::run(args)
        }
        Commands::Config(args) => {
            init_logging(cli.verbose, "warn");
            commands::config::run(args)
        }
    }
}
