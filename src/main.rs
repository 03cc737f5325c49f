use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fitbuddy::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "fitbuddy")]
#[command(about = "Fitness gamification - level up a little avatar by logging workouts")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to <config dir>/fitbuddy/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the desktop app (default)
    Gui,

    /// Render an avatar as SVG
    Avatar(cli::avatar::AvatarArgs),

    /// Ask the coach for a pep talk and a workout suggestion
    Motivate(cli::motivate::MotivateArgs),

    /// Write a default config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config_path = cli.config.unwrap_or_else(Config::default_path);

    match cli.command {
        Some(Commands::Avatar(args)) => {
            cli::avatar::avatar_command(&args)?;
        }
        Some(Commands::Motivate(args)) => {
            let config = Config::load_or_default(&config_path);
            cli::motivate::motivate_command(&config, &args).await?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(&config_path, force)?;
        }
        Some(Commands::Gui) | None => {
            let config = Config::load_or_default(&config_path);
            fitbuddy::gui::run_gui(config)?;
        }
    }

    Ok(())
}
