//! Avatar export command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use fitbuddy::avatar::{self, DEFAULT_SIZE};
use fitbuddy::{Accessory, AvatarConfig, Expression};

#[derive(Debug, Args)]
pub struct AvatarArgs {
    /// Body color as hex
    #[arg(long, default_value = "#10b981")]
    pub color: String,

    /// none, headband, dumbbells or cape
    #[arg(long, default_value = "none", value_parser = parse_accessory)]
    pub accessory: Accessory,

    /// happy, determined or exhausted
    #[arg(long, default_value = "happy", value_parser = parse_expression)]
    pub expression: Expression,

    /// Level (controls growth, capped at 50)
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    pub level: i32,

    /// Output edge length in pixels
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    pub size: f32,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn parse_accessory(s: &str) -> Result<Accessory, String> {
    Accessory::from_str(s).ok_or_else(|| format!("unknown accessory '{}'", s))
}

fn parse_expression(s: &str) -> Result<Expression, String> {
    Expression::from_str(s).ok_or_else(|| format!("unknown expression '{}'", s))
}

pub fn avatar_command(args: &AvatarArgs) -> Result<()> {
    let config = AvatarConfig::new(args.color.clone(), args.accessory, args.expression);
    let svg = avatar::render(&config, args.size, args.level).to_svg();

    match &args.output {
        Some(path) => {
            std::fs::write(path, svg).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote avatar to {}", path.display());
        }
        None => println!("{}", svg),
    }

    Ok(())
}
