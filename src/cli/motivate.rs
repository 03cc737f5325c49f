//! Motivation command: one pep talk, one suggestion

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use tracing::warn;

use fitbuddy::config::Config;
use fitbuddy::motivation::{GeminiGenerator, MotivationClient};

#[derive(Debug, Args)]
pub struct MotivateArgs {
    /// Name to cheer for (defaults to the profile name)
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, default_value_t = 1)]
    pub level: u32,

    /// Last workout type (defaults to the profile value)
    #[arg(long)]
    pub last: Option<String>,

    /// Summary of past workouts (defaults to the profile value)
    #[arg(long)]
    pub history: Option<String>,
}

pub async fn motivate_command(config: &Config, args: &MotivateArgs) -> Result<()> {
    let api_key = config.api_key();
    if api_key.is_empty() {
        warn!("{} is not set; printing built-in lines", config.motivation.api_key_env);
    }

    let client = MotivationClient::new(
        Arc::new(GeminiGenerator::with_url(&config.motivation.base_url, api_key)),
        config.motivation.model.clone(),
    );

    let name = args.name.clone().unwrap_or_else(|| config.profile.name.clone());
    let last = args
        .last
        .clone()
        .unwrap_or_else(|| config.profile.last_workout_type.clone());
    let history = args
        .history
        .clone()
        .unwrap_or_else(|| config.profile.workout_history.clone());
    let level = args.level;

    let (greeting, suggestion) = tokio::task::spawn_blocking(move || {
        let greeting = client.workout_motivation(&name, level, &last);
        let suggestion = client.suggest_next_workout(&history);
        (greeting, suggestion)
    })
    .await
    .context("Motivation task panicked")?;

    println!("{}", greeting);
    println!("{}", suggestion);

    Ok(())
}
