use std::process::ExitCode;

use anyhow::Context;
use tracing::error;

mod config;
mod db;
mod seed;
mod users;

use crate::config::{AppConfig, BATCH_SIZE, NUM_USERS};
use crate::seed::{seed_users, BatchPlan};
use crate::users::{GeneratorConfig, UserGenerator};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "✗ Fatal error");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "user_seeder=info,mongodb=warn".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .init();
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    let plan = BatchPlan::new(NUM_USERS, BATCH_SIZE)?;

    let database = db::Database::connect(&config)
        .await
        .context("MongoDB connection error")?;

    let store = database.users();
    let mut generator = UserGenerator::new(rand::thread_rng(), GeneratorConfig::default());
    let seeded = seed_users(&store, &mut generator, plan).await;

    // close on both paths; nothing already written is rolled back
    database.close().await;

    seeded.context("seeding error")?;
    Ok(())
}
