//! Reset the record store to the reference planet dataset.
//!
//! Run once per deployment, never alongside a running seed.

use std::process::ExitCode;
use tracing::{error, info};

use solar_system_api::{database, init_tracing, seed, settings::Settings};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(count) => {
            info!("Seeding finished: {} planets stored", count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Seeding error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<usize> {
    let settings = Settings::load()?;
    let store = database::connect(&settings)?;

    let count = seed::seed(store.as_ref()).await?;
    Ok(count)
}
