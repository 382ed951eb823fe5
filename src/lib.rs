pub mod commands;
pub mod modules;
pub mod shared;

use anyhow::Context;
use shared::{config::AppConfig, utils::init_logger};

/// Entry point of the terminal front end
pub fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;
    init_logger();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime
        .block_on(commands::run_terminal(config))
        .context("Movie search stopped with an error")
}
