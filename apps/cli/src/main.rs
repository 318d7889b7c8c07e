#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod console;
pub mod handlers;
pub mod models;

use crate::handlers::{page, tools};
use crate::models::args::{Cli, Command};
use anyhow::{Context, Result};
use clap::Parser;
use fulfill::domain::config::LoggingConfig;
use fulfill::kernel::config::load_fulfillment_config;
use fulfill_logger::Logger;
use std::process::ExitCode;
use tokio::runtime::Builder;

fn init_logging(logging: &LoggingConfig, filter: Option<String>) -> Result<Logger> {
    let filter = filter.unwrap_or_else(|| logging.level.clone());
    let builder = Logger::builder().name(env!("CARGO_BIN_NAME")).console(true).env_filter(filter);

    let logger = match &logging.directory {
        Some(directory) => builder.path(directory).json(logging.json).init(),
        None => builder.init(),
    };
    logger.context("Failed to initialize logging")
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = load_fulfillment_config(cli.config.as_deref())
        .context("Critical: Configuration is malformed")?;
    let _log = init_logging(&config.logging, cli.log)?;

    // One page view at a time: a single-threaded runtime is enough.
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to initialize runtime")?;

    runtime.block_on(async move {
        match cli.command {
            Command::Inspect { url } => page::inspect(config, url).await,
            Command::Submit { url, form } => page::submit(config, url, form).await,
            Command::Register { url } => page::register(config, url).await,
            Command::Health {} => tools::health(&config).await,
            Command::Validate { target } => tools::validate(&target),
            Command::Preview { dns_name } => tools::preview(&config, &dns_name),
        }
    })
}
