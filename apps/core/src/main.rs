// Smart Responder entry point
// No argument: answer one message from the terminal. `serve`: run the HTTP API.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use smart_responder::{server, Responder, Settings};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

mod cli;

use cli::{Cli, Commands};

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))
}

fn run_interactive(responder: &Responder) -> anyhow::Result<()> {
    print!("{}", "Enter sender's message: ".green());
    io::stdout().flush()?;

    let mut message = String::new();
    io::stdin().lock().read_line(&mut message)?;
    let message = message.trim_end_matches(['\r', '\n']);

    let outcome = responder
        .respond(message)
        .context("Failed to generate a response")?;

    println!("\n{}", "--- Automated Reply ---".cyan());
    println!("{}", outcome.response.decorated);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenv::dotenv().ok();
    init_tracing()?;

    let settings = Settings::from_env()?;
    if let Err(e) = settings.paths.init() {
        error!("Failed to initialize data directory: {}", e);
    }

    let responder = Responder::from_settings(&settings);

    match cli.command {
        Some(Commands::Serve) => {
            let addr = settings.bind_addr()?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(addr, Arc::new(responder)))?;
        }
        None => {
            info!("History file: {:?}", settings.history_file);
            run_interactive(&responder)?;
        }
    }

    Ok(())
}
