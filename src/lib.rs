//! punchclock library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Register { .. } => cli::commands::register::handle(&cli.command, cfg),
        Commands::Login { .. } => cli::commands::login::handle(&cli.command, cfg),
        Commands::Logout => cli::commands::logout::handle(cfg),
        Commands::Whoami => cli::commands::whoami::handle(cfg),
        Commands::In => cli::commands::time_in::handle(cfg),
        Commands::Out => cli::commands::time_out::handle(cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // command-line DB override wins over the config file
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
