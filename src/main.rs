//! chatdiag — CLI trigger surface for the debug command handler.
//!
//! An external harness delivers a raw action identifier; `send` resolves
//! it against the registered set and runs the handler against the real
//! adapters.  Unregistered identifiers are ignored (exit 0), matching the
//! receiver contract: a debug trigger never crashes or errors the host.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;

use chatdiag::adapters::fs_listing::DirectoryLister;
use chatdiag::adapters::json_store::JsonStoreAdapter;
use chatdiag::adapters::log_sink::LogDiagnosticSink;
use chatdiag::adapters::session::StoredSession;
use chatdiag::config::DiagConfig;
use chatdiag::dispatch::{CommandDispatcher, registered_actions};
use chatdiag::error::Error;

/// chatdiag — developer diagnostics for the chat client
#[derive(Parser, Debug)]
#[command(name = "chatdiag")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding the client's named store files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Root of the filesystem dump
    #[arg(long)]
    scan_root: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Deliver one debug action identifier to the handler
    Send {
        /// Raw action identifier (see `actions`)
        action: String,
    },

    /// List the action identifiers the handler registers interest in
    Actions,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .parse_filters(&cli.log_level)
        .init();

    let mut config = DiagConfig::default();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(root) = cli.scan_root {
        config.scan_root = root;
    }
    config.validate().context("invalid configuration")?;

    match cli.command {
        Commands::Actions => {
            for action in registered_actions() {
                println!("{action}");
            }
        }
        Commands::Send { action } => {
            let mut stores = JsonStoreAdapter::open(&config.data_dir)
                .map_err(Error::from)
                .context("opening store directory")?;
            let session = StoredSession::open(&config.data_dir)
                .map_err(Error::from)
                .context("opening login store")?;
            let mut fs = DirectoryLister::new(&config.scan_root, config.max_list_depth);
            let mut sink = LogDiagnosticSink::new();

            let dispatcher = CommandDispatcher::new();
            if !dispatcher.dispatch(&action, &mut stores, &session, &mut fs, &mut sink) {
                debug!("action {action} is not registered; nothing to do");
            }
        }
    }

    Ok(())
}
