use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use foodorder_observability::{LogConfig, LogFormat};

#[derive(Debug, Parser)]
#[command(name = "foodorder", version, about = "Food order lifecycle over in-memory storage")]
pub struct Cli {
    /// JSON file with customer and restaurant catalog rows.
    #[arg(long, env = "FOODORDER_FIXTURES")]
    pub fixtures: PathBuf,

    /// Default tracing filter; `RUST_LOG` overrides it.
    #[arg(long, env = "FOODORDER_LOG", default_value = "info")]
    pub log: String,

    #[arg(long, env = "FOODORDER_LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            filter: self.log.clone(),
            format: self.log_format,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an order and drive it to the requested stage.
    CreateOrder {
        /// JSON file holding the create-order command.
        #[arg(long)]
        command: PathBuf,

        #[arg(long, value_enum, default_value_t = Stage::Pending)]
        until: Stage,
    },
}

/// How far a created order is taken through its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Stage {
    /// Created only.
    Pending,
    /// Payment completed.
    Paid,
    /// Paid and accepted by the restaurant.
    Approved,
    /// Paid, rejected by the restaurant, payment rolled back.
    Cancelled,
}
