//! `foodorder` command line: wires the in-memory adapters to the order
//! application service and drives orders through their lifecycle.

pub mod config;
pub mod run;

pub use config::{Cli, Command, Stage};
pub use run::{create_order, run};
