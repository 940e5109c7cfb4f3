//! CLI module - Command-line interface for Planetary
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Planetary - planet catalogue REST API
#[derive(Parser)]
#[command(name = "planetary")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API (default)
    #[command(alias = "run")]
    Serve,

    /// Create the users and planets tables
    #[command(alias = "db_create")]
    DbCreate,

    /// Drop the users and planets tables
    #[command(alias = "db_drop")]
    DbDrop,

    /// Insert sample planets and a test user
    #[command(alias = "db_seed")]
    DbSeed,

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
