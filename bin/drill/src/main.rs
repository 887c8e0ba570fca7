//! Drill Binary
//!
//! Serves, grades, and plays solved spots from JSON files on disk.
//!
//! Commands: deal, play, grade, villain, variants

mod command;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    drill_core::log();
    command::Command::parse().run().await
}
