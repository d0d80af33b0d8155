pub mod check;
pub mod info;

use clap::{Parser, Subcommand};

/// hymap - Hyrule map loader
#[derive(Parser, Debug)]
#[command(name = "hymap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load every map file and report problems
    Check(check::CheckArgs),

    /// Print the loaded maps and derived positions
    Info(info::InfoArgs),
}
