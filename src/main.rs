use clap::Parser;
use hymap::cli::{Cli, Commands};
use hymap::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Check(args) => hymap::cli::check::run(args, &printer)?,
        Commands::Info(args) => hymap::cli::info::run(args, &printer)?,
    }

    Ok(())
}
