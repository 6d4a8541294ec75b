mod cli;
mod commands;
mod config;
mod driver;
mod env;
mod error;
mod host;
mod output;
mod queue;
mod scan;
mod tui;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
