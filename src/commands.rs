use crate::cli::{Cli, Command};

pub fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Batch(args) => batch::run(args),
        Command::Quick(args) => quick::run(args),
    }
}

pub mod batch;
pub mod quick;
