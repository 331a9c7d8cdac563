use clap::Parser;

pub mod reform;
pub mod show;

use crate::error::ReformError;

#[derive(Parser)]
pub enum SubCommand {
  Reform(reform::ReformCommand),
  Show(show::ShowCommand),
}

pub fn run_command(sub: SubCommand) -> Result<(), ReformError> {
  match sub {
    SubCommand::Reform(cmd) => cmd.execute(),
    SubCommand::Show(cmd) => cmd.execute(),
  }
}
