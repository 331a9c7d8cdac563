use clap::Parser;
use log::error;

use tilereform::commands::{run_command, SubCommand};


/// monopoly board data reformer
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
  #[clap(subcommand)]
  command: SubCommand,
}



fn main() {
  env_logger::init();
  let args = Args::parse();
  if let Err(err) = run_command(args.command) {
    error!("{}", err);
    std::process::exit(1);
  }
}
