// crates/remaplut-cli/src/main.rs

use clap::{ArgAction, Parser, Subcommand};

mod cmd;
mod io;
mod logging;

#[derive(Parser)]
#[command(name = "remaplut")]
#[command(about = "Bit-remapped lookup table generator", long_about = None)]
pub struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a remapped table from a directive file
    Gen(cmd::gen::GenArgs),

    /// Remap literals given on the command line
    Apply(cmd::apply::ApplyArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.cmd {
        Commands::Gen(args) => cmd::gen::run(args),
        Commands::Apply(args) => cmd::apply::run(args),
    }
}
