mod errors;
mod intake;
mod session;
mod triage_queue;
mod types;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Hospital intake desk: queue patients by urgency, then serve them in order.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scripted roster instead of terminal intake.
    Demo,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Some(Command::Demo) => {
            session::run_demo()?;
        }
        None => {
            session::run_interactive()?;
        }
    }
    Ok(())
}
