//! mailform CLI tool

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::SendCommand;

#[derive(Parser)]
#[command(name = "mailform")]
#[command(version)]
#[command(about = "Send one email to a batch of recipients", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose and submit one email batch
    Send(SendCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    mailform::observability::init()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Send(command) => command.execute().await,
    }
}
