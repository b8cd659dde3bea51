use anyhow::Result;
use clap::{Parser, Subcommand};

mod address;

#[derive(Parser)]
#[command(name = "bch-address-cli")]
#[command(about = "CLI tool for Bitcoin Cash address conversion", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Address conversion, decoding and validation
    Address {
        #[command(subcommand)]
        command: address::AddressCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Address { command } => address::handle_command(command),
    }
}
