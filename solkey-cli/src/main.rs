//! solkey - Solana key derivation from the command line.
//!
//! Derive wallets from BIP39 mnemonics, compute associated token accounts
//! and sign messages.

mod commands;

use clap::Parser;
use commands::{Cli, Commands};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info,solkey=debug,solkey_svm=debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::New(cmd) => cmd.execute()?,
        Commands::Import(cmd) => cmd.execute()?,
        Commands::Seed(cmd) => cmd.execute()?,
        Commands::Validate(cmd) => cmd.execute()?,
        Commands::Ata(cmd) => cmd.execute()?,
        Commands::Sign(cmd) => cmd.execute()?,
    }
    Ok(())
}
