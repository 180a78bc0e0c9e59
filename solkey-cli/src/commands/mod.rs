//! CLI command definitions and handlers.

mod address;
mod sign;
mod wallet;

pub use address::{AtaCommand, ValidateCommand};
use clap::{Parser, Subcommand};
pub use sign::SignCommand;
pub use wallet::{ImportCommand, NewCommand, SeedCommand};

/// solkey - Solana key derivation, addresses and signing.
#[derive(Parser)]
#[command(name = "solkey")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new mnemonic and derive accounts from it.
    New(NewCommand),

    /// Derive accounts from an existing mnemonic.
    Import(ImportCommand),

    /// Build a key pair directly from raw seed bytes.
    Seed(SeedCommand),

    /// Check that an address is a valid on-curve public key.
    Validate(ValidateCommand),

    /// Compute the associated token account of an owner for a mint.
    Ata(AtaCommand),

    /// Sign a message with a derived key.
    Sign(SignCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_verbose() {
        let cli = Cli::try_parse_from(["solkey", "validate", "-vv", "11111111111111111111111111111111"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Validate(_)));
    }

    #[test]
    fn test_unknown_subcommand() {
        assert!(Cli::try_parse_from(["solkey", "export"]).is_err());
    }
}
