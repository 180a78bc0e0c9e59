//! Address commands: validate and ata.

use clap::Args;
use colored::Colorize;
use solkey_svm::{Error, PublicKey};

/// Check an address.
#[derive(Args)]
pub struct ValidateCommand {
    /// Base58 address to check.
    address: String,
}

impl ValidateCommand {
    /// Execute the command.
    ///
    /// Fails for text that is not a 32-byte base58 key. An off-curve key is
    /// reported as a program address rather than a wallet address.
    #[rustfmt::skip]
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let key = PublicKey::from_base58(self.address.trim())?;

        println!();
        println!("      {}      {}", "Address".cyan().bold(), key);
        if key.is_on_curve() {
            println!("      {}       {}", "Status".cyan().bold(), "valid wallet address".green());
        } else {
            println!("      {}       {}", "Status".cyan().bold(), "off-curve (program derived address)".yellow());
        }
        println!("      {}   {}", "Public Key".cyan().bold(), hex::encode(key).dimmed());
        println!();

        if key.is_on_curve() { Ok(()) } else { Err(Error::InvalidAddress.into()) }
    }
}

/// Compute an associated token account.
#[derive(Args)]
pub struct AtaCommand {
    /// Owner wallet address.
    #[arg(short, long)]
    owner: String,

    /// Token mint address.
    #[arg(short, long)]
    mint: String,
}

impl AtaCommand {
    /// Execute the command.
    #[rustfmt::skip]
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let owner = PublicKey::from_base58(&self.owner)?;
        let mint = PublicKey::from_base58(&self.mint)?;
        let (ata, bump) = PublicKey::find_program_address(
            &[owner.as_bytes(), PublicKey::TOKEN_PROGRAM_ID.as_bytes(), mint.as_bytes()],
            &PublicKey::ASSOCIATED_TOKEN_PROGRAM_ID,
        )
        .ok_or(Error::InvalidAddress)?;

        println!();
        println!("      {}        {}", "Owner".cyan().bold(), owner);
        println!("      {}         {}", "Mint".cyan().bold(), mint);
        println!("      {}  {}", "Token Account".cyan().bold(), ata.to_string().green());
        println!("      {}         {}", "Bump".cyan().bold(), bump.to_string().dimmed());
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_validate_on_curve() {
        let cli = Cli::try_parse_from(["solkey", "validate", "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk"])
            .unwrap();
        let Commands::Validate(cmd) = cli.command else {
            panic!("expected validate");
        };
        assert!(cmd.execute().is_ok());
    }

    #[test]
    fn test_validate_rejects_off_curve() {
        let cli = Cli::try_parse_from(["solkey", "validate", "8fiyBL3c22a3hbzGtWU47GBcciN9D8zCf1SJyDCRauc9"])
            .unwrap();
        let Commands::Validate(cmd) = cli.command else {
            panic!("expected validate");
        };
        assert!(cmd.execute().is_err());
    }

    #[test]
    fn test_ata_requires_both_keys() {
        assert!(Cli::try_parse_from(["solkey", "ata", "--owner", "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk"]).is_err());

        let cli = Cli::try_parse_from([
            "solkey",
            "ata",
            "--owner",
            "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk",
            "--mint",
            "EPjFWdd5AufqSSqeM2qMJdnFTypt6SuxbmGrRmF4fdu8",
        ])
        .unwrap();
        let Commands::Ata(cmd) = cli.command else {
            panic!("expected ata");
        };
        assert!(cmd.execute().is_ok());
    }
}
