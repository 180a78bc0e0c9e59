//! Message signing.

use clap::{ArgGroup, Args};
use colored::Colorize;
use solkey::Wallet;
use solkey_svm::{DerivationStyle, KeyPair};

/// Sign a message with a key derived from a mnemonic.
#[derive(Args)]
#[command(group(ArgGroup::new("payload").required(true).args(["message", "hex"])))]
pub struct SignCommand {
    /// BIP39 mnemonic phrase.
    #[arg(short, long, env = "SOLKEY_MNEMONIC", hide_env_values = true)]
    mnemonic: String,

    /// BIP39 passphrase used when the wallet was created.
    #[arg(short, long, env = "SOLKEY_PASSPHRASE", hide_env_values = true)]
    passphrase: Option<String>,

    /// Derivation path of the signing key. Defaults to the first standard account.
    #[arg(long)]
    path: Option<String>,

    /// UTF-8 message to sign.
    #[arg(long)]
    message: Option<String>,

    /// Hex-encoded bytes to sign.
    #[arg(long)]
    hex: Option<String>,
}

impl SignCommand {
    fn payload(&self) -> Result<Vec<u8>, hex::FromHexError> {
        match (&self.message, &self.hex) {
            (Some(message), _) => Ok(message.as_bytes().to_vec()),
            (None, Some(encoded)) => hex::decode(encoded.strip_prefix("0x").unwrap_or(encoded)),
            (None, None) => Ok(Vec::new()),
        }
    }

    /// Execute the command.
    #[rustfmt::skip]
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let payload = self.payload()?;
        let path = self.path.clone().unwrap_or_else(|| DerivationStyle::Standard.path(0));
        tracing::debug!(%path, len = payload.len(), "signing payload");

        let wallet = Wallet::from_mnemonic(self.mnemonic.trim(), self.passphrase.as_deref())?;
        let keypair = KeyPair::from_wallet(&wallet, &path)?;
        let signature = keypair.sign_digest(&payload)?;
        debug_assert!(keypair.public_key().verify(&payload, &signature));

        println!();
        println!("      {}         {}", "Path".cyan().bold(), path);
        println!("      {}      {}", "Address".cyan().bold(), keypair.address().green());
        println!("      {}    {}", "Signature".cyan().bold(), bs58::encode(signature).into_string());
        println!("      {}          {}", "Hex".cyan().bold(), hex::encode(signature).dimmed());
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::{Cli, Commands};
    use clap::Parser;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_payload_required() {
        assert!(Cli::try_parse_from(["solkey", "sign", "-m", TEST_MNEMONIC]).is_err());
    }

    #[test]
    fn test_message_and_hex_conflict() {
        let result = Cli::try_parse_from([
            "solkey", "sign", "-m", TEST_MNEMONIC, "--message", "hi", "--hex", "6869",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_hex_payload() {
        let cli = Cli::try_parse_from(["solkey", "sign", "-m", TEST_MNEMONIC, "--hex", "0x68656c6c6f"])
            .unwrap();
        let Commands::Sign(cmd) = cli.command else {
            panic!("expected sign");
        };
        assert_eq!(cmd.payload().unwrap(), b"hello");
        assert!(cmd.execute().is_ok());
    }

    #[test]
    fn test_bad_hex_payload() {
        let cli = Cli::try_parse_from(["solkey", "sign", "-m", TEST_MNEMONIC, "--hex", "zz"]).unwrap();
        let Commands::Sign(cmd) = cli.command else {
            panic!("expected sign");
        };
        assert!(cmd.execute().is_err());
    }
}
