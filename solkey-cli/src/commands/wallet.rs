//! Wallet commands: new, import and seed.

use clap::{Args, ValueEnum};
use colored::Colorize;
use solkey::Wallet;
use solkey_svm::{DerivationStyle, Deriver, KeyPair};

/// Derivation style as accepted on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CliDerivationStyle {
    /// m/44'/501'/{index}'/0' (Phantom, Solflare, Backpack)
    #[default]
    #[value(alias = "phantom", alias = "solflare")]
    Standard,

    /// m/44'/501'/{index}' (Trust Wallet, Ledger, Keystone)
    #[value(alias = "ledger", alias = "keystone")]
    Trust,

    /// m/44'/501'/{index}'/0'/0'
    LedgerLive,

    /// m/44'/501'/{index}'/0/0 (BIP32 tree)
    Bip44,

    /// m/501'/{index}'/0/0 (deprecated, old Phantom/Sollet)
    #[value(alias = "sollet")]
    Legacy,
}

#[allow(deprecated)]
impl From<CliDerivationStyle> for DerivationStyle {
    fn from(style: CliDerivationStyle) -> Self {
        match style {
            CliDerivationStyle::Standard => Self::Standard,
            CliDerivationStyle::Trust => Self::Trust,
            CliDerivationStyle::LedgerLive => Self::LedgerLive,
            CliDerivationStyle::Bip44 => Self::Bip44,
            CliDerivationStyle::Legacy => Self::Legacy,
        }
    }
}

/// Generate a new mnemonic.
#[derive(Args)]
pub struct NewCommand {
    /// Number of mnemonic words (12, 15, 18, 21 or 24).
    #[arg(short, long, default_value = "12")]
    words: usize,

    /// BIP39 passphrase.
    #[arg(short, long)]
    passphrase: Option<String>,

    /// Number of accounts to derive.
    #[arg(short, long, default_value = "1")]
    count: u32,

    /// Derivation path style.
    #[arg(short, long, default_value = "standard")]
    style: CliDerivationStyle,
}

impl NewCommand {
    /// Execute the command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let wallet = Wallet::generate(self.words, self.passphrase.as_deref())?;
        let style = self.style.into();
        let keypairs = Deriver::new(&wallet).derive_many_with(style, 0, self.count)?;
        print_wallet(&wallet, Some(style), &keypairs);
        Ok(())
    }
}

/// Import an existing mnemonic.
#[derive(Args)]
pub struct ImportCommand {
    /// BIP39 mnemonic phrase.
    #[arg(short, long, env = "SOLKEY_MNEMONIC", hide_env_values = true)]
    mnemonic: String,

    /// BIP39 passphrase used when the wallet was created.
    #[arg(short, long, env = "SOLKEY_PASSPHRASE", hide_env_values = true)]
    passphrase: Option<String>,

    /// Number of accounts to derive.
    #[arg(short, long, default_value = "1")]
    count: u32,

    /// Derivation path style.
    #[arg(short, long, default_value = "standard")]
    style: CliDerivationStyle,

    /// Derive a single key pair along this path instead of a style.
    #[arg(long, conflicts_with_all = ["style", "count"])]
    path: Option<String>,
}

impl ImportCommand {
    /// Execute the command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let wallet = Wallet::from_mnemonic(self.mnemonic.trim(), self.passphrase.as_deref())?;
        let deriver = Deriver::new(&wallet);

        if let Some(path) = self.path {
            let keypair = deriver.derive_path(&path)?;
            print_wallet(&wallet, None, core::slice::from_ref(&keypair));
        } else {
            let style = self.style.into();
            let keypairs = deriver.derive_many_with(style, 0, self.count)?;
            print_wallet(&wallet, Some(style), &keypairs);
        }
        Ok(())
    }
}

/// Build a key pair from raw seed bytes, skipping the mnemonic.
#[derive(Args)]
pub struct SeedCommand {
    /// Seed in hex, at least 32 bytes. Only the first 32 bytes are used.
    #[arg(long = "hex")]
    seed_hex: String,
}

impl SeedCommand {
    /// Execute the command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let seed_hex = self.seed_hex.strip_prefix("0x").unwrap_or(&self.seed_hex);
        let seed = hex::decode(seed_hex)?;
        let keypair = KeyPair::from_seed(&seed)?;
        print_keypair(&keypair);
        Ok(())
    }
}

#[rustfmt::skip]
fn print_wallet(wallet: &Wallet, style: Option<DerivationStyle>, keypairs: &[KeyPair]) {
    println!();
    println!("      {}     {}", "Mnemonic".cyan().bold(), wallet.mnemonic());
    if wallet.has_passphrase() {
        println!("      {}   {}", "Passphrase".cyan().bold(), "(set)".dimmed());
    }
    if let Some(style) = style {
        println!("      {}        {}", "Style".cyan().bold(), style.name().dimmed());
    }
    println!();

    for (i, keypair) in keypairs.iter().enumerate() {
        if keypairs.len() > 1 {
            println!("      {}      {}", "Account".cyan().bold(), format!("[{i}]").dimmed());
        }
        if let Some(path) = keypair.derive_path() {
            println!("      {}         {}", "Path".cyan().bold(), path);
        }
        println!("      {}      {}", "Address".cyan().bold(), keypair.address().green());
        println!("      {}  {}", "Private Key".cyan().bold(), keypair.to_base58().as_str());
        if i + 1 < keypairs.len() {
            println!();
        }
    }
    println!();
}

#[rustfmt::skip]
fn print_keypair(keypair: &KeyPair) {
    println!();
    println!("      {}      {}", "Address".cyan().bold(), keypair.address().green());
    println!("      {}  {}", "Private Key".cyan().bold(), keypair.to_base58().as_str());
    println!("      {}   {}", "Public Key".cyan().bold(), hex::encode(keypair.public_key()).dimmed());
    println!();
}
