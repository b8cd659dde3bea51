use anyhow::{Context, Result};
use bch_address::{Address, AddressFormat, AddressKind, Network};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum AddressCommand {
    /// Convert an address between legacy and cashaddr format
    Convert {
        /// The address to convert (either format)
        address: String,
        /// Target format (cashaddr, legacy)
        #[arg(short, long)]
        to: Option<String>,
        /// Report legacy testnet version bytes as regtest
        #[arg(long)]
        regtest: bool,
    },
    /// Show the kind, network, hash and output script of an address
    Decode {
        /// The address to decode
        address: String,
        /// Report legacy testnet version bytes as regtest
        #[arg(long)]
        regtest: bool,
    },
    /// Encode a hash160 (hex) as an address
    Encode {
        /// 20-byte hash as hex
        hash: String,
        /// Address kind (p2pkh, p2sh)
        #[arg(short, long, default_value = "p2pkh")]
        kind: String,
        /// Network (mainnet, testnet, regtest)
        #[arg(short, long, default_value = "mainnet")]
        network: String,
        /// Output format (cashaddr, legacy)
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Check whether an address parses; exits non-zero if it doesn't
    Validate {
        /// The address to check
        address: String,
    },
}

pub fn handle_command(command: AddressCommand) -> Result<()> {
    match command {
        AddressCommand::Convert {
            address,
            to,
            regtest,
        } => {
            println!("{}", convert(&address, to.as_deref(), regtest)?);
            Ok(())
        }
        AddressCommand::Decode { address, regtest } => {
            let address = Address::from_string(&address, regtest)
                .with_context(|| format!("Failed to decode address {}", address))?;
            print!("{}", describe(&address));
            Ok(())
        }
        AddressCommand::Encode {
            hash,
            kind,
            network,
            format,
        } => {
            println!("{}", encode(&hash, &kind, &network, format.as_deref())?);
            Ok(())
        }
        AddressCommand::Validate { address } => {
            let address = Address::from_string(&address, false)
                .with_context(|| format!("Invalid address {}", address))?;
            println!("valid {} {}", address.network(), address.kind());
            Ok(())
        }
    }
}

fn parse_format(format: Option<&str>) -> Result<AddressFormat> {
    AddressFormat::from_optional_str(format).map_err(anyhow::Error::msg)
}

fn parse_network(network: &str) -> Result<Network> {
    match Network::from_name(network) {
        Some(network) => Ok(network),
        None => anyhow::bail!("Unknown network: {}", network),
    }
}

fn parse_kind(kind: &str) -> Result<AddressKind> {
    match AddressKind::from_name(kind) {
        Some(kind) => Ok(kind),
        None => anyhow::bail!("Unknown address kind: {}. Valid kinds are: 'p2pkh', 'p2sh'", kind),
    }
}

fn convert(address: &str, to: Option<&str>, regtest: bool) -> Result<String> {
    let format = parse_format(to)?;
    let decoded = Address::from_string(address, regtest)
        .with_context(|| format!("Failed to decode address {}", address))?;
    Ok(decoded.to_format(format))
}

fn encode(hash: &str, kind: &str, network: &str, format: Option<&str>) -> Result<String> {
    let hash = hex::decode(hash).context("Invalid hex string for hash")?;
    let kind = parse_kind(kind)?;
    let network = parse_network(network)?;
    let format = parse_format(format)?;
    let address = Address::from_hash160(kind, network, &hash)?;
    Ok(address.to_format(format))
}

fn describe(address: &Address) -> String {
    format!(
        "kind: {}\nnetwork: {}\nhash: {}\nlegacy: {}\ncashaddr: {}\nscript: {}\n",
        address.kind(),
        address.network(),
        hex::encode(address.payload()),
        address.legacy_address(),
        address.cash_address(),
        hex::encode(address.script_pubkey().as_bytes())
    )
}
