//! Definitions of the Bitcoin Cash networks an address can belong to.
// Prefixes and version bytes follow
// https://github.com/bitcoin-cash-node/bitcoin-cash-node/blob/master/src/chainparams.cpp
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Testnet,
    Regtest,
}

impl Network {
    /// Array containing all network variants
    pub const ALL: &'static [Network] = &[Network::Mainnet, Network::Testnet, Network::Regtest];

    /// Returns the canonical string name of this network
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Testnet => "Testnet",
            Network::Regtest => "Regtest",
        }
    }

    pub fn from_name_exact(name: &str) -> Option<Network> {
        match name {
            "Mainnet" => Some(Network::Mainnet),
            "Testnet" => Some(Network::Testnet),
            "Regtest" => Some(Network::Regtest),
            _ => None,
        }
    }

    /// Lenient lookup accepting the common aliases (case-insensitive).
    pub fn from_name(name: &str) -> Option<Network> {
        match name.to_lowercase().as_str() {
            "mainnet" | "main" | "bitcoincash" | "bch" => Some(Network::Mainnet),
            "testnet" | "test" | "testnet3" | "bchtest" | "tbch" => Some(Network::Testnet),
            "regtest" | "reg" | "bchreg" => Some(Network::Regtest),
            _ => None,
        }
    }

    /// The human-readable CashAddr prefix, without the `:` separator.
    pub fn cashaddr_prefix(self) -> &'static str {
        match self {
            Network::Mainnet => "bitcoincash",
            Network::Testnet => "bchtest",
            Network::Regtest => "bchreg",
        }
    }

    /// Inverse of [`Network::cashaddr_prefix`]. Expects a lowercase prefix.
    pub fn from_cashaddr_prefix(prefix: &str) -> Option<Network> {
        Network::ALL
            .iter()
            .copied()
            .find(|network| network.cashaddr_prefix() == prefix)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::from_name_exact(s).ok_or_else(|| format!("Unknown network: {}", s))
    }
}
