//! Bitcoin Cash address encoding and decoding.
//!
//! An [`Address`] is a hash160 together with its kind (P2PKH or P2SH) and
//! network. It has two interchangeable textual forms:
//!
//! - **Base58Check** (legacy): `1...`/`3...` on mainnet, `m...`/`n...`/`2...`
//!   on testnet and regtest
//! - **Cashaddr**: `bitcoincash:q...`, `bchtest:p...`, `bchreg:q...`
//!
//! # Examples
//!
//! ```rust
//! use bch_address::{Address, AddressKind, Network};
//!
//! let address = Address::from_string("155fzsEBHy9Ri2bMQ8uuuR3tv1YzcDywd4", false)?;
//! assert_eq!(address.kind(), AddressKind::P2PKH);
//! assert_eq!(address.network(), Network::Mainnet);
//! assert_eq!(
//!     address.cash_address(),
//!     "bitcoincash:qqkv9wr69ry2p9l53lxp635va4h86wv435995w8p2h"
//! );
//! # Ok::<(), bch_address::AddressError>(())
//! ```

pub mod base32;
pub mod base58check;
pub mod cashaddr;
pub mod convert_bits;
pub mod version;

pub use base58check::Base58CheckCodec;
pub use cashaddr::CashAddrCodec;

use crate::bitcoin::hashes::Hash;
use crate::bitcoin::{PubkeyHash, Script, ScriptBuf, ScriptHash};
use crate::networks::Network;
use std::fmt;
use std::str::FromStr;

/// Length of the hash160 payload carried by every address.
pub const HASH160_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Character outside the base58 or cashaddr alphabet
    InvalidCharacter(char),
    /// Base58Check or cashaddr checksum does not match
    ChecksumMismatch,
    /// Cashaddr string contains both upper- and lowercase characters
    MixedCase,
    /// Version byte has no entry in the active version table
    UnknownVersion(u8),
    /// Cashaddr prefix does not belong to a known network
    UnknownPrefix(String),
    /// Decoded payload is not a hash160
    WrongPayloadLength(usize),
    /// Non-zero bits dropped while regrouping 5-bit groups into bytes
    InvalidPadding,
    /// Bit regrouping asked for a group width outside 1..=8
    InvalidBitWidth(u32),
    /// Input value wider than the group width it was declared with
    GroupOutOfRange(u8),
    /// Output script is neither P2PKH nor P2SH
    UnsupportedScriptType(String),
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid address: ")?;
        match self {
            AddressError::InvalidCharacter(c) => write!(f, "invalid character {:?}", c),
            AddressError::ChecksumMismatch => write!(f, "checksum mismatch"),
            AddressError::MixedCase => {
                write!(f, "cashaddr contains both uppercase and lowercase characters")
            }
            AddressError::UnknownVersion(v) => write!(f, "unknown version byte {:#04x}", v),
            AddressError::UnknownPrefix(p) => write!(f, "unknown cashaddr prefix {:?}", p),
            AddressError::WrongPayloadLength(len) => {
                write!(f, "expected {} byte payload, got {}", HASH160_LEN, len)
            }
            AddressError::InvalidPadding => write!(f, "non-zero padding"),
            AddressError::InvalidBitWidth(width) => {
                write!(f, "unsupported group width {}", width)
            }
            AddressError::GroupOutOfRange(value) => {
                write!(f, "group value {:#04x} exceeds its width", value)
            }
            AddressError::UnsupportedScriptType(msg) => {
                write!(f, "unsupported script type: {}", msg)
            }
        }
    }
}

impl std::error::Error for AddressError {}

pub type Result<T> = std::result::Result<T, AddressError>;

/// What the hash160 in an address commits to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// Pay-to-public-key-hash
    P2PKH,
    /// Pay-to-script-hash
    P2SH,
}

impl AddressKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressKind::P2PKH => "p2pkh",
            AddressKind::P2SH => "p2sh",
        }
    }

    pub fn from_name(name: &str) -> Option<AddressKind> {
        match name.to_lowercase().as_str() {
            "p2pkh" => Some(AddressKind::P2PKH),
            "p2sh" => Some(AddressKind::P2SH),
            _ => None,
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Textual address format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFormat {
    /// Base58Check with a legacy version byte
    Legacy,
    /// `prefix:payload` cashaddr
    CashAddr,
}

impl AddressFormat {
    /// Strings containing a `:` separator are cashaddr, everything else is legacy.
    pub fn detect(address: &str) -> Self {
        if address.contains(':') {
            Self::CashAddr
        } else {
            Self::Legacy
        }
    }

    /// Parse an AddressFormat from an optional string.
    /// Returns CashAddr if None or if the string is empty.
    pub fn from_optional_str(s: Option<&str>) -> std::result::Result<Self, String> {
        match s {
            None | Some("") | Some("cash") | Some("cashaddr") => Ok(Self::CashAddr),
            Some("legacy") | Some("base58") => Ok(Self::Legacy),
            Some(other) => Err(format!(
                "Unknown address format: {}. Valid formats are: 'cashaddr', 'legacy'",
                other
            )),
        }
    }
}

/// Trait for address encoding and decoding
pub trait AddressCodec {
    fn encode(&self, address: &Address) -> String;
    fn decode(&self, address: &str) -> Result<Address>;
}

/// A decoded P2PKH or P2SH address. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    kind: AddressKind,
    network: Network,
    payload: [u8; HASH160_LEN],
}

impl Address {
    pub const fn new(kind: AddressKind, network: Network, payload: [u8; HASH160_LEN]) -> Self {
        Self {
            kind,
            network,
            payload,
        }
    }

    /// Build an address from a hash160 given as a slice.
    pub fn from_hash160(kind: AddressKind, network: Network, hash: &[u8]) -> Result<Self> {
        let payload: [u8; HASH160_LEN] = hash
            .try_into()
            .map_err(|_| AddressError::WrongPayloadLength(hash.len()))?;
        Ok(Self::new(kind, network, payload))
    }

    /// Parse either address format.
    ///
    /// Strings without a `:` are decoded as legacy addresses. Legacy testnet
    /// version bytes are reported as [`Network::Testnet`] unless
    /// `force_regtest` is set. Cashaddr strings take their network from the
    /// prefix and ignore `force_regtest`.
    pub fn from_string(address: &str, force_regtest: bool) -> Result<Self> {
        match AddressFormat::detect(address) {
            AddressFormat::Legacy => Self::from_legacy(address, force_regtest),
            AddressFormat::CashAddr => Self::from_cashaddr(address),
        }
    }

    pub fn from_legacy(address: &str, force_regtest: bool) -> Result<Self> {
        Base58CheckCodec::new(force_regtest).decode(address)
    }

    /// Parse a cashaddr string. The prefix may be omitted for mainnet addresses.
    pub fn from_cashaddr(address: &str) -> Result<Self> {
        CashAddrCodec.decode(address)
    }

    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn payload(&self) -> &[u8; HASH160_LEN] {
        &self.payload
    }

    pub fn legacy_address(&self) -> String {
        Base58CheckCodec::default().encode(self)
    }

    pub fn cash_address(&self) -> String {
        CashAddrCodec.encode(self)
    }

    pub fn to_format(&self, format: AddressFormat) -> String {
        match format {
            AddressFormat::Legacy => self.legacy_address(),
            AddressFormat::CashAddr => self.cash_address(),
        }
    }

    /// The standard output script paying to this address.
    pub fn script_pubkey(&self) -> ScriptBuf {
        match self.kind {
            AddressKind::P2PKH => ScriptBuf::new_p2pkh(&PubkeyHash::from_byte_array(self.payload)),
            AddressKind::P2SH => ScriptBuf::new_p2sh(&ScriptHash::from_byte_array(self.payload)),
        }
    }

    /// Recover the address paid to by a P2PKH or P2SH output script.
    pub fn from_output_script(script: &Script, network: Network) -> Result<Self> {
        if script.is_p2pkh() {
            Self::from_hash160(AddressKind::P2PKH, network, &script.as_bytes()[3..23])
        } else if script.is_p2sh() {
            Self::from_hash160(AddressKind::P2SH, network, &script.as_bytes()[2..22])
        } else {
            Err(AddressError::UnsupportedScriptType(format!(
                "only P2PKH and P2SH scripts have an address, got script of length {}",
                script.len()
            )))
        }
    }
}

/// Formats as cashaddr.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cash_address())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        Address::from_string(s, false)
    }
}

/// Convert an address in either format to cashaddr.
pub fn to_cash_address(address: &str, force_regtest: bool) -> Result<String> {
    Address::from_string(address, force_regtest).map(|a| a.cash_address())
}

/// Convert an address in either format to legacy Base58Check.
pub fn to_legacy_address(address: &str, force_regtest: bool) -> Result<String> {
    Address::from_string(address, force_regtest).map(|a| a.legacy_address())
}

pub fn is_valid(address: &str) -> bool {
    Address::from_string(address, false).is_ok()
}
