//! Cashaddr checksum and string encoding/decoding.
//!
//! Implements the cashaddr checksum algorithm as defined in:
//! - Format: https://github.com/bitcoincashorg/bitcoincash.org/blob/master/spec/cashaddr.md
//! - Reference implementation: https://github.com/Bitcoin-ABC/bitcoin-abc/blob/master/src/cashaddr.cpp
//!
//! # CashAddr vs Bech32
//!
//! Both use the same 32-character alphabet, so the `Fe32` type of the bech32
//! crate handles character conversion. Everything else differs:
//!
//! | Feature | Bech32/Bech32m | CashAddr |
//! |---------|----------------|----------|
//! | **Separator** | `1` | `:` (optional) |
//! | **Checksum Length** | 6 characters (30 bits) | 8 characters (40 bits) |
//! | **Prefix Expansion** | `[b>>5...] + [0] + [b&31...]` | `[b&31...] + [0]` |
//! | **Version Encoding** | First char = witness version | First byte = type + size |
//! | **Padding Validation** | Lenient | Strict (must be zero) |
//!
//! The bech32 crate's checksum and bit-packing helpers therefore can't be
//! reused here.

use super::base32;
use super::convert_bits::{bytes_to_groups, convert_bits};
use super::{version, Address, AddressCodec, AddressError, Result};
use crate::networks::Network;
use bech32::Fe32;

/// Number of 5-bit groups in the checksum.
pub const CHECKSUM_LEN: usize = 8;

const GENERATORS: [u64; 5] = [
    0x98f2bc8e61,
    0x79b76d99e2,
    0xf33e5fb3c4,
    0xae2eabe2a8,
    0x1e4f43e470,
];

/// Expand the cashaddr prefix for checksum calculation.
///
/// Only the lower 5 bits of each character are used, followed by a zero
/// separator:
/// ```text
/// prefix = "bitcoincash"
/// expanded = [2, 9, 20, 3, 15, 9, 14, 3, 1, 19, 8] + [0]
/// ```
pub fn expand_prefix(prefix: &str) -> Vec<u8> {
    let mut result: Vec<u8> = prefix.bytes().map(|b| b & 0x1f).collect();
    result.push(0);
    result
}

/// Compute the cashaddr polymod over a sequence of 5-bit values.
///
/// The state is a 40-bit value starting at 1. For each input the top 5 bits
/// are shifted out, the input is XORed in, and one generator is applied per
/// set bit of the shifted-out value. The result is XORed with 1 so that a
/// valid string (prefix, payload and checksum) yields 0.
pub fn polymod(values: &[u8]) -> u64 {
    let mut c: u64 = 1;
    for &d in values {
        let c0 = (c >> 35) as u8;
        c = ((c & 0x07ffffffff) << 5) ^ u64::from(d);

        for (i, generator) in GENERATORS.iter().enumerate() {
            if (c0 >> i) & 1 != 0 {
                c ^= generator;
            }
        }
    }

    c ^ 1
}

/// Compute the 8-group checksum of `payload` under `prefix`, most significant group first.
pub fn calculate_checksum(prefix: &str, payload: &[Fe32]) -> [Fe32; CHECKSUM_LEN] {
    let mut data = expand_prefix(prefix);
    data.extend(base32::to_u8s(payload));
    data.extend_from_slice(&[0; CHECKSUM_LEN]);

    let checksum = polymod(&data);
    std::array::from_fn(|i| base32::fe((checksum >> (5 * (CHECKSUM_LEN - 1 - i))) as u8))
}

/// True iff `groups` (payload followed by its checksum) is valid under `prefix`.
pub fn verify_checksum(prefix: &str, groups: &[Fe32]) -> bool {
    let mut data = expand_prefix(prefix);
    data.extend(base32::to_u8s(groups));
    polymod(&data) == 0
}

/// Encode `[version] ++ hash` as `prefix:<base32 payload><checksum>`.
pub fn encode_cashaddr(prefix: &str, version: u8, hash: &[u8]) -> String {
    let mut payload = Vec::with_capacity(1 + hash.len());
    payload.push(version);
    payload.extend_from_slice(hash);

    let mut groups = base32::to_fes(&bytes_to_groups(&payload));
    let checksum = calculate_checksum(prefix, &groups);
    groups.extend_from_slice(&checksum);

    format!("{}:{}", prefix, base32::encode(&groups))
}

/// A cashaddr string split into its parts. The checksum has been verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCashAddr {
    /// Lowercase prefix, the mainnet prefix if the input had none
    pub prefix: String,
    pub version: u8,
    /// Payload bytes following the version byte
    pub hash: Vec<u8>,
}

/// Decode a cashaddr string.
///
/// Upper- and lowercase input are accepted, mixed case is not. Without a
/// `prefix:` part the mainnet prefix is assumed. The prefix itself is not
/// checked against the known networks.
pub fn decode_cashaddr(address: &str) -> Result<DecodedCashAddr> {
    let has_lower = address.chars().any(|c| c.is_lowercase());
    let has_upper = address.chars().any(|c| c.is_uppercase());
    if has_lower && has_upper {
        return Err(AddressError::MixedCase);
    }

    let address = address.to_lowercase();

    let (prefix, body) = match address.split_once(':') {
        Some((prefix, body)) => (prefix, body),
        None => (Network::Mainnet.cashaddr_prefix(), address.as_str()),
    };

    let groups = base32::decode(body)?;
    if groups.len() < CHECKSUM_LEN || !verify_checksum(prefix, &groups) {
        return Err(AddressError::ChecksumMismatch);
    }

    let payload_groups = base32::to_u8s(&groups[..groups.len() - CHECKSUM_LEN]);
    let payload = convert_bits(&payload_groups, 5, 8, false)?;

    let (&version, hash) = payload
        .split_first()
        .ok_or(AddressError::WrongPayloadLength(0))?;

    Ok(DecodedCashAddr {
        prefix: prefix.to_string(),
        version,
        hash: hash.to_vec(),
    })
}

/// Cashaddr address codec. The network is carried by the prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct CashAddrCodec;

impl AddressCodec for CashAddrCodec {
    fn encode(&self, address: &Address) -> String {
        encode_cashaddr(
            address.network().cashaddr_prefix(),
            version::cash_version(address.kind()),
            address.payload(),
        )
    }

    fn decode(&self, address: &str) -> Result<Address> {
        let decoded = decode_cashaddr(address)?;
        let network = Network::from_cashaddr_prefix(&decoded.prefix)
            .ok_or_else(|| AddressError::UnknownPrefix(decoded.prefix.clone()))?;
        let kind = version::cash_lookup(decoded.version)?;
        Address::from_hash160(kind, network, &decoded.hash)
    }
}
