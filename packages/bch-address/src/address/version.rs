//! Version bytes of the legacy and CashAddr encodings.
//!
//! Legacy (Base58Check) version bytes come from `base58Prefixes[PUBKEY_ADDRESS]`
//! and `base58Prefixes[SCRIPT_ADDRESS]` in chainparams.cpp. Testnet and
//! regtest share the same bytes, so decoding a legacy address cannot tell
//! them apart on its own.
//!
//! CashAddr version bytes encode the type in bits 3-6 and the hash size in
//! bits 0-2 (0 = 160 bits). They are the same on every network; the prefix
//! carries the network instead.
//! https://github.com/bitcoincashorg/bitcoincash.org/blob/master/spec/cashaddr.md

use super::{AddressError, AddressKind, Result};
use crate::networks::Network;

/// Legacy version bytes for one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyVersions {
    pub pub_key_hash: u8,
    pub script_hash: u8,
}

impl LegacyVersions {
    pub const fn new(pub_key_hash: u8, script_hash: u8) -> Self {
        Self {
            pub_key_hash,
            script_hash,
        }
    }

    pub fn get(&self, kind: AddressKind) -> u8 {
        match kind {
            AddressKind::P2PKH => self.pub_key_hash,
            AddressKind::P2SH => self.script_hash,
        }
    }
}

pub const MAINNET_LEGACY: LegacyVersions = LegacyVersions::new(0x00, 0x05);
pub const TESTNET_LEGACY: LegacyVersions = LegacyVersions::new(0x6f, 0xc4);
pub const REGTEST_LEGACY: LegacyVersions = LegacyVersions::new(0x6f, 0xc4);

pub const CASH_P2PKH: u8 = 0x00;
pub const CASH_P2SH: u8 = 0x08;

pub fn legacy_versions(network: Network) -> LegacyVersions {
    match network {
        Network::Mainnet => MAINNET_LEGACY,
        Network::Testnet => TESTNET_LEGACY,
        Network::Regtest => REGTEST_LEGACY,
    }
}

pub fn legacy_version(kind: AddressKind, network: Network) -> u8 {
    legacy_versions(network).get(kind)
}

/// CashAddr version byte for a 20-byte hash of the given kind.
pub fn cash_version(kind: AddressKind) -> u8 {
    match kind {
        AddressKind::P2PKH => CASH_P2PKH,
        AddressKind::P2SH => CASH_P2SH,
    }
}

/// Resolve a legacy version byte to its kind and network.
///
/// The testnet bytes are reported as testnet unless `force_regtest` is set.
/// Mainnet bytes are unaffected by the flag.
pub fn legacy_lookup(version: u8, force_regtest: bool) -> Result<(AddressKind, Network)> {
    let shared = if force_regtest {
        Network::Regtest
    } else {
        Network::Testnet
    };
    for network in [Network::Mainnet, shared] {
        let versions = legacy_versions(network);
        if version == versions.pub_key_hash {
            return Ok((AddressKind::P2PKH, network));
        }
        if version == versions.script_hash {
            return Ok((AddressKind::P2SH, network));
        }
    }
    Err(AddressError::UnknownVersion(version))
}

pub fn cash_lookup(version: u8) -> Result<AddressKind> {
    match version {
        CASH_P2PKH => Ok(AddressKind::P2PKH),
        CASH_P2SH => Ok(AddressKind::P2SH),
        _ => Err(AddressError::UnknownVersion(version)),
    }
}
