mod address;
pub mod networks;
pub mod wasm;

// re-export bitcoin from the miniscript crate so callers can build on the same types
pub use ::miniscript::bitcoin;

pub use address::{
    base32, base58check, cashaddr, convert_bits, is_valid, to_cash_address, to_legacy_address,
    version, Address, AddressCodec, AddressError, AddressFormat, AddressKind, Base58CheckCodec,
    CashAddrCodec, Result,
};

pub use networks::Network;
pub use wasm::AddressNamespace;
