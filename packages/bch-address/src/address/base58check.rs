//! Base58Check encoding/decoding for legacy P2PKH and P2SH addresses.

use super::{version, Address, AddressCodec, AddressError, Result};
use crate::bitcoin::base58;

/// Append the double-SHA-256 checksum to `payload` and base58-encode the result.
pub fn encode_check(payload: &[u8]) -> String {
    base58::encode_check(payload)
}

/// Decode a base58 string and verify its trailing 4-byte checksum.
/// Returns the payload without the checksum.
pub fn decode_check(input: &str) -> Result<Vec<u8>> {
    base58::decode_check(input).map_err(|e| match e {
        base58::Error::Decode(e) => {
            AddressError::InvalidCharacter(invalid_char(input, e.invalid_base58_character()))
        }
        // bad checksum, or fewer than 4 bytes to hold one
        _ => AddressError::ChecksumMismatch,
    })
}

/// The decoder reports the offending byte; recover the character it belongs to.
fn invalid_char(input: &str, byte: u8) -> char {
    if byte.is_ascii() {
        char::from(byte)
    } else {
        input
            .chars()
            .find(|c| !c.is_ascii())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

/// Legacy address codec.
///
/// Testnet and regtest share their version bytes; `force_regtest` picks
/// which of the two a decoded address is reported as.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base58CheckCodec {
    pub force_regtest: bool,
}

impl Base58CheckCodec {
    pub const fn new(force_regtest: bool) -> Self {
        Self { force_regtest }
    }
}

impl AddressCodec for Base58CheckCodec {
    fn encode(&self, address: &Address) -> String {
        let mut payload = Vec::with_capacity(1 + address.payload().len());
        payload.push(version::legacy_version(address.kind(), address.network()));
        payload.extend_from_slice(address.payload());
        encode_check(&payload)
    }

    fn decode(&self, address: &str) -> Result<Address> {
        let payload = decode_check(address)?;
        let (&version, hash) = payload
            .split_first()
            .ok_or(AddressError::WrongPayloadLength(0))?;
        let (kind, network) = version::legacy_lookup(version, self.force_regtest)?;
        Address::from_hash160(kind, network, hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_check_mainnet_p2sh() {
        let mut payload = vec![0x05];
        payload.extend(hex::decode("76a04053bda0a88bda5177b86a15c3b29f559873").unwrap());
        assert_eq!(encode_check(&payload), "3CWFddi6m4ndiGyKqzYvsFYagqDLPVMTzC");
    }

    #[test]
    fn test_leading_zero_bytes() {
        // version byte 0x00 plus an all-zero hash: 21 zero bytes -> 21 '1's
        let payload = [0u8; 21];
        let encoded = encode_check(&payload);
        assert_eq!(encoded, "1111111111111111111114oLvT2");
        assert_eq!(decode_check(&encoded).unwrap(), payload.to_vec());

        assert_eq!(encode_check(&[0, 0, 1]), "11BwW2qR");
        assert_eq!(decode_check("11BwW2qR").unwrap(), vec![0, 0, 1]);
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(encode_check(&[]), "3QJmnh");
        assert!(decode_check("3QJmnh").unwrap().is_empty());
    }

    #[test]
    fn test_decode_check_roundtrip() {
        let decoded = decode_check("155fzsEBHy9Ri2bMQ8uuuR3tv1YzcDywd4").unwrap();
        assert_eq!(decoded[0], 0x00);
        assert_eq!(
            hex::encode(&decoded[1..]),
            "2cc2b87a28c8a097f48fcc1d468ced6e7d39958d"
        );
        assert_eq!(encode_check(&decoded), "155fzsEBHy9Ri2bMQ8uuuR3tv1YzcDywd4");
    }

    #[test]
    fn test_invalid_characters() {
        for (bad, bad_char) in [
            ("0", '0'),
            ("O", 'O'),
            ("I", 'I'),
            ("l", 'l'),
            ("155fzsEBHy9Ri2bMQ8uuuR3tv1YzcDyw0d", '0'),
            ("3CWFé", 'é'),
            ("3CWF d", ' '),
        ] {
            match decode_check(bad) {
                Err(AddressError::InvalidCharacter(c)) => assert_eq!(c, bad_char),
                other => panic!("expected invalid character for {}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_checksum_mismatch() {
        // last character changed
        assert!(matches!(
            decode_check("155fzsEBHy9Ri2bMQ8uuuR3tv1YzcDywd5"),
            Err(AddressError::ChecksumMismatch)
        ));
        // too short to carry a checksum
        assert!(matches!(decode_check(""), Err(AddressError::ChecksumMismatch)));
        assert!(matches!(decode_check("1"), Err(AddressError::ChecksumMismatch)));
        assert!(matches!(
            decode_check("1000000000000000000000000000000000"),
            Err(AddressError::InvalidCharacter('0'))
        ));
    }

    #[test]
    fn test_codec() {
        use super::super::AddressKind;
        use crate::networks::Network;

        let address = Base58CheckCodec::default()
            .decode("2MwikwR6hoVijCmr1u8UgzFMHFP6rpQyRvP")
            .unwrap();
        assert_eq!(address.kind(), AddressKind::P2SH);
        assert_eq!(address.network(), Network::Testnet);
        assert_eq!(
            hex::encode(address.payload()),
            "3115920103a65a0f2b652d1c51d54b40fc198c2d"
        );

        let regtest = Base58CheckCodec::new(true)
            .decode("2MwikwR6hoVijCmr1u8UgzFMHFP6rpQyRvP")
            .unwrap();
        assert_eq!(regtest.network(), Network::Regtest);
        assert_eq!(
            Base58CheckCodec::default().encode(&regtest),
            "2MwikwR6hoVijCmr1u8UgzFMHFP6rpQyRvP"
        );
    }
}
