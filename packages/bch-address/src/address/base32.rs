//! Base32 with the CashAddr charset `qpzry9x8gf2tvdw0s3jn54khce6mua7l`.
//!
//! The charset is shared with Bech32, so the `Fe32` field element from the
//! bech32 crate does the character conversions. Nothing here knows about
//! checksums; see the `cashaddr` module for that.

use super::{AddressError, Result};
use bech32::Fe32;

/// Map each 5-bit group to its charset character.
pub fn encode(groups: &[Fe32]) -> String {
    groups.iter().map(|fe| fe.to_char()).collect()
}

/// Map each character back to its 5-bit value.
///
/// Only the lowercase charset is accepted; callers normalize case first.
pub fn decode(input: &str) -> Result<Vec<Fe32>> {
    input
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                return Err(AddressError::InvalidCharacter(c));
            }
            Fe32::from_char(c).map_err(|_| AddressError::InvalidCharacter(c))
        })
        .collect()
}

/// Field element from the low five bits of `value`.
pub(crate) fn fe(value: u8) -> Fe32 {
    Fe32::try_from(value & 0x1f).expect("masked to 5 bits")
}

/// Convert 5-bit values (as produced by `convert_bits`) to field elements.
pub(crate) fn to_fes(values: &[u8]) -> Vec<Fe32> {
    values.iter().map(|&v| fe(v)).collect()
}

pub(crate) fn to_u8s(fes: &[Fe32]) -> Vec<u8> {
    fes.iter().map(|fe| fe.to_u8()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

    #[test]
    fn test_charset_order() {
        let all: Vec<u8> = (0..32).collect();
        let fes = to_fes(&all);
        assert_eq!(encode(&fes), CHARSET);
        assert_eq!(to_u8s(&decode(CHARSET).unwrap()), all);
    }

    #[test]
    fn test_decode_body() {
        let groups = decode("qr6m7j9n").unwrap();
        assert_eq!(to_u8s(&groups), vec![0, 3, 26, 27, 30, 18, 5, 19]);
        assert_eq!(encode(&groups), "qr6m7j9n");
    }

    #[test]
    fn test_invalid_characters() {
        // 'b', 'i', 'o' and '1' are not part of the charset
        for (input, bad) in [("qqb", 'b'), ("iq", 'i'), ("qo", 'o'), ("q1", '1'), ("q:q", ':')] {
            match decode(input) {
                Err(AddressError::InvalidCharacter(c)) => assert_eq!(c, bad),
                other => panic!("expected invalid character for {}, got {:?}", input, other),
            }
        }
        assert!(matches!(
            decode("qé"),
            Err(AddressError::InvalidCharacter('é'))
        ));
    }

    #[test]
    fn test_uppercase_rejected() {
        assert!(matches!(
            decode("QR6M"),
            Err(AddressError::InvalidCharacter('Q'))
        ));
    }

    #[test]
    fn test_empty() {
        assert!(decode("").unwrap().is_empty());
        assert_eq!(encode(&[]), "");
    }
}
