//! Regrouping of a bit stream between group widths (8-bit bytes <-> 5-bit groups).

use super::{AddressError, Result};

/// Group widths `convert_bits` accepts.
const WIDTHS: std::ops::RangeInclusive<u32> = 1..=8;

/// Re-slice `data`, a stream of `from_bits`-wide groups (MSB first), into
/// `to_bits`-wide groups.
///
/// With `pad` set, leftover bits are shifted left into one final group
/// (zero-padded on the right). Without it, leftover bits must be fewer than
/// `from_bits` and all zero, otherwise the conversion fails with
/// [`AddressError::InvalidPadding`].
///
/// Both widths must be in `1..=8` ([`AddressError::InvalidBitWidth`]) and
/// every input value must fit in `from_bits` bits
/// ([`AddressError::GroupOutOfRange`]).
///
/// # Example
/// Input `[0xFF, 0x01]` from 8 to 5 bits with padding:
/// - `11111` = 31
/// - `11100` = 28
/// - `00000` = 0
/// - remaining `1` padded to `10000` = 16
pub fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> Result<Vec<u8>> {
    for width in [from_bits, to_bits] {
        if !WIDTHS.contains(&width) {
            return Err(AddressError::InvalidBitWidth(width));
        }
    }
    if let Some(&value) = data.iter().find(|&&v| u32::from(v) >> from_bits != 0) {
        return Err(AddressError::GroupOutOfRange(value));
    }

    let (groups, clean_tail) = regroup(data, from_bits, to_bits, pad);
    if !clean_tail {
        return Err(AddressError::InvalidPadding);
    }
    Ok(groups)
}

/// Bytes to zero-padded 5-bit groups, as used for a cashaddr payload.
pub fn bytes_to_groups(data: &[u8]) -> Vec<u8> {
    regroup(data, 8, 5, true).0
}

/// Core of [`convert_bits`]; widths and values must already be in range.
///
/// Returns the groups and whether the leftover bits form an acceptable tail.
/// With `pad` set the tail is always acceptable.
fn regroup(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> (Vec<u8>, bool) {
    let max_value: u32 = (1 << to_bits) - 1;
    // Only the bits that can still contribute to an output group are kept.
    let max_acc: u32 = (1 << (from_bits + to_bits - 1)) - 1;
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut result = Vec::with_capacity((data.len() * from_bits as usize).div_ceil(to_bits as usize));

    for &value in data {
        acc = ((acc << from_bits) | u32::from(value)) & max_acc;
        bits += from_bits;

        while bits >= to_bits {
            bits -= to_bits;
            result.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            result.push(((acc << (to_bits - bits)) & max_value) as u8);
        }
        return (result, true);
    }

    let clean = bits < from_bits && ((acc << (to_bits - bits)) & max_value) == 0;
    (result, clean)
}
