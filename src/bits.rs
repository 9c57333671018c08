//! Conversion between packed byte strings and the one-byte-per-bit strings
//! the Keccak engine works on.
//!
//! FIPS 202 numbers the bits of a byte low-to-high (the h2b/b2h mappings),
//! so bit i of byte k lands at string index 8k + i. Getting this backwards
//! still round-trips, but fails every published test vector.

use crate::errors::{Error, Result};

/// A single bit, stored as 0 or 1 in its own byte.
pub type Bit = u8;

/// Expands each byte into 8 bits, low bit first.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<Bit> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for byte in bytes {
        for i in 0..8 {
            bits.push((byte >> i) & 1);
        }
    }
    bits
}

/// Packs a bit string back into bytes, low bit first within each byte.
/// A trailing group shorter than 8 bits fills the low bits of the last byte.
pub fn bits_to_bytes(bits: &[Bit]) -> Vec<u8> {
    bits.chunks(8).map(pack_byte).collect()
}

/// Packs a single group of at most 8 bits into one byte.
pub fn bits_to_byte(bits: &[Bit]) -> Result<u8> {
    if bits.len() > 8 {
        return Err(Error::BitGroupTooWide(bits.len()));
    }
    Ok(pack_byte(bits))
}

fn pack_byte(group: &[Bit]) -> u8 {
    debug_assert!(group.len() <= 8);
    group
        .iter()
        .enumerate()
        .fold(0u8, |acc, (i, bit)| acc | ((bit & 1) << i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn test_bytes_to_bits() {
        assert_eq!(
            bytes_to_bits(&[0b0000_1011]),
            [1, 1, 0, 1, 0, 0, 0, 0]
        );
        assert_eq!(
            bytes_to_bits(&[0x01, 0x80]),
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]
        );
        assert_eq!(bytes_to_bits(&[]), []);
    }

    #[test]
    fn test_bits_to_bytes() {
        assert_eq!(bits_to_bytes(&[1, 1, 0, 1, 0, 0, 0, 0]), [0x0b]);
        // 9 bits: the ninth fills the low bit of a second byte
        assert_eq!(bits_to_bytes(&[1, 0, 0, 0, 0, 0, 0, 0, 1]), [0x01, 0x01]);
        assert_eq!(bits_to_bytes(&[]), [0u8; 0]);
    }

    #[test]
    fn test_bits_to_byte() {
        assert_eq!(bits_to_byte(&[1, 0, 1, 0]), Ok(0b0101));
        assert_eq!(bits_to_byte(&[1, 1, 0, 1, 1, 0, 0, 1]), Ok(0b1001_1011));
        assert_eq!(
            bits_to_byte(&[0; 9]),
            Err(Error::BitGroupTooWide(9))
        );
    }

    #[test]
    fn test_round_trip() {
        let mut rng = rand::rng();
        for len in [0usize, 1, 7, 64, 200] {
            let mut bytes = vec![0u8; len];
            rng.fill_bytes(&mut bytes);
            assert_eq!(bits_to_bytes(&bytes_to_bits(&bytes)), bytes);
        }
    }
}
