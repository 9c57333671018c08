//! The FIPS 202 instances: fixed-length SHA3 digests and the SHAKE /
//! RawSHAKE extendable-output functions, all over Keccak-f[1600] with
//! pad10*1 and a per-family domain separation suffix.

use crate::bits::{Bit, bits_to_bytes, bytes_to_bits};
use crate::errors::{Error, Result};
use crate::keccak::keccak_f1600;
use crate::sponge::{Sponge, pad101};

const WIDTH: usize = 1600;

// suffix bits are appended in ascending bit order, before padding
const SHA3_SUFFIX: [Bit; 2] = [0, 1];
const SHAKE_SUFFIX: [Bit; 4] = [1, 1, 1, 1];
const RAW_SHAKE_SUFFIX: [Bit; 2] = [1, 1];

/// Keccak[c]: the sponge over Keccak-f[1600] with rate 1600 - capacity.
fn keccak_c(capacity: usize, message: &[Bit], d: usize) -> Vec<Bit> {
    Sponge::new(keccak_f1600, WIDTH, WIDTH - capacity, pad101).hash(message, d)
}

/// Expands the message to bits, appends the domain suffix and hashes.
fn hash_message(message: &[u8], suffix: &[Bit], capacity: usize, d: usize) -> Vec<u8> {
    let mut bits = bytes_to_bits(message);
    bits.extend_from_slice(suffix);
    bits_to_bytes(&keccak_c(capacity, &bits, d))
}

fn digest<const N: usize>(message: &[u8]) -> [u8; N] {
    hash_message(message, &SHA3_SUFFIX, 16 * N, 8 * N)
        .try_into()
        .unwrap()
}

fn xof(message: &[u8], suffix: &[Bit], capacity: usize, output_len: usize) -> Vec<u8> {
    hash_message(message, suffix, capacity, 8 * output_len)
}

/// SHA3 with a caller-supplied output length. Only the four standardized
/// lengths exist; anything else is a parameter error.
pub fn sha3(message: &[u8], output_bits: usize) -> Result<Vec<u8>> {
    match output_bits {
        224 | 256 | 384 | 512 => Ok(hash_message(
            message,
            &SHA3_SUFFIX,
            2 * output_bits,
            output_bits,
        )),
        other => Err(Error::UnsupportedDigestLength(other)),
    }
}

pub fn sha3_224(message: &[u8]) -> [u8; 28] {
    digest(message)
}

pub fn sha3_256(message: &[u8]) -> [u8; 32] {
    digest(message)
}

pub fn sha3_384(message: &[u8]) -> [u8; 48] {
    digest(message)
}

pub fn sha3_512(message: &[u8]) -> [u8; 64] {
    digest(message)
}

/// SHAKE128: arbitrary-length output, 256-bit capacity.
pub fn shake128(message: &[u8], output_len: usize) -> Vec<u8> {
    xof(message, &SHAKE_SUFFIX, 256, output_len)
}

/// SHAKE256: arbitrary-length output, 512-bit capacity.
pub fn shake256(message: &[u8], output_len: usize) -> Vec<u8> {
    xof(message, &SHAKE_SUFFIX, 512, output_len)
}

/// RawSHAKE128: SHAKE128 without the two extra domain suffix bits.
pub fn raw_shake128(message: &[u8], output_len: usize) -> Vec<u8> {
    xof(message, &RAW_SHAKE_SUFFIX, 256, output_len)
}

/// RawSHAKE256: SHAKE256 without the two extra domain suffix bits.
pub fn raw_shake256(message: &[u8], output_len: usize) -> Vec<u8> {
    xof(message, &RAW_SHAKE_SUFFIX, 512, output_len)
}
