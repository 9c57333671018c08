//! SHA-3 and SHAKE built from first principles: the Keccak-p permutation
//! over a bit-level 5x5xw state array, the generic sponge construction and
//! the pad10*1 rule, composed into the FIPS 202 hash and XOF instances.

pub mod bits;
pub mod errors;
pub mod keccak;
pub mod sha3;
pub mod sponge;
