//! Round constants for the iota step, generated by the degree-8 LFSR over
//! GF(2) from FIPS 202 Algorithm 5.

use crate::bits::Bit;

/// Bit t of the LFSR sequence: an 8-bit register seeded 0b1 (R[0] set) is
/// stepped t times; each step prepends a zero to form a 9-bit view, XORs
/// R[8] into positions 0, 4, 5 and 6, then truncates back to 8 bits. The
/// output is R[0].
///
/// The sequence has period 255, so t is reduced mod 255 first; rc(0) == 1
/// corresponds to zero steps. Round indices can go negative for Keccak-p
/// with more rounds than 12 + 2l, hence the signed argument and the
/// euclidean reduction.
pub fn rc(t: i64) -> Bit {
    let steps = t.rem_euclid(255);
    // bit i of r holds R[i]
    let mut r: u16 = 1;
    for _ in 0..steps {
        r <<= 1;
        let r8 = (r >> 8) & 1;
        r ^= r8 | (r8 << 4) | (r8 << 5) | (r8 << 6);
        r &= 0xff;
    }
    (r & 1) as Bit
}

/// The length-w constant XORed into lane (0, 0) by iota in round i: zero
/// everywhere except positions 2^j - 1, which hold rc(j + 7i).
pub fn round_constant(w: usize, round_index: i64) -> Vec<Bit> {
    debug_assert!(w.is_power_of_two() && w <= 64);
    let l = w.trailing_zeros() as i64;
    let mut constant = vec![0; w];
    for j in 0..=l {
        constant[(1usize << j) - 1] = rc(j + 7 * round_index);
    }
    constant
}
