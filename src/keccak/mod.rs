//! The Keccak-p permutation family: the round function composed from the
//! five step mappings, driven over bit strings of width b = 25w.

pub mod rc;
pub mod state;
pub mod steps;

use crate::bits::Bit;
use crate::errors::Result;
use state::StateArray;
use steps::{chi, iota, pi, rho, theta};

/// One Keccak round: iota(chi(pi(rho(theta(state)))), i).
pub fn rnd(state: &StateArray, round_index: i64) -> StateArray {
    iota(&chi(&pi(&rho(&theta(state)))), round_index)
}

/// Applies `rounds` rounds with indices 12 + 2l - rounds ..= 12 + 2l - 1,
/// where l = log2(w).
fn permute(mut state: StateArray, rounds: usize) -> StateArray {
    let l = state.width().trailing_zeros() as i64;

    let first = 12 + 2 * l - rounds as i64;
    let last = 12 + 2 * l - 1;
    for i in first..=last {
        state = rnd(&state, i);
    }
    state
}

/// Keccak-p[b, rounds]: decodes the bit string into a state array, runs the
/// rounds and re-encodes. Fails on an invalid state width.
pub fn keccak_p(bits: &[Bit], rounds: usize) -> Result<Vec<Bit>> {
    let state = StateArray::from_bits(bits)?;
    Ok(permute(state, rounds).to_bits())
}

/// Keccak-f[b] = Keccak-p[b, 12 + 2l], the maximal-round permutation used
/// by every SHA3 and SHAKE instance.
pub fn keccak_f(bits: &[Bit]) -> Result<Vec<Bit>> {
    let state = StateArray::from_bits(bits)?;
    let rounds = 12 + 2 * state.width().trailing_zeros() as usize;
    Ok(permute(state, rounds).to_bits())
}

/// The b = 1600 instance backing the sponge. The state width is an internal
/// invariant here, not caller input.
pub(crate) fn keccak_f1600(bits: &[Bit]) -> Vec<Bit> {
    assert_eq!(bits.len(), 1600, "sponge state must be 1600 bits");
    keccak_f(bits).expect("1600 bits is a valid Keccak width")
}
