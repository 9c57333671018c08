//! The Keccak state array: 25 lanes of w bits addressed as (x, y, z) with
//! x, y in [0, 5) and z in [0, w).

use crate::bits::Bit;
use crate::errors::{Error, Result};

/// Widths w for which Keccak-p[25w] is defined.
const VALID_LANE_WIDTHS: [usize; 7] = [1, 2, 4, 8, 16, 32, 64];

/// A 5x5 grid of w-bit lanes. All access goes through [`get`]/[`set`] so the
/// backing representation stays swappable.
///
/// [`get`]: StateArray::get
/// [`set`]: StateArray::set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateArray {
    w: usize,
    lanes: [[Vec<Bit>; 5]; 5],
}

impl StateArray {
    /// The all-zero state of lane width w.
    pub fn zero(w: usize) -> Self {
        debug_assert!(VALID_LANE_WIDTHS.contains(&w));
        StateArray {
            w,
            lanes: core::array::from_fn(|_| core::array::from_fn(|_| vec![0; w])),
        }
    }

    /// Builds a state of lane width w by evaluating f at every (x, y, z).
    pub fn from_fn<F>(w: usize, f: F) -> Self
    where
        F: Fn(usize, usize, usize) -> Bit,
    {
        let mut state = StateArray::zero(w);
        for x in 0..5 {
            for y in 0..5 {
                for z in 0..w {
                    state.set(x, y, z, f(x, y, z));
                }
            }
        }
        state
    }

    /// Splits a b-bit string into the 5x5 grid, assigning the bit at
    /// `w*(5y + x) + z` to coordinate (x, y, z). The length must be 25 times
    /// a power-of-two lane width of at most 64.
    pub fn from_bits(bits: &[Bit]) -> Result<Self> {
        if bits.len() % 25 != 0 {
            return Err(Error::InvalidStateWidth(bits.len()));
        }
        let w = bits.len() / 25;
        if !w.is_power_of_two() || w > 64 {
            return Err(Error::InvalidStateWidth(bits.len()));
        }
        Ok(StateArray::from_fn(w, |x, y, z| bits[w * (5 * y + x) + z]))
    }

    /// Concatenates the lanes back into a b-bit string, plane by plane.
    /// Inverse of [`from_bits`](StateArray::from_bits).
    pub fn to_bits(&self) -> Vec<Bit> {
        let mut bits = Vec::with_capacity(25 * self.w);
        for y in 0..5 {
            for x in 0..5 {
                bits.extend_from_slice(&self.lanes[x][y]);
            }
        }
        bits
    }

    /// Lane width w.
    pub fn width(&self) -> usize {
        self.w
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> Bit {
        self.lanes[x][y][z]
    }

    pub fn set(&mut self, x: usize, y: usize, z: usize, value: Bit) {
        debug_assert!(value <= 1);
        self.lanes[x][y][z] = value;
    }
}
