use crate::bits::Bit;
use crate::keccak::state::StateArray;

/// Theta: XOR each bit with the parities of two neighboring columns.
/// All wraparound is kept non-negative by adding the modulus first.
pub fn theta(state: &StateArray) -> StateArray {
    let w = state.width();

    // column parities C[x][z]
    let mut c = vec![[0 as Bit; 5]; w];
    for x in 0..5 {
        for z in 0..w {
            for y in 0..5 {
                c[z][x] ^= state.get(x, y, z);
            }
        }
    }

    // D[x][z] = C[x-1][z] ^ C[x+1][z-1]
    let mut d = vec![[0 as Bit; 5]; w];
    for x in 0..5 {
        for z in 0..w {
            d[z][x] = c[z][(x + 4) % 5] ^ c[(z + w - 1) % w][(x + 1) % 5];
        }
    }

    StateArray::from_fn(w, |x, y, z| state.get(x, y, z) ^ d[z][x])
}
