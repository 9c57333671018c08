use crate::keccak::rc::round_constant;
use crate::keccak::state::StateArray;

/// Iota: XOR the round constant into lane (0,0); every other lane passes
/// through unchanged.
pub fn iota(state: &StateArray, round_index: i64) -> StateArray {
    let w = state.width();
    let constant = round_constant(w, round_index);

    let mut out = state.clone();
    for z in 0..w {
        out.set(0, 0, z, state.get(0, 0, z) ^ constant[z]);
    }
    out
}
