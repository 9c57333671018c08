use crate::keccak::state::StateArray;

/// Chi, the only nonlinear step: XOR each bit with a function of the next
/// two bits in its row.
pub fn chi(state: &StateArray) -> StateArray {
    StateArray::from_fn(state.width(), |x, y, z| {
        state.get(x, y, z)
            ^ ((state.get((x + 1) % 5, y, z) ^ 1) & state.get((x + 2) % 5, y, z))
    })
}
