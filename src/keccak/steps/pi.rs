use crate::keccak::state::StateArray;

/// Pi: relabel lane positions, leaving z untouched.
pub fn pi(state: &StateArray) -> StateArray {
    StateArray::from_fn(state.width(), |x, y, z| {
        state.get((x + 3 * y) % 5, x, z)
    })
}
