use crate::keccak::state::StateArray;

/// Rho: rotate each lane along z. Lane (0,0) keeps offset 0; the remaining
/// 24 lanes take the cumulative offset (t+1)(t+2)/2 in the fixed traversal
/// order (x,y) -> (y, (2x+3y) mod 5) starting from (1,0).
pub fn rho(state: &StateArray) -> StateArray {
    let w = state.width();
    let mut out = state.clone();

    let (mut x, mut y) = (1, 0);
    for t in 0..24usize {
        let offset = ((t + 1) * (t + 2) / 2) % w;
        for z in 0..w {
            // z - offset, wrapped into [0, w)
            out.set(x, y, z, state.get(x, y, (z + w - offset) % w));
        }
        (x, y) = (y, (2 * x + 3 * y) % 5);
    }

    out
}
