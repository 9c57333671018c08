use crate::bits::Bit;

/// pad10*1: the shortest bit string of length >= 2 starting and ending in 1
/// that tops the message up to a whole number of rate-sized blocks.
pub fn pad101(rate: usize, message_len: usize) -> Vec<Bit> {
    debug_assert!(rate > 0);

    // j = (-m - 2) mod rate, kept non-negative
    let j = (2 * rate - (message_len % rate) - 2) % rate;

    let mut pad = vec![0; j + 2];
    pad[0] = 1;
    pad[j + 1] = 1;

    debug_assert_eq!((message_len + pad.len()) % rate, 0);
    pad
}
