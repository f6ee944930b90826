//! Without-replacement shuffle draws
//!
//! Draws the next shuffle index for a collection, rejecting indices
//! already visited in the current round so every track plays before any
//! repeats.

use rand::Rng;

use crate::history::ShuffleHistory;

/// Redraw cap; past it the draw falls back to a deterministic hop
pub(crate) const MAX_DRAW_ATTEMPTS: u32 = 100;

/// Draw the next shuffle index
///
/// Candidates come uniformly from `0..len`; one already in `history` is
/// redrawn while the collection has more than one track. After
/// `MAX_DRAW_ATTEMPTS` rejections the draw gives up on randomness and
/// returns `(current + 1) % len`, which bounds latency and guarantees
/// progress.
///
/// The caller resets the history before the round exceeds the collection
/// length, so a free slot normally exists.
pub(crate) fn draw_next<R: Rng>(
    rng: &mut R,
    history: &ShuffleHistory,
    len: usize,
    current: usize,
) -> usize {
    debug_assert!(len > 0);

    for _ in 0..MAX_DRAW_ATTEMPTS {
        let candidate = rng.gen_range(0..len);
        if len == 1 || !history.contains(candidate) {
            return candidate;
        }
    }

    (current + 1) % len
}
