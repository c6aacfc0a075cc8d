//! Shuffle for play queues
//!
//! Fisher-Yates with an injectable random source so tests can pin the order.

use rand::Rng;
use xl_core::Track;

/// Uniform in-place shuffle (Fisher-Yates)
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffled play order with `first` pinned at position 0
///
/// Only the first occurrence of `first` is pinned; any other copies are
/// shuffled with the rest, so the result is always a permutation of `tracks`.
pub fn shuffle_with_first<R: Rng + ?Sized>(tracks: &[Track], first: &Track, rng: &mut R) -> Vec<Track> {
    let mut rest = tracks.to_vec();
    let pinned = match rest.iter().position(|t| t.id == first.id) {
        Some(pos) => rest.remove(pos),
        None => first.clone(),
    };

    fisher_yates(&mut rest, rng);

    let mut order = Vec::with_capacity(rest.len() + 1);
    order.push(pinned);
    order.extend(rest);
    order
}
