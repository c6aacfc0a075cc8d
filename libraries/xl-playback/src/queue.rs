//! Play queue
//!
//! Two parallel sequences:
//! - Original queue: the context the session was started from, order preserved
//! - Play order: what `next`/`previous` walk through; equal to the original
//!   unless shuffle is on
//!
//! ```text
//! Original:   A  B  C  D
//! Play order: C  A  D  B     (shuffle on, C playing)
//!             ^
//!             index
//! ```
//!
//! Invariants: the play order is always a permutation of the original, and
//! `index` is `Some` and in bounds exactly when a current track exists.

use crate::shuffle::shuffle_with_first;
use rand::Rng;
use xl_core::Track;

#[derive(Debug, Clone, Default)]
pub struct Queue {
    /// Context as given
    original: Vec<Track>,

    /// Order actually advanced through
    order: Vec<Track>,

    /// Position of the current track in `order`
    index: Option<usize>,
}

impl Queue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue with a new context and make `start` current
    ///
    /// `start` must be a member of `context`. With `shuffle` on, `start` is
    /// pinned first and the remainder shuffled.
    pub fn load<R: Rng + ?Sized>(&mut self, context: Vec<Track>, start: &Track, shuffle: bool, rng: &mut R) {
        self.order = if shuffle {
            shuffle_with_first(&context, start, rng)
        } else {
            context.clone()
        };
        self.original = context;
        self.index = self.order.iter().position(|t| t.id == start.id);
    }

    /// Reshuffle around the current track, which moves to position 0
    ///
    /// No-op without a current track.
    pub fn shuffle_around_current<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let Some(current) = self.current().cloned() else {
            return;
        };
        self.order = shuffle_with_first(&self.original, &current, rng);
        self.index = Some(0);
    }

    /// Restore the original order, keeping the current track current
    pub fn restore_original_order(&mut self) {
        let current_id = self.current().map(|t| t.id.clone());
        self.order = self.original.clone();
        self.index = current_id.and_then(|id| self.order.iter().position(|t| t.id == id));
    }

    /// Currently selected track
    pub fn current(&self) -> Option<&Track> {
        self.index.and_then(|i| self.order.get(i))
    }

    pub fn current_index(&self) -> Option<usize> {
        self.index
    }

    /// Whether the current position is the end of the play order
    pub fn is_last(&self) -> bool {
        match self.index {
            Some(i) => i + 1 >= self.order.len(),
            None => true,
        }
    }

    /// Move to the following track, returning it
    ///
    /// Stays put (returns `None`) at the end of the play order.
    pub fn advance(&mut self) -> Option<&Track> {
        let next = self.index.map_or(0, |i| i + 1);
        if next >= self.order.len() {
            return None;
        }
        self.index = Some(next);
        self.order.get(next)
    }

    /// Jump to the first track of the play order
    pub fn wrap_to_start(&mut self) -> Option<&Track> {
        if self.order.is_empty() {
            return None;
        }
        self.index = Some(0);
        self.order.first()
    }

    /// Move back one track, wrapping from the first to the last
    pub fn step_back(&mut self) -> Option<&Track> {
        let len = self.order.len();
        if len == 0 {
            return None;
        }
        let prev = self.index.map_or(0, |i| (i + len - 1) % len);
        self.index = Some(prev);
        self.order.get(prev)
    }

    /// Tracks in play order
    pub fn play_order(&self) -> &[Track] {
        &self.order
    }

    /// Tracks in original context order
    pub fn original(&self) -> &[Track] {
        &self.original
    }

    /// Total number of tracks in queue
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
