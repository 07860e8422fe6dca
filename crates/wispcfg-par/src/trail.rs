//! The state trail.
//!
//! An ordered record of the distinct states that lead to the current
//! one, e.g. `INITIAL, MODE, MODE_BINDING`. Error recovery walks it
//! from the innermost state outwards to find the nearest token table
//! containing an `<error>` descriptor.

use static_assertions::const_assert;

use crate::grammar::{StateId, INITIAL};

/// Maximum nesting depth. Deeper nesting means the grammar tables are
/// broken.
pub const TRAIL_CAPACITY: usize = 10;

// The start state permanently occupies slot 0.
const_assert!(TRAIL_CAPACITY >= 1);

/// Bounded stack of distinct visited states.
///
/// Entering a state that is already on the trail truncates everything
/// above it instead of growing the trail, so the trail always lists a
/// prefix of the active nesting and never contains duplicates.
#[derive(Debug)]
pub struct StateTrail {
    states: [StateId; TRAIL_CAPACITY],
    len: usize,
}

impl StateTrail {
    /// Creates a trail containing only the start state.
    pub fn new() -> Self {
        Self {
            states: [INITIAL; TRAIL_CAPACITY],
            len: 1,
        }
    }

    /// Records a transition into `state`.
    ///
    /// Returns false when the trail is full, which the driver turns
    /// into a fatal error.
    #[must_use]
    pub fn record(&mut self, state: StateId) -> bool {
        for i in 0..self.len {
            if self.states[i] == state {
                self.len = i + 1;
                return true;
            }
        }
        if self.len == TRAIL_CAPACITY {
            return false;
        }
        self.states[self.len] = state;
        self.len += 1;
        true
    }

    /// The recorded states, outermost first.
    pub fn states(&self) -> &[StateId] {
        &self.states[..self.len]
    }
}

impl Default for StateTrail {
    fn default() -> Self {
        Self::new()
    }
}
