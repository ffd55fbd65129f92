//! Repeat and debounce coordination.
//!
//! Many remotes send the same code several times for one physical press,
//! and send a dedicated repeat frame while a button is held. [`RepeatState`]
//! decides, for every action about to run, whether it is a fresh press, a
//! legitimate repeat, or a re-fire that must be swallowed.
//!
//! # Rules
//!
//! | Situation | Result |
//! |-----------|--------|
//! | Different action than last time (or none recorded) | [`Invocation::Fresh`] |
//! | Same action, repeatable | [`Invocation::Repeat`] |
//! | Same action, not repeatable, at least `debounce_ms` since last run | [`Invocation::Repeat`] |
//! | Same action, not repeatable, within `debounce_ms` | [`Invocation::Suppressed`] |
//!
//! # Example
//!
//! ```rust
//! use ir_dispatch::repeat::{Invocation, RepeatState, DEFAULT_DEBOUNCE_MS};
//! use ir_dispatch::ActionType;
//!
//! let mut state = RepeatState::new();
//! let toggle = ActionType::PowerToggle;
//!
//! assert_eq!(state.register(toggle, 0, DEFAULT_DEBOUNCE_MS), Invocation::Fresh);
//! // Remote re-sent the frame
//! assert_eq!(state.register(toggle, 100, DEFAULT_DEBOUNCE_MS), Invocation::Suppressed);
//! // User pressed again later
//! assert_eq!(
//!     state.register(toggle, 700, DEFAULT_DEBOUNCE_MS),
//!     Invocation::Repeat { count: 2 }
//! );
//! ```

use crate::actions::ActionType;

/// Window within which a non-repeatable action will not fire twice.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// How an invocation was classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Invocation {
    /// First run of this action in a row.
    Fresh,
    /// Consecutive run of the same action.
    Repeat {
        /// Number of consecutive runs including this one.
        count: u32,
    },
    /// Swallowed re-fire: nothing may run and nothing is notified.
    Suppressed,
}

impl Invocation {
    /// Returns true if the action should run.
    #[inline]
    pub fn should_run(&self) -> bool {
        !matches!(self, Invocation::Suppressed)
    }
}

/// Last dispatched action and how often it ran in a row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepeatState {
    last: Option<ActionType>,
    last_action_ms: u64,
    repeat_count: u32,
}

impl RepeatState {
    /// Creates an empty state with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify an invocation of `action` at `now_ms` and update the record.
    ///
    /// For runs (anything but [`Invocation::Suppressed`]) the timestamp is
    /// taken here, before the action executes. Suppressed invocations leave
    /// the state untouched.
    pub fn register(&mut self, action: ActionType, now_ms: u64, debounce_ms: u64) -> Invocation {
        let invocation = if self.last == Some(action) {
            let elapsed = now_ms.saturating_sub(self.last_action_ms);
            if !action.action().repeatable && elapsed < debounce_ms {
                return Invocation::Suppressed;
            }
            self.repeat_count = self.repeat_count.saturating_add(1);
            Invocation::Repeat {
                count: self.repeat_count,
            }
        } else {
            self.last = Some(action);
            self.repeat_count = 1;
            Invocation::Fresh
        };
        self.last_action_ms = now_ms;
        invocation
    }

    /// Forget the last action.
    ///
    /// After this a repeat frame does nothing until another code resolves.
    pub fn clear(&mut self) {
        self.last = None;
        self.repeat_count = 0;
    }

    /// The action a repeat frame would re-run.
    pub fn last(&self) -> Option<ActionType> {
        self.last
    }

    /// Consecutive runs of the last action.
    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    /// Time the last action ran.
    pub fn last_action_ms(&self) -> u64 {
        self.last_action_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBOUNCE: u64 = DEFAULT_DEBOUNCE_MS;

    // =========================================================================
    // Fresh / Repeat Tests
    // =========================================================================

    #[test]
    fn first_invocation_is_fresh() {
        let mut state = RepeatState::new();
        assert_eq!(state.last(), None);
        assert_eq!(
            state.register(ActionType::BrightUp, 10, DEBOUNCE),
            Invocation::Fresh
        );
        assert_eq!(state.last(), Some(ActionType::BrightUp));
        assert_eq!(state.repeat_count(), 1);
        assert_eq!(state.last_action_ms(), 10);
    }

    #[test]
    fn repeatable_action_is_never_suppressed() {
        let mut state = RepeatState::new();
        state.register(ActionType::BrightUp, 0, DEBOUNCE);
        for (i, now) in (1..=5u64).enumerate() {
            assert_eq!(
                state.register(ActionType::BrightUp, now, DEBOUNCE),
                Invocation::Repeat { count: i as u32 + 2 }
            );
        }
        assert_eq!(state.repeat_count(), 6);
    }

    #[test]
    fn switching_action_resets_count() {
        let mut state = RepeatState::new();
        state.register(ActionType::BrightUp, 0, DEBOUNCE);
        state.register(ActionType::BrightUp, 10, DEBOUNCE);
        assert_eq!(
            state.register(ActionType::BrightDown, 20, DEBOUNCE),
            Invocation::Fresh
        );
        assert_eq!(state.repeat_count(), 1);
    }

    // =========================================================================
    // Debounce Tests
    // =========================================================================

    #[test]
    fn non_repeatable_within_window_is_suppressed() {
        let mut state = RepeatState::new();
        state.register(ActionType::PowerToggle, 1_000, DEBOUNCE);
        assert_eq!(
            state.register(ActionType::PowerToggle, 1_499, DEBOUNCE),
            Invocation::Suppressed
        );
        // Suppression does not move the window
        assert_eq!(state.last_action_ms(), 1_000);
        assert_eq!(state.repeat_count(), 1);
    }

    #[test]
    fn non_repeatable_at_window_edge_runs() {
        let mut state = RepeatState::new();
        state.register(ActionType::PowerToggle, 1_000, DEBOUNCE);
        assert_eq!(
            state.register(ActionType::PowerToggle, 1_500, DEBOUNCE),
            Invocation::Repeat { count: 2 }
        );
        assert_eq!(state.last_action_ms(), 1_500);
    }

    #[test]
    fn custom_debounce_window() {
        let mut state = RepeatState::new();
        state.register(ActionType::Preset1, 0, 200);
        assert!(state.register(ActionType::Preset1, 250, 200).should_run());
    }

    // =========================================================================
    // Clear Tests
    // =========================================================================

    #[test]
    fn clear_forgets_last_action() {
        let mut state = RepeatState::new();
        state.register(ActionType::PowerToggle, 0, DEBOUNCE);
        state.clear();
        assert_eq!(state.last(), None);
        assert_eq!(
            state.register(ActionType::PowerToggle, 10, DEBOUNCE),
            Invocation::Fresh
        );
    }

    #[test]
    fn should_run() {
        assert!(Invocation::Fresh.should_run());
        assert!(Invocation::Repeat { count: 3 }.should_run());
        assert!(!Invocation::Suppressed.should_run());
    }
}
