//! Key state registry.
//!
//! Holds the edge state of every logical action. Key events write into it
//! synchronously as they arrive; the arbiter reads and advances it once per
//! tick. Only the latest held/released state is observed by a tick.

use crate::map::actions_for_code;
use crate::types::{HoldPolicy, LogicalAction};

/// Per-action edge state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionState {
    held_frames: u32,
    is_held: bool,
    policy: HoldPolicy,
}

impl ActionState {
    const fn released(policy: HoldPolicy) -> Self {
        Self {
            held_frames: 0,
            is_held: false,
            policy,
        }
    }

    /// Ticks observed since the press; only meaningful while held.
    pub fn held_frames(&self) -> u32 {
        self.held_frames
    }

    pub fn is_held(&self) -> bool {
        self.is_held
    }

    pub fn policy(&self) -> HoldPolicy {
        self.policy
    }

    fn press(&mut self) {
        self.is_held = true;
    }

    fn release(&mut self) {
        self.is_held = false;
        self.held_frames = 0;
    }

    /// Decide this tick and advance the frame counter.
    ///
    /// Returns whether the action fires. A released action never fires and its
    /// counter stays at 0.
    pub(crate) fn poll(&mut self) -> bool {
        if !self.is_held {
            return false;
        }
        let fire = self.policy.fires_at(self.held_frames);
        self.held_frames = self.held_frames.saturating_add(1);
        fire
    }
}

/// Edge state for all eight logical actions, with the fixed policy table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRegistry {
    states: [ActionState; LogicalAction::COUNT],
}

impl KeyRegistry {
    pub fn new() -> Self {
        let mut states = [ActionState::released(HoldPolicy::Never); LogicalAction::COUNT];
        for action in LogicalAction::ALL {
            states[action.index()] = ActionState::released(action.policy());
        }
        Self { states }
    }

    pub fn state(&self, action: LogicalAction) -> &ActionState {
        &self.states[action.index()]
    }

    pub fn is_held(&self, action: LogicalAction) -> bool {
        self.state(action).is_held
    }

    /// Physical key went down (`KeyboardEvent.code`).
    ///
    /// Re-pressing an already held action keeps its frame count, so auto-repeat
    /// key-down events do not restart the hold. Every key asserts `AnyKey`.
    pub fn key_down(&mut self, code: &str) {
        for &action in actions_for_code(code) {
            self.press(action);
        }
        self.press(LogicalAction::AnyKey);
    }

    /// Physical key went up.
    ///
    /// Any key-up clears `AnyKey`, even while another key is still down.
    pub fn key_up(&mut self, code: &str) {
        for &action in actions_for_code(code) {
            self.release(action);
        }
        self.release(LogicalAction::AnyKey);
    }

    /// Mark `action` held without touching `AnyKey`.
    pub fn press(&mut self, action: LogicalAction) {
        self.states[action.index()].press();
    }

    /// Release `action`, resetting its frame count.
    pub fn release(&mut self, action: LogicalAction) {
        self.states[action.index()].release();
    }

    /// Release every action.
    pub fn reset(&mut self) {
        for state in &mut self.states {
            state.release();
        }
    }

    pub(crate) fn state_mut(&mut self, action: LogicalAction) -> &mut ActionState {
        &mut self.states[action.index()]
    }
}

impl Default for KeyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
