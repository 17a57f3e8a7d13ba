//! Held-key tracking for terminal environments.
//!
//! Terminals with the keyboard enhancement protocol report key releases; most
//! others only repeat presses while a key is held. [`HeldKeys`] handles both:
//! a control stays held until its release event arrives or, until the first
//! release event is ever seen, until no press has refreshed it for the
//! release timeout.

use crossterm::event::KeyCode;

use crate::map::{control_for, Control};
use crate::types::Intent;

// Long enough to bridge the usual auto-repeat delay of a held key.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 500;

#[derive(Debug, Clone)]
pub struct HeldKeys {
    /// Milliseconds since the last press per control, `None` when released.
    held: [Option<u32>; 3],
    release_events_seen: bool,
    key_release_timeout_ms: u32,
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            held: [None; 3],
            release_events_seen: false,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Whether real release events have been observed.
    pub fn has_release_events(&self) -> bool {
        self.release_events_seen
    }

    /// Press or auto-repeat. Returns the control the key drives.
    pub fn press(&mut self, code: KeyCode) -> Option<Control> {
        let control = control_for(code)?;
        self.held[control.index()] = Some(0);
        Some(control)
    }

    pub fn release(&mut self, code: KeyCode) {
        self.release_events_seen = true;
        if let Some(control) = control_for(code) {
            self.held[control.index()] = None;
        }
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.held[control.index()].is_some()
    }

    /// Age held keys by `elapsed_ms`, auto-releasing stale ones when the
    /// terminal does not report releases.
    pub fn update(&mut self, elapsed_ms: u32) {
        for slot in &mut self.held {
            if let Some(age) = slot {
                *age = age.saturating_add(elapsed_ms);
                if !self.release_events_seen && *age > self.key_release_timeout_ms {
                    *slot = None;
                }
            }
        }
    }

    /// Snapshot for the next simulation frame.
    pub fn intent(&self) -> Intent {
        Intent::new(
            self.is_held(Control::Left),
            self.is_held(Control::Right),
            self.is_held(Control::Jump),
        )
    }

    pub fn clear(&mut self) {
        self.held = [None; 3];
    }
}
