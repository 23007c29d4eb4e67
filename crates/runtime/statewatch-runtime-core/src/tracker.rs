//! Active-state tracking against a persisted state list.
//!
//! The host reports the hash of its currently playing state once per tick;
//! the tracker resolves it against the stored records and emits a
//! `StateChanged` event on every transition. The hash is the cross-reference
//! key computed at resolve time (see `statewatch_controller_core::hash`).

use serde::{Deserialize, Serialize};
use statewatch_controller_core::StateRecord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// `start` needs one record flagged as its layer's default to seed the
    /// current state.
    #[error("no stored state carries the default-state flag")]
    MissingDefaultState,
}

/// Discrete signals emitted while following the host's active state.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum RuntimeEvent {
    /// `from` is empty when the previous hash matched no stored record.
    StateChanged { from: String, to: String },
}

/// Event buffer filled by [`StateTracker::observe`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RuntimeOutputs {
    #[serde(default)]
    pub events: Vec<RuntimeEvent>,
}

impl RuntimeOutputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: RuntimeEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Follows the host's active state over one subject's stored records.
#[derive(Debug, Default)]
pub struct StateTracker {
    states: Vec<StateRecord>,
    current_hash: Option<i32>,
}

impl StateTracker {
    pub fn new(states: Vec<StateRecord>) -> Self {
        Self {
            states,
            current_hash: None,
        }
    }

    /// Replace the stored records, e.g. after a re-resolve. The current
    /// hash is kept; it re-resolves against the new list on the next read.
    pub fn store_states(&mut self, states: Vec<StateRecord>) {
        self.states = states;
    }

    #[inline]
    pub fn states(&self) -> &[StateRecord] {
        &self.states
    }

    /// Seed the current state from the default-state flag. Called once when
    /// the host starts playback.
    pub fn start(&mut self) -> Result<(), RuntimeError> {
        let default = self
            .states
            .iter()
            .find(|s| s.is_default_state)
            .ok_or(RuntimeError::MissingDefaultState)?;
        self.current_hash = Some(default.name_hash());
        Ok(())
    }

    pub fn find_by_hash(&self, hash: i32) -> Option<&StateRecord> {
        self.states.iter().find(|s| s.name_hash() == hash)
    }

    pub fn current_state(&self) -> Option<&StateRecord> {
        self.current_hash.and_then(|hash| self.find_by_hash(hash))
    }

    /// Empty when the current hash matches no stored record.
    pub fn current_state_name(&self) -> &str {
        self.current_state().map(StateRecord::state_name).unwrap_or("")
    }

    /// Feed the hash the host reports for its active state. On a change the
    /// new hash is adopted even when it matches no stored record; the
    /// current state then reads as unknown until the host moves to a known
    /// one.
    pub fn observe(&mut self, active_hash: i32, out: &mut RuntimeOutputs) {
        if self.current_hash == Some(active_hash) {
            return;
        }
        self.notify_changed(active_hash, out);
        self.current_hash = Some(active_hash);
    }

    fn notify_changed(&self, new_hash: i32, out: &mut RuntimeOutputs) {
        if self.states.is_empty() {
            log::debug!("no stored state data, ignoring active-state observation");
            return;
        }
        let Some(new_state) = self.find_by_hash(new_hash) else {
            log::warn!("active state hash {new_hash} matches no stored record");
            return;
        };
        let from = self
            .current_state()
            .map(|s| s.state_name().to_string())
            .unwrap_or_default();
        out.push_event(RuntimeEvent::StateChanged {
            from,
            to: new_state.state_name().to_string(),
        });
    }
}
