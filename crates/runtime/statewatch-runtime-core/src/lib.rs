//! Statewatch runtime core (engine-agnostic)
//!
//! Consumes the state list resolved by `statewatch-controller-core` and
//! follows the host animation player's active state by name hash, emitting
//! state-change events and optional per-state playback speed overrides. The
//! host drives both pieces from its own tick; nothing here owns a loop.

pub mod speed;
pub mod tracker;

pub use speed::SpeedOverrides;
pub use tracker::{RuntimeError, RuntimeEvent, RuntimeOutputs, StateTracker};
