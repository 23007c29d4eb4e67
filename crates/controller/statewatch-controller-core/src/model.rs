//! Resolved output model.

use serde::{Deserialize, Serialize};

use crate::diagnostics::ScanWarning;
use crate::hash;

/// One fully resolved state.
///
/// The names are private so `name_hash` can never go stale: it is
/// recomputed whenever either name changes. The hash is the sole
/// cross-reference key the runtime uses to follow the host's active state.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StateRecord {
    /// Canonical id of the section the state was declared in.
    pub id: String,
    state_name: String,
    layer_name: String,
    /// Integer tag, 0 when the document carries none.
    #[serde(default)]
    pub tag: i32,
    #[serde(default)]
    pub is_default_state: bool,
    name_hash: i32,
}

impl StateRecord {
    pub fn new(
        id: impl Into<String>,
        state_name: impl Into<String>,
        layer_name: impl Into<String>,
        tag: i32,
        is_default_state: bool,
    ) -> Self {
        let state_name = state_name.into();
        let layer_name = layer_name.into();
        let name_hash = hash::name_hash(&layer_name, &state_name);
        Self {
            id: id.into(),
            state_name,
            layer_name,
            tag,
            is_default_state,
            name_hash,
        }
    }

    #[inline]
    pub fn state_name(&self) -> &str {
        &self.state_name
    }

    #[inline]
    pub fn layer_name(&self) -> &str {
        &self.layer_name
    }

    #[inline]
    pub fn name_hash(&self) -> i32 {
        self.name_hash
    }

    pub fn set_state_name(&mut self, name: impl Into<String>) {
        self.state_name = name.into();
        self.rehash();
    }

    pub fn set_layer_name(&mut self, name: impl Into<String>) {
        self.layer_name = name.into();
        self.rehash();
    }

    /// `<layer>.<state>`, the string the cross-reference hash is taken over.
    pub fn qualified_name(&self) -> String {
        hash::qualified_name(&self.layer_name, &self.state_name)
    }

    /// A record is valid once both names are resolved.
    pub fn is_valid(&self) -> bool {
        !self.state_name.is_empty() && !self.layer_name.is_empty()
    }

    fn rehash(&mut self) {
        self.name_hash = hash::name_hash(&self.layer_name, &self.state_name);
    }
}

/// Output of a full resolve: validated states in scan order, plus the
/// record-level warnings accumulated along the way.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ResolvedModel {
    #[serde(default)]
    pub states: Vec<StateRecord>,
    #[serde(default)]
    pub warnings: Vec<ScanWarning>,
}

impl ResolvedModel {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The first state flagged as its layer's default, if any.
    pub fn default_state(&self) -> Option<&StateRecord> {
        self.states.iter().find(|s| s.is_default_state)
    }
}
