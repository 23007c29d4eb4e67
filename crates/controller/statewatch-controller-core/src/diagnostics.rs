//! Record-level diagnostics for the state pass.
//!
//! Warnings are the recoverable tier: the offending record (or field) is
//! dropped or defaulted and scanning continues. Each warning is mirrored to
//! the `log` stream and collected so callers can observe how many records
//! were excluded from the output.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A recoverable problem found while scanning state sections.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanWarning {
    #[error("state section {section}: state name is empty")]
    EmptyStateName { section: String },
    #[error("state section {section}: no layer with id '{reference}'")]
    UnresolvedLayer { section: String, reference: String },
    #[error("state section {section}: tag '{raw}' is not a base-2 integer, keeping previous value")]
    InvalidTag { section: String, raw: String },
    #[error("state section {section}: record is incomplete and was dropped")]
    IncompleteState { section: String },
}

/// Collector for scan warnings.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<ScanWarning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and mirror it to the log stream.
    pub fn warn(&mut self, warning: ScanWarning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[ScanWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<ScanWarning> {
        self.warnings
    }
}
