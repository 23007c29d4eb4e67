//! Orchestration of the two passes plus the host collaborator seams.
//!
//! The two scans are strictly sequential and a layer-pass failure is a hard
//! gate on the state pass: section ordering in the document is arbitrary, so
//! state resolution needs the complete layer table up front. A single pass
//! with forward-reference patching would reintroduce exactly the ordering
//! dependency the two-pass structure removes.

use std::fs;
use std::path::{Path, PathBuf};

use crate::diagnostics::{Diagnostics, ScanWarning};
use crate::error::ResolveError;
use crate::layers::scan_layers;
use crate::model::{ResolvedModel, StateRecord};
use crate::states::scan_states;

/// Host-side source of controller documents.
///
/// Hosts implement this and pass it into [`resolve_subject`]; the core never
/// discovers documents on its own.
pub trait DocumentSource {
    /// Whether the host persists its documents as human-readable text. The
    /// line scanner is meaningless against a binary serialization, so
    /// resolution refuses to run when this is false.
    fn text_serialization_enabled(&self) -> bool;

    /// Map a subject to the path of its controller document.
    fn locate_document(&self, subject: &str) -> Result<PathBuf, ResolveError>;
}

/// Persistence sink for the resolved state list. Takes ownership; storage
/// format is the host's concern.
pub trait StateSink {
    fn persist(&mut self, subject: &str, states: Vec<StateRecord>);
}

/// What a completed [`resolve_subject`] call hands back after the state list
/// has gone to the sink.
#[derive(Clone, Debug)]
pub struct ResolveSummary {
    pub resolved: usize,
    pub warnings: Vec<ScanWarning>,
}

/// Resolve an in-memory document: layer pass, then state pass.
///
/// Returns the resolved model even when zero states survive validation; the
/// only failures at this level are layer-table failures.
pub fn resolve_document(document: &str) -> Result<ResolvedModel, ResolveError> {
    let layers = scan_layers(document)?;
    let mut diag = Diagnostics::new();
    let states = scan_states(document, &layers, &mut diag);
    Ok(ResolvedModel {
        states,
        warnings: diag.into_warnings(),
    })
}

/// Resolve the document at `path`. The read handle is scoped to this call
/// and released on every exit path.
pub fn resolve_path(path: &Path) -> Result<ResolvedModel, ResolveError> {
    let document = fs::read_to_string(path).map_err(|source| ResolveError::DocumentRead {
        path: path.to_path_buf(),
        source,
    })?;
    resolve_document(&document)
}

/// Full orchestration for one subject: serialization gate, document
/// location, the two passes, then persistence.
///
/// Any fatal error is logged once and returned; the sink is only reached on
/// full success, so a failed resolve never replaces previously persisted
/// state data with a partial set.
pub fn resolve_subject<S, K>(
    source: &S,
    sink: &mut K,
    subject: &str,
) -> Result<ResolveSummary, ResolveError>
where
    S: DocumentSource,
    K: StateSink,
{
    if !source.text_serialization_enabled() {
        return Err(log_fatal(ResolveError::TextSerializationDisabled));
    }

    let path = source.locate_document(subject).map_err(log_fatal)?;
    let model = resolve_path(&path).map_err(log_fatal)?;

    let summary = ResolveSummary {
        resolved: model.states.len(),
        warnings: model.warnings,
    };
    sink.persist(subject, model.states);
    Ok(summary)
}

fn log_fatal(error: ResolveError) -> ResolveError {
    log::error!("{error}");
    error
}
