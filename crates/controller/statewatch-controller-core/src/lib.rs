//! Statewatch controller core (engine-agnostic)
//!
//! Extracts a resolved layer/state model from a text-serialized animator
//! controller document. The document has no guaranteed section ordering, so
//! resolution runs two full passes: the first builds the layer table, the
//! second builds state records against the completed table. Host concerns
//! (document location, persistence, the runtime that consumes the model) sit
//! behind the collaborator seams in `resolve`.

pub mod classify;
pub mod diagnostics;
pub mod error;
pub mod hash;
pub mod ident;
pub mod layers;
pub mod model;
pub mod resolve;
pub mod states;
pub mod tokens;

// Re-exports for consumers (hosts and the runtime crate)
pub use classify::{classify_line, FieldKey, LineKind};
pub use diagnostics::{Diagnostics, ScanWarning};
pub use error::ResolveError;
pub use hash::{name_hash, qualified_name};
pub use ident::canonical_id;
pub use layers::{scan_layers, LayerRecord};
pub use model::{ResolvedModel, StateRecord};
pub use resolve::{
    resolve_document, resolve_path, resolve_subject, DocumentSource, ResolveSummary, StateSink,
};
pub use states::scan_states;
