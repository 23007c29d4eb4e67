//! Operation-level failures.
//!
//! This is the fatal tier: any of these aborts the whole resolve call and
//! yields no partial output.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// The host persists its documents in a non-text format; the line
    /// scanner cannot run against it.
    #[error("host document serialization is not text; resolution refused")]
    TextSerializationDisabled,

    /// The document source could not map the subject to a document.
    #[error("no controller document for '{subject}': {reason}")]
    DocumentUnavailable { subject: String, reason: String },

    #[error("failed to read controller document {}: {source}", path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A layer section is missing structurally required data (section id or
    /// name). States cannot be resolved against an incomplete layer table,
    /// so this aborts the operation rather than dropping the record.
    #[error("failed to parse layer name in section '{section}': {line}")]
    MalformedLayer { section: String, line: String },
}
