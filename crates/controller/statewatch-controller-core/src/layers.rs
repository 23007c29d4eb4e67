//! First pass: build the layer table.
//!
//! A single forward scan over the document. Layer records commit to the
//! table the moment their default-state field is parsed; the document format
//! places that field after the name, before the next section boundary. A
//! missing structural field (section id or name) poisons the whole table and
//! therefore the whole operation.

use serde::{Deserialize, Serialize};

use crate::classify::{classify_line, FieldKey, LineKind};
use crate::error::ResolveError;
use crate::ident::canonical_id;

/// One layer as seen by the first pass. Read-only once the table is built.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayerRecord {
    /// Canonical id of the section the layer was declared in.
    pub id: String,
    pub name: String,
    /// Canonical id of the layer's default state; empty when the reference
    /// normalizes to nothing.
    pub default_state_id: String,
}

/// In-progress layer record; committed on the default-state field.
#[derive(Debug, Default)]
struct PartialLayer {
    section_id: String,
    name: String,
}

/// Scan the document and return the complete layer table.
///
/// Fails the whole parse when a layer's name field is reached while the
/// tracked section id is empty or the name value itself is empty. Partial
/// layer data is unusable for state resolution, so there is no partial
/// success at this tier.
pub fn scan_layers(document: &str) -> Result<Vec<LayerRecord>, ResolveError> {
    let mut table: Vec<LayerRecord> = Vec::new();
    let mut section_id = String::new();
    let mut open: Option<PartialLayer> = None;

    for line in document.lines() {
        let kind = classify_line(line);
        match kind {
            LineKind::SectionBoundary { raw_id } => {
                section_id = canonical_id(raw_id);
            }
            LineKind::LayerBegin => {
                // A begin marker while a record is open abandons the
                // previous partial; it never reached its commit field.
                open = Some(PartialLayer {
                    section_id: section_id.clone(),
                    ..Default::default()
                });
            }
            LineKind::Field {
                key: FieldKey::Name,
                raw,
            } => {
                if let Some(partial) = open.as_mut() {
                    if section_id.is_empty() || raw.is_empty() {
                        return Err(ResolveError::MalformedLayer {
                            section: section_id,
                            line: line.to_string(),
                        });
                    }
                    partial.name = raw.to_string();
                }
            }
            LineKind::Field {
                key: FieldKey::DefaultState,
                raw,
            } => {
                if let Some(partial) = open.take() {
                    table.push(LayerRecord {
                        id: partial.section_id,
                        name: partial.name,
                        default_state_id: canonical_id(raw),
                    });
                }
            }
            _ => {}
        }
    }

    Ok(table)
}
