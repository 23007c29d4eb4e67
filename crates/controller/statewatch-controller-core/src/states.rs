//! Second pass: build state records against the completed layer table.
//!
//! Same forward scan as the layer pass, but this tier never fails the whole
//! document: a state section that cannot be resolved is dropped with a
//! warning and scanning continues. A section boundary (or the end of the
//! document) terminates the open record, which is validated and emitted in
//! scan order.

use crate::classify::{classify_line, FieldKey, LineKind};
use crate::diagnostics::{Diagnostics, ScanWarning};
use crate::ident::canonical_id;
use crate::layers::LayerRecord;
use crate::model::StateRecord;

/// Outcome of feeding one line to the open record's field resolver.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum FieldOutcome {
    /// Line consumed (or ignored); keep accumulating.
    Consumed,
    /// The section ended or the record cannot continue.
    Terminated,
}

#[derive(Debug, Default)]
struct PartialState {
    id: String,
    state_name: String,
    layer_name: String,
    tag: i32,
    is_default_state: bool,
}

impl PartialState {
    fn open(id: String) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Validate and convert into an output record, or drop with a warning.
    fn finalize(self, diag: &mut Diagnostics) -> Option<StateRecord> {
        if self.state_name.is_empty() || self.layer_name.is_empty() {
            diag.warn(ScanWarning::IncompleteState { section: self.id });
            return None;
        }
        Some(StateRecord::new(
            self.id,
            self.state_name,
            self.layer_name,
            self.tag,
            self.is_default_state,
        ))
    }
}

/// Scan the document and return all valid state records in scan order.
///
/// `layers` must be the complete table from [`crate::layers::scan_layers`];
/// states referencing a layer absent from it are dropped at validation.
pub fn scan_states(
    document: &str,
    layers: &[LayerRecord],
    diag: &mut Diagnostics,
) -> Vec<StateRecord> {
    let mut states: Vec<StateRecord> = Vec::new();
    let mut section_id = String::new();
    let mut open: Option<PartialState> = None;

    for line in document.lines() {
        let kind = classify_line(line);
        if let LineKind::SectionBoundary { raw_id } = kind {
            section_id = canonical_id(raw_id);
        }
        if kind == LineKind::StateBegin {
            // Begin markers are boundary-delimited in well-formed documents;
            // replacing an open record here only happens in malformed input.
            open = Some(PartialState::open(section_id.clone()));
            continue;
        }
        let Some(partial) = open.as_mut() else {
            continue;
        };
        if apply_field(kind, partial, layers, diag) == FieldOutcome::Terminated {
            if let Some(record) = open.take().and_then(|p| p.finalize(diag)) {
                states.push(record);
            }
        }
    }

    // End of document terminates a still-open record.
    if let Some(record) = open.take().and_then(|p| p.finalize(diag)) {
        states.push(record);
    }

    states
}

/// Per-field resolver for the open state record.
fn apply_field(
    kind: LineKind<'_>,
    partial: &mut PartialState,
    layers: &[LayerRecord],
    diag: &mut Diagnostics,
) -> FieldOutcome {
    match kind {
        LineKind::Field {
            key: FieldKey::Name,
            raw,
        } => {
            if raw.is_empty() {
                diag.warn(ScanWarning::EmptyStateName {
                    section: partial.id.clone(),
                });
                return FieldOutcome::Terminated;
            }
            partial.state_name = raw.to_string();
            FieldOutcome::Consumed
        }
        LineKind::Field {
            key: FieldKey::ParentLayer,
            raw,
        } => {
            let reference = canonical_id(raw);
            match layers.iter().find(|layer| layer.id == reference) {
                Some(layer) => {
                    partial.layer_name = layer.name.clone();
                    partial.is_default_state = partial.id == layer.default_state_id;
                }
                // Field failure only; the record keeps accumulating and
                // falls out at validation with its layer name unset.
                None => diag.warn(ScanWarning::UnresolvedLayer {
                    section: partial.id.clone(),
                    reference,
                }),
            }
            FieldOutcome::Consumed
        }
        LineKind::Field {
            key: FieldKey::Tag,
            raw,
        } => {
            if !raw.is_empty() {
                match parse_tag(raw) {
                    Ok(tag) => partial.tag = tag,
                    Err(_) => diag.warn(ScanWarning::InvalidTag {
                        section: partial.id.clone(),
                        raw: raw.to_string(),
                    }),
                }
            }
            FieldOutcome::Consumed
        }
        LineKind::SectionBoundary { .. } => FieldOutcome::Terminated,
        _ => FieldOutcome::Consumed,
    }
}

/// The host tooling serializes state tags as base-2 integer strings.
fn parse_tag(raw: &str) -> Result<i32, std::num::ParseIntError> {
    i32::from_str_radix(raw, 2)
}
