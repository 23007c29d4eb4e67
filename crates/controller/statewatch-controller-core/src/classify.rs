//! Per-line classification of controller document records.
//!
//! Classification is substring/equality based, not a full tokenization:
//! boundary lines are detected by containment of the boundary token, while
//! the begin markers require exact equality because field keys legitimately
//! contain the marker text as a substring (the default-state key contains
//! `State:`). Field values are everything after the *last* occurrence of the
//! separator, since values and nested ids repeat the separator earlier in
//! the line.

use crate::tokens;

/// Named fields of interest inside layer and state sections.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKey {
    /// Layer or state name (the key is shared by both section kinds).
    Name,
    Tag,
    ParentLayer,
    DefaultState,
}

/// Record kind of a single document line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineKind<'a> {
    /// Opens a new section; `raw_id` is empty when the id separator is
    /// missing from the line.
    SectionBoundary { raw_id: &'a str },
    LayerBegin,
    StateBegin,
    Field { key: FieldKey, raw: &'a str },
    Other,
}

/// Classify one line. Pure function of the line.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if line.contains(tokens::SECTION_BOUNDARY) {
        let raw_id = value_after_last(line, tokens::SECTION_ID_SEPARATOR).unwrap_or("");
        return LineKind::SectionBoundary { raw_id };
    }
    if line == tokens::LAYER_BEGIN {
        return LineKind::LayerBegin;
    }
    if line == tokens::STATE_BEGIN {
        return LineKind::StateBegin;
    }
    if line.contains(tokens::NAME_KEY) {
        return field(FieldKey::Name, line, tokens::FIELD_SEPARATOR);
    }
    if line.contains(tokens::PARENT_LAYER_KEY) {
        return field(FieldKey::ParentLayer, line, tokens::FIELD_SEPARATOR);
    }
    if line.contains(tokens::TAG_KEY) {
        return field(FieldKey::Tag, line, tokens::FIELD_SEPARATOR);
    }
    if line.contains(tokens::DEFAULT_STATE_KEY) {
        // The default-state value sits after the key token itself.
        return field(FieldKey::DefaultState, line, tokens::DEFAULT_STATE_KEY);
    }
    LineKind::Other
}

fn field<'a>(key: FieldKey, line: &'a str, separator: &str) -> LineKind<'a> {
    LineKind::Field {
        key,
        raw: value_after_last(line, separator).unwrap_or(""),
    }
}

/// Everything after the last occurrence of `separator`, or `None` when the
/// separator does not occur in the line.
pub fn value_after_last<'a>(line: &'a str, separator: &str) -> Option<&'a str> {
    line.rfind(separator)
        .map(|idx| &line[idx + separator.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_carries_raw_id() {
        let kind = classify_line("--- !u!1102 &110200001");
        assert_eq!(
            kind,
            LineKind::SectionBoundary {
                raw_id: "110200001"
            }
        );
    }

    #[test]
    fn boundary_without_separator_has_empty_id() {
        assert_eq!(
            classify_line("--- stray"),
            LineKind::SectionBoundary { raw_id: "" }
        );
    }

    #[test]
    fn begin_markers_require_exact_equality() {
        assert_eq!(classify_line("State:"), LineKind::StateBegin);
        assert_eq!(classify_line("StateMachine:"), LineKind::LayerBegin);
        // Field keys containing the marker text must not match.
        assert!(matches!(
            classify_line("  m_DefaultState: {fileID: 110200001}"),
            LineKind::Field {
                key: FieldKey::DefaultState,
                ..
            }
        ));
    }

    #[test]
    fn field_value_is_taken_after_last_separator() {
        let kind = classify_line("  m_ParentStateMachine: {fileID: 110700000}");
        assert_eq!(
            kind,
            LineKind::Field {
                key: FieldKey::ParentLayer,
                raw: "110700000}"
            }
        );
    }

    #[test]
    fn default_state_value_follows_the_key_token() {
        let kind = classify_line("  m_DefaultState: {fileID: 110200001}");
        assert_eq!(
            kind,
            LineKind::Field {
                key: FieldKey::DefaultState,
                raw: " {fileID: 110200001}"
            }
        );
    }

    #[test]
    fn name_with_separator_inside_keeps_last_segment() {
        let kind = classify_line("  m_Name: Base Layer");
        assert_eq!(
            kind,
            LineKind::Field {
                key: FieldKey::Name,
                raw: "Base Layer"
            }
        );
    }

    #[test]
    fn empty_field_value_classifies_as_empty() {
        assert_eq!(
            classify_line("  m_Tag: "),
            LineKind::Field {
                key: FieldKey::Tag,
                raw: ""
            }
        );
        // Without the trailing separator the value is also empty.
        assert_eq!(
            classify_line("  m_Tag:"),
            LineKind::Field {
                key: FieldKey::Tag,
                raw: ""
            }
        );
    }

    #[test]
    fn unrelated_lines_are_other() {
        assert_eq!(classify_line("  m_Speed: 1"), LineKind::Other);
        assert_eq!(classify_line(""), LineKind::Other);
    }
}
