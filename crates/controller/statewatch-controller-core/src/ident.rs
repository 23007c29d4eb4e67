//! Canonical section-id normalization.

/// Strip every character that is not an ASCII digit or a period.
///
/// Applied uniformly to section-boundary ids, default-state references and
/// state-to-layer references, so differing punctuation around the raw tokens
/// (`&1102...`, `{fileID: 1102...}`) cannot break equality comparisons.
pub fn canonical_id(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}
