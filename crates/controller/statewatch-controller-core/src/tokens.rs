//! Fixed tokens of the host ecosystem's text serialization format.
//!
//! These are dictated by the external tooling that writes controller
//! documents; they are not configurable.

/// Substring marking a section boundary line.
pub const SECTION_BOUNDARY: &str = "---";
/// The raw section id follows the last occurrence of this separator on a
/// boundary line.
pub const SECTION_ID_SEPARATOR: &str = "&";

/// Exact line opening a layer record inside the current section.
pub const LAYER_BEGIN: &str = "StateMachine:";
/// Exact line opening a state record inside the current section.
pub const STATE_BEGIN: &str = "State:";

/// Generic key/value separator for named fields.
pub const FIELD_SEPARATOR: &str = ": ";

/// Name field, shared by layer and state sections.
pub const NAME_KEY: &str = "m_Name:";
/// State tag field (base-2 integer string).
pub const TAG_KEY: &str = "m_Tag:";
/// State-to-layer back reference.
pub const PARENT_LAYER_KEY: &str = "m_ParentStateMachine:";
/// Layer's default-state reference. The value is taken after the key token
/// itself rather than the generic separator.
pub const DEFAULT_STATE_KEY: &str = "m_DefaultState:";
