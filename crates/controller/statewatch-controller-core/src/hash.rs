//! Stable name hashing for the runtime cross-reference key.
//!
//! The runtime collaborator identifies the active state by a 32-bit hash of
//! the qualified `<layer>.<state>` name, matching the host ecosystem's
//! string-hash convention (signed 32-bit). FNV-1a is used as the stable
//! function; distinct qualified names are assumed not to collide within one
//! document's lifetime and no collision detection is performed.

/// Qualified name a state is addressed by: `<layer>.<state>`.
pub fn qualified_name(layer_name: &str, state_name: &str) -> String {
    format!("{layer_name}.{state_name}")
}

/// Stable hash of the qualified name, reinterpreted as `i32`.
pub fn name_hash(layer_name: &str, state_name: &str) -> i32 {
    fnv1a32(qualified_name(layer_name, state_name).as_bytes()) as i32
}

/// 32-bit FNV-1a.
fn fnv1a32(bytes: &[u8]) -> u32 {
    const OFFSET_BASIS: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;

    let mut hash = OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}
