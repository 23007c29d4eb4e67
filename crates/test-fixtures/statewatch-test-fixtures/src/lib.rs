//! Shared fixture loader for the statewatch test suites.
//!
//! Fixture documents live in `fixtures/` at the repository root and are
//! named through `fixtures/manifest.json` so tests never hard-code paths.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    controllers: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

pub mod controllers {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.controllers.keys().cloned().collect()
    }

    /// The raw document text.
    pub fn text(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.controllers, "controller", name)?;
        read_to_string(rel)
    }

    /// Absolute path to the document, for tests exercising the file-reading
    /// orchestration.
    pub fn path(name: &str) -> Result<PathBuf> {
        let rel = lookup(&MANIFEST.controllers, "controller", name)?;
        Ok(resolve_path(rel))
    }
}
