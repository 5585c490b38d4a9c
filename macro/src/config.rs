//! Argument-count ceilings, configurable per crate or per workspace:
//!
//! ```toml
//! [package.metadata.va-iter]   # or [workspace.metadata.va-iter]
//! count-limit = 64
//! each-limit  = 256
//! ```

use crate::error::Issue;
use crate::error::Level;
use crate::error::error;
use crate::error::issue;
use crate::path;
use anyhow::Context;
use anyhow::bail;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

// =================
// === Constants ===
// =================

pub(crate) const DEFAULT_COUNT_LIMIT: usize = 64;
pub(crate) const DEFAULT_EACH_LIMIT: usize = 256;
pub(crate) const MAX_LIMIT: usize = 4096;

const METADATA_KEY: &str = "va-iter";
const COUNT_LIMIT_KEY: &str = "count-limit";
const EACH_LIMIT_KEY: &str = "each-limit";

// ==============
// === Limits ===
// ==============

/// The two ceilings are independent. `count` bounds counting, the emptiness predicates and the
/// indexed iterators. `each` bounds plain iteration only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Limits {
    pub count: usize,
    pub each: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { count: DEFAULT_COUNT_LIMIT, each: DEFAULT_EACH_LIMIT }
    }
}

impl Limits {
    /// Limits for the crate currently being compiled. Without a readable manifest (rustdoc
    /// snippets, manual rustc invocations) the defaults apply.
    pub fn load() -> crate::error::Result<Self> {
        let Some(dir) = path::manifest_dir() else { return Ok(Self::default()) };
        Self::load_from(&dir).map_err(|e| error!("Invalid va-iter configuration: {e:#}"))
    }

    fn load_from(dir: &Path) -> anyhow::Result<Self> {
        let manifests = read_manifests(dir)?;
        for (manifest_path, _) in &manifests {
            path::track(manifest_path);
        }
        Self::resolve(&manifests)
    }

    /// `manifests` are ordered nearest first. The crate's own `[package.metadata]` wins, then the
    /// nearest `[workspace.metadata]`, then the defaults. Keys are resolved one by one.
    fn resolve(manifests: &[(PathBuf, toml::Value)]) -> anyhow::Result<Self> {
        let package_table = manifests.first().and_then(|(path, manifest)| {
            metadata_table(manifest, "package").map(|t| (path, t))
        });
        let workspace_tables = manifests.iter().filter_map(|(path, manifest)| {
            metadata_table(manifest, "workspace").map(|t| (path, t))
        });
        let tables: Vec<_> = package_table.into_iter().chain(workspace_tables).collect();

        let mut limits = Self::default();
        if let Some(count) = lookup_limit(&tables, COUNT_LIMIT_KEY)? { limits.count = count }
        if let Some(each) = lookup_limit(&tables, EACH_LIMIT_KEY)? { limits.each = each }
        Ok(limits)
    }
}

/// Manifests from `dir` up to and including the workspace root, nearest first.
fn read_manifests(dir: &Path) -> anyhow::Result<Vec<(PathBuf, toml::Value)>> {
    let mut manifests = Vec::new();
    for manifest_path in path::ancestor_manifests(dir) {
        let Ok(content) = fs::read_to_string(&manifest_path) else { continue };
        let manifest: toml::Value = toml::from_str(&content)
            .with_context(|| format!("Failed to parse '{}'.", manifest_path.display()))?;
        let is_workspace_root = manifest.get("workspace").is_some();
        manifests.push((manifest_path, manifest));
        if is_workspace_root { break }
    }
    Ok(manifests)
}

fn metadata_table<'t>(manifest: &'t toml::Value, section: &str) -> Option<&'t toml::Table> {
    manifest
        .get(section)
        .and_then(|v| v.get("metadata"))
        .and_then(|v| v.get(METADATA_KEY))
        .and_then(|v| v.as_table())
}

fn lookup_limit(tables: &[(&PathBuf, &toml::Table)], key: &str) -> anyhow::Result<Option<usize>> {
    let Some((path, value)) = tables.iter().find_map(|(p, t)| t.get(key).map(|v| (p, v))) else {
        return Ok(None)
    };
    let limit = value
        .as_integer()
        .and_then(|n| usize::try_from(n).ok())
        .filter(|n| (1..=MAX_LIMIT).contains(n));
    match limit {
        Some(limit) => Ok(Some(limit)),
        None => bail!(
            "'{key}' in '{}' must be an integer in 1..={MAX_LIMIT}, got '{value}'.",
            path.display()
        ),
    }
}

// =============
// === Tests ===
// =============
