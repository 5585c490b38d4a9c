use std::path::Path;
use std::path::PathBuf;

pub const MANIFEST: &str = "Cargo.toml";

/// Directory of the crate being compiled. Cargo sets this for every rustc invocation, and proc
/// macros run inside that process, so it points at the crate calling the macro.
pub fn manifest_dir() -> Option<PathBuf> {
    std::env::var_os("CARGO_MANIFEST_DIR").map(PathBuf::from)
}

/// Manifests from `dir` upwards, nearest first.
pub fn ancestor_manifests(dir: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    dir.ancestors()
        .map(|p| p.join(MANIFEST))
        .filter(|p| p.is_file())
}

/// Register `path` as a build input of the crate calling the macro, so editing it triggers a
/// rebuild. Only nightly compilers offer this.
pub fn track(path: &Path) {
    #[cfg(nightly)]
    if let Some(path) = path.to_str() {
        proc_macro::tracked_path::path(path);
    }
    #[cfg(not(nightly))]
    let _ = path;
}
