use std::path::PathBuf;

/// Workspace root: the parent of this crate's manifest directory.
fn workspace_root() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("crate manifest directory has no parent")
        .to_path_buf()
}

/// Returns `<workspace>/test_output/<group>/<name>`, creating the directory.
///
/// Tests write inspectable artifacts (masks, classifier inputs) here.
pub fn test_output_path(group: &str, name: &str) -> PathBuf {
    let dir = workspace_root().join("test_output").join(group);
    std::fs::create_dir_all(&dir)
        .unwrap_or_else(|e| panic!("Failed to create {}: {}", dir.display(), e));
    dir.join(name)
}
