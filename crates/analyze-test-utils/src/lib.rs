use std::path::{Path, PathBuf};

use analyze_core::{NodeSpan, ScriptContext};
use tracing_subscriber::EnvFilter;

/// Gets the absolute path to the workspace root directory
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent() // crates/
        .and_then(Path::parent) // workspace root
        .expect("Failed to get workspace root")
        .to_path_buf()
}

/// Gets the absolute path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    workspace_root().join("tests/fixtures")
}

/// Installs a test-writer subscriber filtered by `RUST_LOG`. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

pub fn fixture_source(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("fixture {} should be readable: {e}", path.display()))
}

pub fn fixture_context(name: &str) -> ScriptContext {
    ScriptContext::new(fixture_source(name)).with_file_path(fixtures_dir().join(name))
}

/// Span covering the first occurrence of `needle` in `source`, with line/column metadata
/// filled in.
pub fn span_of(source: &str, needle: &str) -> NodeSpan {
    let start = source
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in source"));
    NodeSpan::from_offsets(source, start, start + needle.len())
        .expect("offsets from str::find are valid")
}
