// Log targets, so `RUST_LOG` can enable each concern on its own.
pub(crate) const LOG_TARGET_CACHE: &str = "analyze_utils::cache";
pub(crate) const LOG_TARGET_SOURCE_RANGE: &str = "analyze_utils::source_range";
