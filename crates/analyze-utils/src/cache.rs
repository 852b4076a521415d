//! Memoization for pure `&str -> String` functions.

use std::fmt;

use dashmap::DashMap;
use tracing::trace;

use crate::logging::LOG_TARGET_CACHE;

/// A pure string function wrapped with an unbounded, thread-safe result cache.
///
/// The wrapped function must be side-effect free and depend only on its input; the first
/// call for a given input computes and stores the result, every later call with an equal
/// input returns the stored value. Hits are detected by key presence, so an empty-string
/// result is cached like any other.
///
/// Entries are never evicted. That is fine for identifier-like inputs, which form a small
/// set in practice, but the cache should not sit in front of arbitrary user text.
pub struct CachedStringFn<F> {
    name: &'static str,
    func: F,
    cache: DashMap<String, String>,
}

/// Wraps `func` in a [`CachedStringFn`].
pub fn cache_string_function<F>(func: F) -> CachedStringFn<F>
where
    F: Fn(&str) -> String,
{
    CachedStringFn::new(func)
}

impl<F> CachedStringFn<F>
where
    F: Fn(&str) -> String,
{
    pub fn new(func: F) -> Self {
        Self::named("anonymous", func)
    }

    /// Like [`CachedStringFn::new`], with a name attached to the cache's trace events.
    pub fn named(name: &'static str, func: F) -> Self {
        Self {
            name,
            func,
            cache: DashMap::new(),
        }
    }

    pub fn call(&self, input: &str) -> String {
        if let Some(hit) = self.cache.get(input) {
            return hit.value().clone();
        }
        trace!(target: LOG_TARGET_CACHE, cache = self.name, input, "cache miss");
        // Computed outside the shard lock so `func` may itself call other cached functions.
        // If two threads miss at once, the first insert wins; both values are equal anyway.
        let computed = (self.func)(input);
        self.cache
            .entry(input.to_owned())
            .or_insert(computed)
            .value()
            .clone()
    }

    pub fn contains(&self, input: &str) -> bool {
        self.cache.contains_key(input)
    }

    /// Number of cached inputs.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl<F> fmt::Debug for CachedStringFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedStringFn")
            .field("name", &self.name)
            .field("entries", &self.cache.len())
            .finish_non_exhaustive()
    }
}
