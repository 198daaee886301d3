//! Process-wide cache of compiled patterns.
//!
//! Patterns are compiled while the route table is assembled and read on
//! every request afterwards, so the cache is a concurrent map whose writes
//! are confined to the registration phase. Repeated registrations and
//! multiple registries reuse one compiled form per distinct pattern string.

use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;

use crate::pattern::{compile, CompiledPattern, PatternError};

static PATTERN_CACHE: Lazy<DashMap<String, Arc<CompiledPattern>>> = Lazy::new(DashMap::new);

/// Compile `pattern`, reusing the shared compiled form when one exists.
///
/// Compilation is a pure function of the pattern string, so memoization is
/// transparent: the returned `Arc` points at the same [`CompiledPattern`]
/// for every call with the same input. Failures are not cached; they are
/// registration-time errors the caller must surface.
///
/// # Errors
///
/// Propagates [`PatternError`] from [`compile`].
pub fn compile_cached(pattern: &str) -> Result<Arc<CompiledPattern>, PatternError> {
    if let Some(hit) = PATTERN_CACHE.get(pattern) {
        return Ok(Arc::clone(hit.value()));
    }
    let compiled = Arc::new(compile(pattern)?);
    PATTERN_CACHE.insert(pattern.to_string(), Arc::clone(&compiled));
    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_compiles_share_one_allocation() {
        let a = compile_cached("/cache/:key").expect("compile failed");
        let b = compile_cached("/cache/:key").expect("compile failed");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn errors_are_not_cached() {
        assert!(compile_cached("no-slash").is_err());
        assert!(compile_cached("no-slash").is_err());
    }
}
