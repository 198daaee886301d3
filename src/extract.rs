//! Variable extraction - matching compiled patterns against request paths.
//!
//! Extraction runs on the dispatch hot path: one call per candidate route
//! per request, on whatever worker thread the embedding server uses. It
//! only reads shared compiled data and writes a request-local [`Binding`],
//! stack-allocated for the common case of a handful of parameters.

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::warn;

use crate::cache::compile_cached;
use crate::pattern::CompiledPattern;

/// Maximum number of path parameters before heap allocation.
/// Most routes declare no more than four dynamic segments.
pub const MAX_INLINE_PARAMS: usize = 8;

type BindingVec = SmallVec<[(Arc<str>, Option<String>); MAX_INLINE_PARAMS]>;

/// Ordered parameter bindings produced by matching a path against a
/// compiled pattern.
///
/// Keys are unique and appear in capture-group order (1-based group order,
/// not declaration order). A `None` value means an optional group that did
/// not participate in the match; the entry still counts toward
/// [`len`](Binding::len). Created fresh per request and discarded when the
/// request completes.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    entries: BindingVec,
}

impl Binding {
    /// Get a bound value by parameter name or positional index.
    ///
    /// Returns `None` both for an unknown key and for a key whose optional
    /// group did not match; use [`contains_key`](Binding::contains_key) to
    /// tell the two apart.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Whether the extraction produced an entry for `key`, matched or not.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k.as_ref() == key)
    }

    /// Number of entries, including unmatched optional groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pattern failed to match (or had no capture groups).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in capture-group order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_ref(), v.as_deref()))
    }

    fn push(&mut self, key: Arc<str>, value: Option<String>) {
        // Keys are unique per extraction; a repeated name keeps its first
        // position and takes the later value.
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }
}

impl CompiledPattern {
    /// Match `path` and bind capture groups to parameter names.
    ///
    /// The regex is searched unanchored against the path. Groups are
    /// visited in order, 1-based: group `i` binds to the `i`-th declared
    /// name while names last, then falls back to the group's 0-based index
    /// as a decimal string. Passthrough `^...$` regexes declare no names,
    /// so all of their groups bind positionally (`"0"`, `"1"`, ...).
    ///
    /// A non-matching path yields an empty binding - the caller reads that
    /// as "route does not apply" and tries the next candidate.
    #[must_use]
    pub fn extract(&self, path: &str) -> Binding {
        let mut binding = Binding::default();
        let Some(caps) = self.regex().captures(path) else {
            return binding;
        };
        let names = self.param_names();
        for i in 1..caps.len() {
            let value = caps.get(i).map(|m| m.as_str().to_string());
            let key: Arc<str> = match names.get(i - 1) {
                Some(name) => Arc::clone(name),
                None => Arc::from((i - 1).to_string()),
            };
            binding.push(key, value);
        }
        binding
    }
}

/// Extract path variables as a pure function of two strings.
///
/// Compiles `pattern` through the shared cache and delegates to
/// [`CompiledPattern::extract`]. A pattern that fails to compile here never
/// made it through registration; it is logged and treated as a non-match
/// rather than raised, since nothing at dispatch time may fail the request
/// on a routing-table defect.
#[must_use]
pub fn extract_path_variables(pattern: &str, path: &str) -> Binding {
    match compile_cached(pattern) {
        Ok(compiled) => compiled.extract(path),
        Err(err) => {
            warn!(
                pattern = %pattern,
                path = %path,
                error = %err,
                "Unregistered pattern reached extraction"
            );
            Binding::default()
        }
    }
}
