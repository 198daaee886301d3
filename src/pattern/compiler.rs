//! Regex renderer - turns tokenized patterns into compiled matchers.

use std::collections::HashMap;
use std::sync::Arc;

use regex::Regex;
use tracing::debug;

use super::error::PatternError;
use super::token::{tokenize, Segment};

/// A path pattern compiled to its regular-expression form.
///
/// Bundles the rendered regex with the ordered parameter names recovered
/// during tokenization, as one inseparable value - the extractor never
/// re-scans the pattern for names. Created once at route-registration time
/// and read-only thereafter; cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex_str: String,
    regex: Regex,
    param_names: Vec<Arc<str>>,
}

impl CompiledPattern {
    /// The pattern string as registered.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The rendered regular expression.
    ///
    /// For a `^...$` passthrough pattern this is the source verbatim.
    #[must_use]
    pub fn regex_str(&self) -> &str {
        &self.regex_str
    }

    /// The compiled matcher.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Parameter names in declaration order, one per dynamic segment.
    ///
    /// Empty for passthrough regexes; their capture groups bind to
    /// positional indices instead.
    #[must_use]
    pub fn param_names(&self) -> &[Arc<str>] {
        &self.param_names
    }
}

/// Compile a path pattern into a [`CompiledPattern`].
///
/// A pattern delimited as `^...$` is a caller-supplied regex, already
/// final: it is compiled as-is and declares no parameter names. Any other
/// pattern must be rooted at `/` and is tokenized, then rendered
/// left-to-right by interleaving literal spans with one capturing group per
/// dynamic segment:
///
/// - `:name` emits `([\w-]+)`
/// - a token containing `*` emits its body with `*` widened to `\w*`,
///   wrapped in a group
/// - a token containing `?` or `+` emits its body unchanged, wrapped in a
///   group
///
/// Pure function of the input string; recompiling the same pattern yields
/// identical output. See [`crate::cache::compile_cached`] for the memoized
/// form.
///
/// # Errors
///
/// [`PatternError::NotRooted`] for a non-regex pattern without a leading
/// `/`; [`PatternError::InvalidRegex`] when the regex engine rejects the
/// pattern.
pub fn compile(pattern: &str) -> Result<CompiledPattern, PatternError> {
    if pattern.starts_with('^') && pattern.ends_with('$') {
        let regex = Regex::new(pattern).map_err(|e| PatternError::InvalidRegex {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        return Ok(CompiledPattern {
            source: pattern.to_string(),
            regex_str: pattern.to_string(),
            regex,
            param_names: Vec::new(),
        });
    }

    if !pattern.starts_with('/') {
        return Err(PatternError::NotRooted {
            pattern: pattern.to_string(),
        });
    }

    let mut regex_str = String::with_capacity(pattern.len() + 8);
    let mut param_names: Vec<Arc<str>> = Vec::new();

    for segment in tokenize(pattern) {
        match segment {
            Segment::Literal(text) => regex_str.push_str(&text),
            Segment::Named(name) => {
                regex_str.push_str(r"([\w-]+)");
                param_names.push(Arc::from(name));
            }
            Segment::Wildcard { name, body } => {
                regex_str.push('(');
                regex_str.push_str(&body.replace('*', r"\w*"));
                regex_str.push(')');
                param_names.push(Arc::from(name));
            }
            Segment::Quantified { name, body } => {
                regex_str.push('(');
                regex_str.push_str(&body);
                regex_str.push(')');
                param_names.push(Arc::from(name));
            }
        }
    }

    let regex = Regex::new(&regex_str).map_err(|e| PatternError::InvalidRegex {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    debug!(
        pattern = %pattern,
        regex = %regex_str,
        param_count = param_names.len(),
        "Path pattern compiled"
    );

    Ok(CompiledPattern {
        source: pattern.to_string(),
        regex_str,
        regex,
        param_names,
    })
}

/// Compile a collection of patterns, deduplicated by source string.
///
/// Duplicate registrations collapse to one shared [`CompiledPattern`]; the
/// first occurrence wins. Intended for the router's registration phase,
/// where the whole route table is compiled up front.
///
/// # Errors
///
/// Returns the first [`PatternError`] encountered; registration aborts on
/// the first bad pattern.
pub fn compile_map<I, S>(patterns: I) -> Result<HashMap<String, Arc<CompiledPattern>>, PatternError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut map = HashMap::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        if !map.contains_key(pattern) {
            map.insert(pattern.to_string(), Arc::new(compile(pattern)?));
        }
    }
    Ok(map)
}
