//! URI-template parameter extraction for upgraded connections.
//!
//! Streaming/websocket-style upgrades carry a path template attached by the
//! embedding server rather than one of the router's own patterns.
//! [`extract_template_params`] is the adapter over that facility, and it is
//! deliberately lenient: a failed extraction must not abort the upgrade
//! handshake, so every failure collapses to an empty map. The query parser
//! and pattern compiler stay strict; the leniency is a policy of this
//! component only.

use std::collections::HashMap;
use std::fmt;

use regex::Regex;
use tracing::debug;

/// Template matching error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template did not produce a valid matcher
    InvalidTemplate {
        /// The template as supplied
        template: String,
        /// The regex engine's diagnostic
        message: String,
    },
    /// The path did not match the template
    NoMatch {
        /// The path that failed to match
        path: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::InvalidTemplate { template, message } => {
                write!(f, "Template error: '{}' is not a valid URI template: {}", template, message)
            }
            TemplateError::NoMatch { path } => {
                write!(f, "Template error: path '{}' does not match the template", path)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Seam to the embedding server's URI-template matching facility.
///
/// The built-in [`UriTemplate`] covers `{name}` segment templates; servers
/// with their own template engine implement this trait and hand matchers to
/// [`extract_template_params`].
pub trait TemplateMatcher {
    /// Match `path` against this template and return its variable bindings.
    ///
    /// # Errors
    ///
    /// Implementations report mismatches and internal failures as
    /// [`TemplateError`]; the adapter converts both to an empty result.
    fn path_params(&self, path: &str) -> Result<HashMap<String, String>, TemplateError>;
}

/// A `{name}` segment template compiled to an anchored regex.
///
/// Each `{name}` segment matches one path segment (`[^/]+`); literal
/// segments match themselves exactly.
#[derive(Debug, Clone)]
pub struct UriTemplate {
    template: String,
    regex: Regex,
    var_names: Vec<String>,
}

impl UriTemplate {
    /// Compile a segment template such as `/chat/{room}/member/{id}`.
    ///
    /// # Errors
    ///
    /// [`TemplateError::InvalidTemplate`] when the rendered regex does not
    /// compile.
    pub fn new(template: &str) -> Result<Self, TemplateError> {
        let mut pattern = String::with_capacity(template.len() + 5);
        pattern.push('^');
        let mut var_names = Vec::new();

        if template == "/" {
            pattern.push('/');
        } else {
            for segment in template.split('/') {
                if segment.starts_with('{') && segment.ends_with('}') {
                    let name = segment.trim_start_matches('{').trim_end_matches('}');
                    var_names.push(name.to_string());
                    pattern.push_str("/([^/]+)");
                } else if !segment.is_empty() {
                    pattern.push('/');
                    pattern.push_str(&regex::escape(segment));
                }
            }
        }

        pattern.push('$');
        let regex = Regex::new(&pattern).map_err(|e| TemplateError::InvalidTemplate {
            template: template.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            template: template.to_string(),
            regex,
            var_names,
        })
    }

    /// The template string as supplied.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }
}

impl TemplateMatcher for UriTemplate {
    fn path_params(&self, path: &str) -> Result<HashMap<String, String>, TemplateError> {
        let caps = self
            .regex
            .captures(path)
            .ok_or_else(|| TemplateError::NoMatch {
                path: path.to_string(),
            })?;
        Ok(self
            .var_names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| {
                caps.get(i + 1)
                    .map(|m| (name.clone(), m.as_str().to_string()))
            })
            .collect())
    }
}

/// Extract template parameters for a connection upgrade, leniently.
///
/// Any failure - no template attached to the upgrade, a non-matching path,
/// an error inside the matcher - yields an empty map and is logged at debug
/// level. Never raises to the caller.
#[must_use]
pub fn extract_template_params<M: TemplateMatcher>(
    matcher: Option<&M>,
    path: &str,
) -> HashMap<String, String> {
    match matcher {
        Some(matcher) => match matcher.path_params(path) {
            Ok(params) => params,
            Err(err) => {
                debug!(path = %path, error = %err, "Template extraction failed, continuing with no params");
                HashMap::new()
            }
        },
        None => HashMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_template_extracts_by_name() {
        let template = UriTemplate::new("/chat/{room}/member/{id}").expect("template failed");
        let params = extract_template_params(Some(&template), "/chat/rust/member/42");
        assert_eq!(params.get("room").map(String::as_str), Some("rust"));
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn mismatch_yields_empty_map() {
        let template = UriTemplate::new("/chat/{room}").expect("template failed");
        assert!(extract_template_params(Some(&template), "/mail/inbox").is_empty());
    }

    #[test]
    fn unset_template_yields_empty_map() {
        assert!(extract_template_params(None::<&UriTemplate>, "/chat/rust").is_empty());
    }

    #[test]
    fn matcher_error_yields_empty_map() {
        struct Failing;
        impl TemplateMatcher for Failing {
            fn path_params(&self, path: &str) -> Result<HashMap<String, String>, TemplateError> {
                Err(TemplateError::NoMatch {
                    path: path.to_string(),
                })
            }
        }
        assert!(extract_template_params(Some(&Failing), "/anything").is_empty());
    }

    #[test]
    fn literal_segments_match_exactly() {
        let template = UriTemplate::new("/files/v1.2/{name}").expect("template failed");
        let params = extract_template_params(Some(&template), "/files/v1.2/report");
        assert_eq!(params.get("name").map(String::as_str), Some("report"));
        // The dot is literal, not "any character".
        assert!(extract_template_params(Some(&template), "/files/v1x2/report").is_empty());
    }

    #[test]
    fn root_template_matches_root_only() {
        let template = UriTemplate::new("/").expect("template failed");
        assert!(template.path_params("/").is_ok());
        assert!(template.path_params("/x").is_err());
    }
}
