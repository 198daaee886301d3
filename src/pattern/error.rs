use std::fmt;

/// Pattern compilation error
///
/// Returned by [`compile`](super::compile) at route-registration time. A
/// bad pattern is a configuration problem and must fail before any traffic
/// is served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The regex (raw `^...$` passthrough or rendered form) failed to compile
    InvalidRegex {
        /// The pattern as registered
        pattern: String,
        /// The regex engine's diagnostic
        message: String,
    },
    /// A non-regex pattern did not start with `/`
    ///
    /// Only `^...$`-delimited patterns may omit the leading slash; every
    /// other pattern is a path and must be rooted.
    NotRooted {
        /// The pattern as registered
        pattern: String,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::InvalidRegex { pattern, message } => {
                write!(
                    f,
                    "Pattern error: '{}' does not compile to a valid regex: {}",
                    pattern, message
                )
            }
            PatternError::NotRooted { pattern } => {
                write!(
                    f,
                    "Pattern error: '{}' must start with '/' (or be a ^...$ regex literal)",
                    pattern
                )
            }
        }
    }
}

impl std::error::Error for PatternError {}
