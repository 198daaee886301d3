//! # Pattern Module
//!
//! Compilation of Express-style path patterns into regular expressions.
//!
//! ## Overview
//!
//! Compilation is a two-phase pipeline:
//!
//! 1. **Tokenization** ([`token`]): the pattern is scanned into a sequence
//!    of typed segments - literal spans and `:`-prefixed dynamic tokens
//!    (named, wildcard, or quantified captures).
//!
//! 2. **Rendering** ([`compiler`]): the segment sequence is rendered
//!    left-to-right into a regex with one capturing group per dynamic
//!    segment, compiled once, and bundled with the ordered parameter names
//!    as a [`CompiledPattern`].
//!
//! Grammar recognition and regex emission are deliberately separate so the
//! grammar is testable without a regex engine in the loop, and so the
//! extractor never has to re-scan the pattern for names.
//!
//! A pattern delimited as `^...$` skips the pipeline entirely: it is a
//! caller-supplied regex, already final, and is never re-tokenized.
//!
//! ## Errors
//!
//! [`compile`] fails fast at route-registration time - an invalid raw regex
//! or a pattern not rooted at `/` is a configuration error surfaced before
//! any traffic is served, never deferred to request time.

mod compiler;
mod error;
mod token;

pub use compiler::{compile, compile_map, CompiledPattern};
pub use error::PatternError;
pub use token::{tokenize, Segment};
