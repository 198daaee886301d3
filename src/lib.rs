//! # routematch
//!
//! **routematch** is the path-matching engine for an Express-style HTTP
//! router: it compiles route patterns with named parameters, positional
//! captures, wildcard segments, or raw regular expressions into matchers,
//! and extracts bound variables and query-string data for request handlers.
//!
//! ## Overview
//!
//! The crate is a pure in-process library. The embedding router calls
//! [`pattern::compile`] once per pattern at registration time (or
//! [`cache::compile_cached`] to share compiled forms process-wide), then on
//! every request calls [`CompiledPattern::extract`] against the incoming
//! path and [`query::parse_query`] on the raw query string. Results are
//! attached to the request context handed to the application handler.
//!
//! ## Architecture
//!
//! - **[`pattern`]** - Pattern tokenizer and regex renderer producing
//!   [`CompiledPattern`]s
//! - **[`extract`]** - Matching a compiled pattern against a concrete path,
//!   producing an ordered [`Binding`]
//! - **[`query`]** - Query-string parsing into an ordered multi-valued
//!   [`QueryMap`]
//! - **[`prefix`]** - Longest literal prefix resolution for grouping routes
//!   under a mount context
//! - **[`template`]** - URI-template parameter extraction for upgraded
//!   (streaming/websocket-style) connections
//! - **[`cache`]** - Process-wide cache of compiled patterns
//!
//! ## Pattern grammar
//!
//! A pattern delimited as `^...$` is treated as a final regular expression
//! and passed through verbatim. Any other pattern must be rooted at `/`;
//! dynamic segments start with `:`:
//!
//! ```rust
//! use routematch::pattern::compile;
//!
//! let compiled = compile("/flights/:airport/:depart-:arrive/:gate").unwrap();
//! assert_eq!(
//!     compiled.regex_str(),
//!     r"/flights/([\w-]+)/([\w-]+)-([\w-]+)/([\w-]+)"
//! );
//!
//! let binding = compiled.extract("/flights/ord/chicago-atlanta/D20");
//! assert_eq!(binding.get("airport"), Some("ord"));
//! assert_eq!(binding.get("gate"), Some("D20"));
//! ```
//!
//! ## Concurrency
//!
//! Compilation is a configuration-time operation performed while the route
//! table is assembled. Extraction and query parsing are pure, stateless
//! calls that only read shared compiled data; they run concurrently on
//! whatever threads the embedding server dispatches requests to. Nothing in
//! this crate blocks or performs I/O.

pub mod cache;
pub mod extract;
pub mod pattern;
pub mod prefix;
pub mod query;
pub mod template;

pub use cache::compile_cached;
pub use extract::{extract_path_variables, Binding, MAX_INLINE_PARAMS};
pub use pattern::{compile, compile_map, CompiledPattern, PatternError};
pub use prefix::longest_prefixes;
pub use query::{parse_query, QueryMap};
pub use template::{
    extract_template_params, TemplateError, TemplateMatcher, UriTemplate,
};
