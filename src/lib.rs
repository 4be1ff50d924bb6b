//! Route string matching.
//!
//! A route string is either `*` or a `/`-separated pattern made of static
//! segments, `@name` parameter segments (`:name` is still accepted but
//! deprecated) and an optional trailing `*` glob.
//!
//! ```
//! use route_string::resolve_route_string;
//!
//! let params = resolve_route_string("/user/@id", "/user/42").unwrap().unwrap();
//! assert_eq!(params.get("id"), Some("42"));
//!
//! let params = resolve_route_string("/a/*", "/a/b/c").unwrap().unwrap();
//! assert_eq!(params.glob(), Some("b/c"));
//!
//! assert!(resolve_route_string("/user/@id", "/user").unwrap().is_none());
//! ```

#![deny(unsafe_code)]

mod config;
mod report;
mod route;

#[cfg(feature = "http")]
mod http_uri;

pub use crate::config::{AnalyzerTokens, DuplicateParams, MatcherConfig, TrailingSlash};
pub use crate::report::{NoopReporter, TracingReporter, WarningReporter};
pub use crate::route::{
    Matcher, ParamToken, Result, RouteAnalysis, RouteError, RouteParams, Segment, GLOB_KEY,
    PARAM_TOKENS, PARAM_TOKEN_NEW, PARAM_TOKEN_OLD,
};

#[cfg(feature = "http")]
pub use crate::http_uri::resolve_uri;

use once_cell::sync::Lazy;

static DEFAULT_MATCHER: Lazy<Matcher> = Lazy::new(Matcher::new);

/// Matches `pathname` against `route` with the default configuration.
///
/// Deprecation warnings are logged through `tracing`, once per distinct message
/// for the lifetime of the process.
pub fn resolve_route_string<'a>(
    route: &'a str,
    pathname: &'a str,
) -> Result<Option<RouteParams<'a>>> {
    DEFAULT_MATCHER.resolve(route, pathname)
}

/// Whether `route` captures no parameters; an invalid route string is an error.
pub fn is_static_route_string(route: &str) -> Result<bool> {
    DEFAULT_MATCHER.is_static(route)
}

/// Counts the static and parameter segments of `route` without validating it.
pub fn analyze_route_string(route: &str) -> RouteAnalysis {
    DEFAULT_MATCHER.analyze(route)
}
