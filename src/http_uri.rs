#![forbid(unsafe_code)]

use crate::route::{Result, RouteParams};

use http::Uri;

/// Matches the path component of `uri` against `route`.
///
/// The path is used as-is; percent-decoding is left to the caller.
pub fn resolve_uri<'a>(route: &'a str, uri: &'a Uri) -> Result<Option<RouteParams<'a>>> {
    crate::resolve_route_string(route, uri.path())
}
