mod analysis;
mod core;
mod error;
mod params;
mod segment;

pub use self::analysis::RouteAnalysis;
pub use self::error::{Result, RouteError};
pub use self::params::RouteParams;
pub use self::segment::{ParamToken, Segment};

use crate::config::MatcherConfig;
use crate::report::{TracingReporter, WarningReporter};

/// Current parameter prefix.
pub const PARAM_TOKEN_NEW: char = '@';
/// Deprecated parameter prefix.
pub const PARAM_TOKEN_OLD: char = ':';
/// Every recognized parameter prefix, current first.
pub const PARAM_TOKENS: [char; 2] = [PARAM_TOKEN_NEW, PARAM_TOKEN_OLD];
/// Key under which a trailing glob stores its capture.
pub const GLOB_KEY: &str = "*";

const GLOB: &str = "*";
const GLOB_CHAR: char = '*';
const SLASH: char = '/';

/// Resolves route strings against URL pathnames.
///
/// The free functions [`resolve_route_string`](crate::resolve_route_string),
/// [`is_static_route_string`](crate::is_static_route_string) and
/// [`analyze_route_string`](crate::analyze_route_string) share a default matcher.
#[derive(Debug, Default)]
pub struct Matcher<R = TracingReporter> {
    config: MatcherConfig,
    reporter: R,
}

impl Matcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MatcherConfig) -> Self {
        Self {
            config,
            reporter: TracingReporter::new(),
        }
    }
}

impl<R: WarningReporter> Matcher<R> {
    pub fn with_reporter(config: MatcherConfig, reporter: R) -> Self {
        Self { config, reporter }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Matches `pathname` against `route`.
    ///
    /// Returns `Ok(None)` when the pathname does not match, and an error when
    /// `route` is not a valid route string or `pathname` lacks its leading slash.
    pub fn resolve<'a>(
        &self,
        route: &'a str,
        pathname: &'a str,
    ) -> Result<Option<RouteParams<'a>>> {
        self.real_resolve(route, pathname)
    }

    /// Whether `route` captures nothing when matched against itself.
    pub fn is_static(&self, route: &str) -> Result<bool> {
        let pathname = self::core::normalize(route);
        let ret = self.real_resolve(route, pathname)?;
        Ok(ret.map_or(false, |params| params.is_empty()))
    }

    pub fn analyze(&self, route: &str) -> RouteAnalysis {
        RouteAnalysis::compute(route, self.config.analyzer_tokens)
    }
}
