//! Matcher configuration.

/// What to do when a route string names the same parameter twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateParams {
    /// The later capture replaces the earlier value, keeping its position.
    Overwrite,
    /// Resolving fails with [`RouteError::DuplicateParam`](crate::RouteError::DuplicateParam).
    Reject,
}

impl Default for DuplicateParams {
    fn default() -> Self {
        Self::Overwrite
    }
}

/// Which prefix tokens [`analyze`](crate::Matcher::analyze) counts as parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerTokens {
    /// Both `@` and `:`.
    All,
    /// Only the deprecated `:`; `@name` segments are counted as static.
    Legacy,
}

impl Default for AnalyzerTokens {
    fn default() -> Self {
        Self::All
    }
}

/// How a segment missing on one side compares with an empty segment on the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingSlash {
    /// A missing segment compares equal to an empty one, so `/a/b` matches `/a/b/`.
    Lenient,
    /// Both sides must have the segment, so `/a/b` does not match `/a/b/`.
    Strict,
}

impl Default for TrailingSlash {
    fn default() -> Self {
        Self::Lenient
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatcherConfig {
    pub duplicate_params: DuplicateParams,
    pub analyzer_tokens: AnalyzerTokens,
    pub trailing_slash: TrailingSlash,
}

impl MatcherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicate_params(mut self, policy: DuplicateParams) -> Self {
        self.duplicate_params = policy;
        self
    }

    pub fn with_analyzer_tokens(mut self, tokens: AnalyzerTokens) -> Self {
        self.analyzer_tokens = tokens;
        self
    }

    pub fn with_trailing_slash(mut self, mode: TrailingSlash) -> Self {
        self.trailing_slash = mode;
        self
    }
}
