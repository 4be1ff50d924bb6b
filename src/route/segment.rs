use super::{GLOB, PARAM_TOKEN_NEW, PARAM_TOKEN_OLD};

/// Prefix token of a parameter segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamToken {
    /// `@name`
    New,
    /// `:name`, deprecated
    Old,
}

impl ParamToken {
    pub fn as_char(self) -> char {
        match self {
            Self::New => PARAM_TOKEN_NEW,
            Self::Old => PARAM_TOKEN_OLD,
        }
    }

    fn strip(part: &str) -> Option<(Self, &str)> {
        if let Some(name) = part.strip_prefix(PARAM_TOKEN_NEW) {
            return Some((Self::New, name));
        }
        part.strip_prefix(PARAM_TOKEN_OLD).map(|name| (Self::Old, name))
    }
}

/// One `/`-separated piece of a route string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Static(&'a str),
    Param { name: &'a str, token: ParamToken },
    Glob,
}

impl<'a> Segment<'a> {
    /// Classifies a route segment.
    ///
    /// Only a segment that is exactly `*` is a glob; `a*` is static.
    /// A lone `@` is a parameter with an empty name.
    pub fn classify(part: &'a str) -> Self {
        if part == GLOB {
            return Self::Glob;
        }
        match ParamToken::strip(part) {
            Some((token, name)) => Self::Param { name, token },
            None => Self::Static(part),
        }
    }

    pub fn is_param(&self) -> bool {
        matches!(self, Self::Param { .. })
    }
}
