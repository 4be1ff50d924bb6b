#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error(
        "invalid route string `{route}`{}: route strings should start with a leading slash `/` (or be `*`)",
        empty_note(.route)
    )]
    MissingLeadingSlash { route: String },

    #[error(
        "invalid route string `{route}`: route strings are not allowed to contain more than one glob character `*`"
    )]
    TooManyGlobs { route: String },

    #[error(
        "invalid route string `{route}`: make sure your route string ends with the glob character `*`"
    )]
    MisplacedGlob { route: String },

    #[error("invalid url pathname `{pathname}`: url pathnames must start with a leading slash `/`")]
    InvalidPathname { pathname: String },

    #[error("invalid route string `{route}`: parameter `{name}` is defined more than once")]
    DuplicateParam { route: String, name: String },
}

pub type Result<T> = std::result::Result<T, RouteError>;

fn empty_note(route: &str) -> &'static str {
    if route.is_empty() {
        " (empty string)"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::RouteError;

    #[test]
    fn empty_route_is_called_out() {
        let err = RouteError::MissingLeadingSlash {
            route: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "invalid route string `` (empty string): route strings should start with a leading slash `/` (or be `*`)"
        );

        let err = RouteError::MissingLeadingSlash {
            route: "user".into(),
        };
        assert!(err.to_string().starts_with("invalid route string `user`: "));
    }
}
