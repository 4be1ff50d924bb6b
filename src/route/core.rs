use super::error::{Result, RouteError};
use super::params::RouteParams;
use super::segment::{ParamToken, Segment};
use super::{Matcher, GLOB, GLOB_CHAR, GLOB_KEY, SLASH};

use crate::config::{DuplicateParams, TrailingSlash};
use crate::report::WarningReporter;

use smallvec::SmallVec;

type Parts<'a> = SmallVec<[&'a str; 8]>;

impl<R: WarningReporter> Matcher<R> {
    pub(super) fn real_resolve<'a>(
        &self,
        route: &'a str,
        pathname: &'a str,
    ) -> Result<Option<RouteParams<'a>>> {
        check_route(route)?;
        if self.config.duplicate_params == DuplicateParams::Reject {
            check_params(route)?;
        }
        if !pathname.starts_with(SLASH) {
            return Err(RouteError::InvalidPathname {
                pathname: pathname.to_owned(),
            });
        }

        let route = normalize(route);

        let route_parts: Parts<'a> = route.split(SLASH).collect();
        let url_parts: Parts<'a> = pathname.split(SLASH).collect();

        let mut params = RouteParams::new();

        for i in 0..route_parts.len().max(url_parts.len()) {
            let route_part = part_at(&route_parts, i);
            let url_part = part_at(&url_parts, i);

            match Segment::classify(route_part) {
                Segment::Glob => {
                    params.insert(GLOB_KEY, tail(pathname, &url_parts, i.max(1)));
                    return Ok(Some(params));
                }
                Segment::Param { name, token } => {
                    if token == ParamToken::Old {
                        self.reporter.warn_once(&outdated_message(route));
                    }
                    if url_part.is_empty() {
                        tracing::trace!(
                            route,
                            pathname,
                            param = name,
                            "missing path segment for parameter"
                        );
                        return Ok(None);
                    }
                    params.insert(name, url_part);
                }
                Segment::Static(expected) => {
                    let missing_one_side = (i >= route_parts.len()) != (i >= url_parts.len());
                    if self.config.trailing_slash == TrailingSlash::Strict && missing_one_side {
                        tracing::trace!(route, pathname, index = i, "segment count mismatch");
                        return Ok(None);
                    }
                    if expected != url_part {
                        tracing::trace!(route, pathname, index = i, "static segment mismatch");
                        return Ok(None);
                    }
                }
            }
        }

        Ok(Some(params))
    }
}

/// Validates the leading slash and the glob placement of a route string.
pub(super) fn check_route(route: &str) -> Result<()> {
    if route != GLOB && !route.starts_with(SLASH) {
        return Err(RouteError::MissingLeadingSlash {
            route: route.to_owned(),
        });
    }

    match route.matches(GLOB_CHAR).count() {
        0 => Ok(()),
        1 if route.ends_with(GLOB_CHAR) => Ok(()),
        1 => Err(RouteError::MisplacedGlob {
            route: route.to_owned(),
        }),
        _ => Err(RouteError::TooManyGlobs {
            route: route.to_owned(),
        }),
    }
}

/// Rejects a route string that names the same parameter twice.
pub(super) fn check_params(route: &str) -> Result<()> {
    let mut names: SmallVec<[&str; 8]> = SmallVec::new();
    for part in route.split(SLASH) {
        if let Segment::Param { name, .. } = Segment::classify(part) {
            if names.contains(&name) {
                return Err(RouteError::DuplicateParam {
                    route: route.to_owned(),
                    name: name.to_owned(),
                });
            }
            names.push(name);
        }
    }
    Ok(())
}

/// `*` is shorthand for `/*`.
pub(super) fn normalize(route: &str) -> &str {
    if route == GLOB {
        "/*"
    } else {
        route
    }
}

#[inline]
fn part_at<'a>(parts: &[&'a str], i: usize) -> &'a str {
    parts.get(i).copied().unwrap_or("")
}

/// Returns `parts[from..].join("/")` as a slice of `src`.
///
/// `parts` must be the result of splitting `src` on `/`.
fn tail<'a>(src: &'a str, parts: &[&'a str], from: usize) -> &'a str {
    if from >= parts.len() {
        return "";
    }
    let offset: usize = parts[..from].iter().map(|p| p.len() + 1).sum();
    src.get(offset..).unwrap_or("")
}

fn outdated_message(route: &str) -> String {
    let mut buf = [0; 4];
    let new_token: &str = ParamToken::New.as_char().encode_utf8(&mut buf);
    format!(
        "Outdated route string `{}`, use `{}` instead.",
        route,
        route.replace(ParamToken::Old.as_char(), new_token)
    )
}
