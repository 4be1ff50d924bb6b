use super::GLOB_KEY;

use std::collections::HashMap;
use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Parameters captured by a successful match, in route order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams<'a> {
    buf: SmallVec<[(&'a str, &'a str); 8]>,
}

impl<'a> RouteParams<'a> {
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.buf
            .iter()
            .find_map(|&(k, v)| if name == k { Some(v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    /// The remainder captured by a trailing `*`.
    pub fn glob(&self) -> Option<&'a str> {
        self.get(GLOB_KEY)
    }

    pub fn to_map(&self) -> HashMap<String, String> {
        self.buf
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }
}

impl<'a> Deref for RouteParams<'a> {
    type Target = [(&'a str, &'a str)];
    fn deref(&self) -> &Self::Target {
        &*self.buf
    }
}

impl<'a> IntoIterator for RouteParams<'a> {
    type Item = (&'a str, &'a str);
    type IntoIter = smallvec::IntoIter<[(&'a str, &'a str); 8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<'a> RouteParams<'a> {
    pub(super) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    /// Inserts a capture. A repeated name keeps its first position and takes the new value.
    pub(super) fn insert(&mut self, name: &'a str, value: &'a str) {
        match self.buf.iter_mut().find(|slot| slot.0 == name) {
            Some(slot) => slot.1 = value,
            None => self.buf.push((name, value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RouteParams;

    #[test]
    fn insert_overwrites_in_place() {
        let mut params = RouteParams::new();
        params.insert("id", "1");
        params.insert("name", "asd");
        params.insert("id", "2");

        assert_eq!(&*params, &[("id", "2"), ("name", "asd")]);
        assert_eq!(params.parse::<u32>("id"), Some(Ok(2)));
        assert!(params.parse::<u32>("name").unwrap().is_err());
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn glob_and_map() {
        let mut params = RouteParams::new();
        assert!(params.glob().is_none());
        params.insert("*", "b/c");

        assert_eq!(params.glob(), Some("b/c"));
        assert_eq!(params.to_map().get("*").map(String::as_str), Some("b/c"));
    }

    #[test]
    fn into_iter_keeps_route_order() {
        let mut params = RouteParams::new();
        params.insert("uid", "asd");
        params.insert("*", "x/y");

        let pairs: Vec<(&str, &str)> = params.into_iter().collect();
        assert_eq!(pairs, vec![("uid", "asd"), ("*", "x/y")]);
    }
}
