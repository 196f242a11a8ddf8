use std::fmt;

/// Normalized pathname of the current URL.
///
/// Query string and fragment are dropped and the path always starts with `/`.
/// Empty segments (`//`, trailing `/`) are kept in [`Location::path`] but
/// ignored by [`Location::segments`], so they don't affect route matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    path: String,
}

impl Location {
    pub fn new(url_path: &str) -> Self {
        let end = url_path.find(['?', '#']).unwrap_or(url_path.len());
        let path = &url_path[..end];
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        Self { path }
    }

    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|segment| !segment.is_empty())
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl From<&str> for Location {
    fn from(url_path: &str) -> Self {
        Self::new(url_path)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_and_fragment_are_dropped() {
        assert_eq!(Location::new("/?token=abc").path(), "/");
        assert_eq!(Location::new("/a#top").path(), "/a");
        assert_eq!(Location::new("/a?x=1#top").path(), "/a");
    }

    #[test]
    fn test_empty_and_relative_paths() {
        assert_eq!(Location::new(""), Location::root());
        assert_eq!(Location::new("a/b").path(), "/a/b");
        assert_eq!(Location::new("?x").path(), "/");
    }

    #[test]
    fn test_segments_skip_empty_parts() {
        let location = Location::new("//a/b/");
        assert_eq!(location.segments().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(Location::root().segments().count(), 0);
    }
}
