use std::error::Error;
use std::fmt;

/// A path pattern that can't be used in a [`RouteTable`](crate::RouteTable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// `*` appears somewhere other than the last segment.
    SplatNotLast { pattern: String },
    /// A `:` segment without a name.
    EmptyParamName { pattern: String },
    DuplicateParam { pattern: String, name: String },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SplatNotLast { pattern } => {
                write!(f, "route pattern '{pattern}': '*' must be the last segment")
            }
            Self::EmptyParamName { pattern } => {
                write!(f, "route pattern '{pattern}': parameter name is empty")
            }
            Self::DuplicateParam { pattern, name } => {
                write!(f, "route pattern '{pattern}': parameter ':{name}' is declared twice")
            }
        }
    }
}

impl Error for RouteError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// Navigation targets have to start with `/`.
    RelativePath(String),
    /// `//host/...` leaves the current origin.
    ProtocolRelative(String),
    /// The browser History API rejected the call.
    History(String),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RelativePath(path) => {
                write!(f, "cannot navigate to '{path}': path has to start with '/'")
            }
            Self::ProtocolRelative(path) => {
                write!(f, "cannot navigate to '{path}': path points to another origin")
            }
            Self::History(message) => write!(f, "history API call failed: {message}"),
        }
    }
}

impl Error for NavigationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_error_names_pattern() {
        let error = RouteError::SplatNotLast {
            pattern: "/*/a".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "route pattern '/*/a': '*' must be the last segment"
        );
    }

    #[test]
    fn test_navigation_error_display() {
        let error = NavigationError::RelativePath("tokens".to_string());
        assert!(error.to_string().contains("'tokens'"));
    }
}
