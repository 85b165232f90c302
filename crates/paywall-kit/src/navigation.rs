use std::fmt::Display;

/// An application route path, e.g. `"/admin"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route(pub String);

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Route {
    fn from(s: String) -> Self {
        Route(s)
    }
}

impl From<&str> for Route {
    fn from(s: &str) -> Self {
        Route(s.to_string())
    }
}

impl AsRef<str> for Route {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Navigation seam screens redirect through.
///
/// Implementations map this onto whatever routing the host application
/// uses. Navigation is fire-and-forget from the screen's point of view.
pub trait Navigator {
    fn navigate(&self, route: &Route);
}
