//! Route classification.
//!
//! Every navigable path maps to exactly one access class via longest-prefix
//! match over a static table. Paths no rule covers are `Protected`, so a
//! route added to the application without a table entry is gated, not
//! exposed.

/// Access class of a route subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteClass {
    /// Reachable without authentication (login page, auth callback).
    Public,
    /// Requires an authenticated viewer of any role.
    Protected,
    /// Requires an authenticated viewer with an admin-tier role.
    AdminOnly,
}

impl RouteClass {
    /// Returns the class name for logging.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::AdminOnly => "admin-only",
        }
    }
}

/// A single prefix-to-class rule.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RouteRule {
    prefix: String,
    class: RouteClass,
}

impl RouteRule {
    /// A rule matches whole path segments: `/users` covers `/users` and
    /// `/users/42` but not `/username`. The bare `/` covers only itself.
    fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

/// Static route classification table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    /// Creates an empty table (every path classifies as `Protected`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a prefix rule.
    #[must_use]
    pub fn with_rule(mut self, prefix: impl Into<String>, class: RouteClass) -> Self {
        self.rules.push(RouteRule {
            prefix: prefix.into(),
            class,
        });
        self
    }

    /// Classifies a path by longest matching prefix.
    ///
    /// Unmatched paths default to `Protected`.
    #[must_use]
    pub fn classify(&self, path: &str) -> RouteClass {
        self.rules
            .iter()
            .filter(|rule| rule.matches(path))
            .max_by_key(|rule| rule.prefix.len())
            .map_or(RouteClass::Protected, |rule| rule.class)
    }

    /// The classification table for the Historia CMS sections.
    #[must_use]
    pub fn historia() -> Self {
        Self::new()
            .with_rule("/", RouteClass::Public)
            .with_rule("/auth", RouteClass::Public)
            .with_rule("/dashboard", RouteClass::Protected)
            .with_rule("/objects", RouteClass::Protected)
            .with_rule("/media", RouteClass::Protected)
            .with_rule("/categories", RouteClass::Protected)
            .with_rule("/materials", RouteClass::Protected)
            .with_rule("/tags", RouteClass::Protected)
            .with_rule("/locations", RouteClass::Protected)
            .with_rule("/menus", RouteClass::Protected)
            .with_rule("/change-requests", RouteClass::Protected)
            .with_rule("/users", RouteClass::Protected)
            .with_rule("/user-management", RouteClass::AdminOnly)
            .with_rule("/groups", RouteClass::AdminOnly)
            .with_rule("/audit-log", RouteClass::AdminOnly)
    }
}
