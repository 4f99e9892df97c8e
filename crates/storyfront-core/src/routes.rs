//! Route table with a catch-all rule.
//!
//! Every valid table contains exactly one catch-all pattern bound to the same
//! view as the root pattern, so resolution never fails and there is no
//! client-side "not found" state. Whether a path names real content is
//! decided later by the view, which looks the derived slug up in the CMS.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Name of the single page view.
pub const HOME_VIEW: &str = "Home";

/// Slug requested for the root path.
pub const ROOT_SLUG: &str = "home";

/// Path pattern of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathPattern {
    /// `/`
    Root,
    /// A fixed path such as `/about`.
    Static(String),
    /// `/*`, any path at any depth.
    CatchAll,
}

/// A `(pattern, view)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDef {
    pub pattern: PathPattern,
    pub view: String,
}

/// Result of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// View that handles the path.
    pub view: String,
    /// Path with query, fragment and redundant slashes removed.
    pub path: String,
    /// CMS slug derived from the path.
    pub slug: String,
}

/// Ordered route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDef>,
}

impl PathPattern {
    /// Pattern string as written in a router.
    pub fn as_path(&self) -> String {
        match self {
            PathPattern::Root => "/".to_string(),
            PathPattern::Static(path) => format!("/{}", path.trim_matches('/')),
            PathPattern::CatchAll => "/*".to_string(),
        }
    }

    /// Whether the pattern matches exactly `/`.
    fn is_root(&self) -> bool {
        !matches!(self, PathPattern::CatchAll) && self.matches("/")
    }

    fn matches(&self, normalized: &str) -> bool {
        match self {
            PathPattern::Root => normalized == "/",
            PathPattern::Static(path) => normalize_path(path) == normalized,
            PathPattern::CatchAll => true,
        }
    }
}

impl RouteDef {
    pub fn new(pattern: PathPattern, view: impl Into<String>) -> Self {
        Self {
            pattern,
            view: view.into(),
        }
    }
}

impl RouteTable {
    /// Build a table, rejecting tables that break the catch-all invariant.
    pub fn new(routes: Vec<RouteDef>) -> Result<Self> {
        let catch_alls: Vec<&RouteDef> = routes
            .iter()
            .filter(|r| r.pattern == PathPattern::CatchAll)
            .collect();

        let catch_all = match catch_alls.as_slice() {
            [single] => *single,
            [] => return Err(CoreError::route_table("missing catch-all route")),
            _ => {
                return Err(CoreError::route_table(format!(
                    "expected one catch-all route, found {}",
                    catch_alls.len()
                )));
            }
        };

        let roots: Vec<&RouteDef> = routes.iter().filter(|r| r.pattern.is_root()).collect();
        let root = match roots.as_slice() {
            [single] => *single,
            [] => return Err(CoreError::route_table("missing root route")),
            _ => {
                return Err(CoreError::route_table(format!(
                    "expected one root route, found {}",
                    roots.len()
                )));
            }
        };

        if root.view != catch_all.view {
            return Err(CoreError::route_table(format!(
                "catch-all view `{}` differs from root view `{}`",
                catch_all.view, root.view
            )));
        }

        if routes.last().map(|r| &r.pattern) != Some(&PathPattern::CatchAll) {
            tracing::warn!("routes after the catch-all route are unreachable");
        }

        Ok(Self { routes })
    }

    /// Table binding both `/` and `/*` to `view`.
    pub fn catch_all(view: impl Into<String>) -> Self {
        let view = view.into();
        Self {
            routes: vec![
                RouteDef::new(PathPattern::Root, view.clone()),
                RouteDef::new(PathPattern::CatchAll, view),
            ],
        }
    }

    /// Routes in match order.
    pub fn routes(&self) -> &[RouteDef] {
        &self.routes
    }

    /// Resolve a path to its view and slug.
    pub fn resolve(&self, path: &str) -> Resolution {
        let normalized = normalize_path(path);
        let view = self
            .routes
            .iter()
            .find(|r| r.pattern.matches(&normalized))
            .map(|r| r.view.clone())
            // construction guarantees a catch-all
            .unwrap_or_else(|| HOME_VIEW.to_string());

        tracing::trace!(path, %normalized, %view, "Resolved route");

        Resolution {
            view,
            slug: slug_for_path(&normalized),
            path: normalized,
        }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::catch_all(HOME_VIEW)
    }
}

/// Strip query and fragment, collapse slashes, and ensure a leading slash.
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let segments: Vec<&str> = path[..end].split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// CMS slug for a path; the root path maps to [`ROOT_SLUG`].
pub fn slug_for_path(path: &str) -> String {
    let normalized = normalize_path(path);
    let slug = normalized.trim_start_matches('/');
    if slug.is_empty() {
        ROOT_SLUG.to_string()
    } else {
        slug.to_string()
    }
}
