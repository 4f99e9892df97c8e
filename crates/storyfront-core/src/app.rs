//! Application bootstrap.
//!
//! [`App`] collects plugins and component registrations, and [`App::mount`]
//! consumes it, so an application can only be mounted once. The CMS plugin
//! must be installed before mounting because mounting triggers the first
//! render, and views fetch content during it.

use std::fmt;

use crate::{
    config::CmsConfig,
    error::{CoreError, Result},
    registry::ComponentRegistry,
    routes::RouteTable,
    story::Blok,
};

/// One step of the startup sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupStep {
    RouterInstalled,
    CmsInstalled,
    ComponentRegistered(String),
    Mounted(String),
}

/// Parsed `#id` mount selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountAnchor {
    id: String,
}

impl MountAnchor {
    /// Parse a `#id` selector.
    pub fn parse(selector: &str) -> Result<Self> {
        match selector.trim().strip_prefix('#') {
            Some(id) if !id.is_empty() && !id.contains(char::is_whitespace) => Ok(Self {
                id: id.to_string(),
            }),
            _ => Err(CoreError::InvalidAnchor(selector.to_string())),
        }
    }

    /// Element id without the leading `#`.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for MountAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id)
    }
}

/// Application under construction.
pub struct App<V> {
    root: String,
    router: Option<RouteTable>,
    cms: Option<CmsConfig>,
    registry: ComponentRegistry<V>,
    startup: Vec<StartupStep>,
}

impl<V> App<V> {
    /// Create an application bound to a root component.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            router: None,
            cms: None,
            registry: ComponentRegistry::new(),
            startup: Vec::new(),
        }
    }

    /// Install the client-side router.
    pub fn use_router(mut self, routes: RouteTable) -> Self {
        tracing::debug!(routes = routes.routes().len(), "Installing router");
        self.router = Some(routes);
        self.startup.push(StartupStep::RouterInstalled);
        self
    }

    /// Install the CMS plugin.
    pub fn use_cms(mut self, config: CmsConfig) -> Self {
        tracing::debug!(cms = ?config, "Installing CMS plugin");
        self.cms = Some(config);
        self.startup.push(StartupStep::CmsInstalled);
        self
    }

    /// Register a named component.
    pub fn component<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(Blok) -> V + Send + Sync + 'static,
    {
        let name = name.into();
        self.registry.register(name.clone(), factory);
        self.startup.push(StartupStep::ComponentRegistered(name));
        self
    }

    /// Mount the application at `anchor`.
    pub fn mount(mut self, anchor: &str) -> Result<MountedApp<V>> {
        let anchor = MountAnchor::parse(anchor)?;
        let cms = self.cms.ok_or(CoreError::CmsNotInstalled)?;

        self.startup.push(StartupStep::Mounted(anchor.to_string()));
        tracing::info!(
            root = %self.root,
            %anchor,
            routing = self.router.is_some(),
            components = ?self.registry.names(),
            "Mounting application"
        );

        Ok(MountedApp {
            root: self.root,
            anchor,
            router: self.router,
            cms,
            registry: self.registry,
            startup: self.startup,
        })
    }
}

/// A mounted application. Owned by the entry point for the life of the page.
pub struct MountedApp<V> {
    root: String,
    anchor: MountAnchor,
    router: Option<RouteTable>,
    cms: CmsConfig,
    registry: ComponentRegistry<V>,
    startup: Vec<StartupStep>,
}

impl<V> MountedApp<V> {
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn anchor(&self) -> &MountAnchor {
        &self.anchor
    }

    /// Route table, if the router was installed.
    pub fn router(&self) -> Option<&RouteTable> {
        self.router.as_ref()
    }

    pub fn cms(&self) -> &CmsConfig {
        &self.cms
    }

    pub fn registry(&self) -> &ComponentRegistry<V> {
        &self.registry
    }

    /// Startup steps in the order they happened.
    pub fn startup_sequence(&self) -> &[StartupStep] {
        &self.startup
    }

    /// Split into the parts the view layer needs.
    pub fn into_parts(self) -> (Option<RouteTable>, CmsConfig, ComponentRegistry<V>) {
        (self.router, self.cms, self.registry)
    }
}

impl<V> fmt::Debug for MountedApp<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountedApp")
            .field("root", &self.root)
            .field("anchor", &self.anchor)
            .field("router", &self.router)
            .field("cms", &self.cms)
            .field("registry", &self.registry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Region;

    fn position(steps: &[StartupStep], step: &StartupStep) -> usize {
        steps.iter().position(|s| s == step).expect("step present")
    }

    #[test]
    fn test_mount_records_sequence() {
        let mounted = App::<String>::new("App")
            .use_router(RouteTable::default())
            .use_cms(CmsConfig::new("token", Region::Us))
            .component("Grid", |b| b.component)
            .mount("#app")
            .expect("mount");

        assert_eq!(
            mounted.startup_sequence(),
            &[
                StartupStep::RouterInstalled,
                StartupStep::CmsInstalled,
                StartupStep::ComponentRegistered("Grid".into()),
                StartupStep::Mounted("#app".into()),
            ]
        );
        assert_eq!(mounted.anchor().id(), "app");
        assert!(mounted.router().is_some());
    }

    #[test]
    fn test_mount_without_cms_fails() {
        let err = App::<String>::new("App").mount("#app").unwrap_err();
        assert!(matches!(err, CoreError::CmsNotInstalled));
    }

    #[test]
    fn test_mount_without_router() {
        let mounted = App::<String>::new("App")
            .use_cms(CmsConfig::default())
            .mount("#app")
            .expect("mount");
        assert!(mounted.router().is_none());

        let steps = mounted.startup_sequence();
        assert!(
            position(steps, &StartupStep::CmsInstalled)
                < position(steps, &StartupStep::Mounted("#app".into()))
        );
    }

    #[test]
    fn test_empty_token_still_mounts() {
        let mounted = App::<String>::new("App")
            .use_cms(CmsConfig::new("", Region::Us))
            .mount("#app");
        assert!(mounted.is_ok());
    }

    #[test]
    fn test_anchor_parsing() {
        assert_eq!(MountAnchor::parse("#app").expect("parse").id(), "app");
        assert_eq!(MountAnchor::parse(" #root ").expect("parse").to_string(), "#root");
        assert!(MountAnchor::parse("app").is_err());
        assert!(MountAnchor::parse("#").is_err());
        assert!(MountAnchor::parse("#a b").is_err());
    }
}
