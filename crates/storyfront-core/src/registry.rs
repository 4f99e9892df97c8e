//! Named component registry.
//!
//! CMS authors reference components by name. The registry maps those names to
//! factories that turn a [`Blok`] into a renderable value `V`; the UI layer
//! instantiates it with its view type.

use std::{collections::HashMap, fmt, sync::Arc};

use crate::{
    error::{CoreError, Result},
    story::Blok,
};

/// Factory producing a renderable from a content block.
pub type Factory<V> = Arc<dyn Fn(Blok) -> V + Send + Sync>;

/// Registry of named component factories.
pub struct ComponentRegistry<V> {
    components: HashMap<String, Factory<V>>,
}

impl<V> ComponentRegistry<V> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
        }
    }

    /// Register a factory under `name`.
    ///
    /// An existing registration with the same name is replaced. Returns `true`
    /// if one was replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> bool
    where
        F: Fn(Blok) -> V + Send + Sync + 'static,
    {
        let name = name.into();
        let replaced = self
            .components
            .insert(name.clone(), Arc::new(factory))
            .is_some();
        if replaced {
            tracing::debug!(%name, "Component re-registered, last registration wins");
        }
        replaced
    }

    /// Look up a factory by exact name, then by its PascalCase form.
    pub fn get(&self, name: &str) -> Result<&Factory<V>> {
        self.components
            .get(name)
            .or_else(|| self.components.get(&pascal_case(name)))
            .ok_or_else(|| CoreError::unknown_component(name))
    }

    /// Render a block with the component it names.
    pub fn render(&self, blok: Blok) -> Result<V> {
        let factory = self.get(&blok.component)?;
        Ok(factory(blok))
    }

    /// Check whether a name resolves.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.components.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl<V> Default for ComponentRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for ComponentRegistry<V> {
    fn clone(&self) -> Self {
        Self {
            components: self.components.clone(),
        }
    }
}

impl<V> fmt::Debug for ComponentRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("components", &self.names())
            .finish()
    }
}

/// `hero-section` -> `HeroSection`, `grid` -> `Grid`.
pub fn pascal_case(name: &str) -> String {
    name.split(['-', '_', ' '])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ComponentRegistry<String> {
        let mut registry = ComponentRegistry::new();
        registry.register("Grid", |b: Blok| format!("grid:{}", b.uid));
        registry.register("Teaser", |b: Blok| {
            format!("teaser:{}", b.text("headline").unwrap_or_default())
        });
        registry
    }

    #[test]
    fn test_render_by_content_name() {
        let registry = registry();
        let blok = Blok::new("grid", "g1");
        assert_eq!(registry.render(blok).expect("render"), "grid:g1");

        let blok = Blok::new("Teaser", "t1").with_field("headline", "Hi");
        assert_eq!(registry.render(blok).expect("render"), "teaser:Hi");
    }

    #[test]
    fn test_unknown_component() {
        let registry = registry();
        let err = registry.render(Blok::new("carousel", "c1")).unwrap_err();
        assert!(matches!(err, CoreError::UnknownComponent { ref name } if name == "carousel"));
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = registry();
        assert!(registry.register("Grid", |_| "replacement".to_string()));
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.render(Blok::new("grid", "g1")).expect("render"),
            "replacement"
        );
    }

    #[test]
    fn test_names_sorted() {
        let registry = registry();
        assert_eq!(registry.names(), vec!["Grid", "Teaser"]);
        assert!(registry.contains("grid"));
        assert!(!registry.contains("page"));
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("grid"), "Grid");
        assert_eq!(pascal_case("hero-section"), "HeroSection");
        assert_eq!(pascal_case("call_to_action"), "CallToAction");
        assert_eq!(pascal_case("Feature"), "Feature");
        assert_eq!(pascal_case(""), "");
    }
}
