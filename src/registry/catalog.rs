//! Name-indexed component registry.

use super::descriptor::ComponentDescriptor;
use crate::error::{AutoconfigError, Result};
use std::collections::HashMap;
use tracing::debug;

/// Types that describe their own autoconfiguration constructors.
///
/// Implementing this lets a type be registered with
/// [`ComponentRegistry::register_type`] from a declarative list.
pub trait Autoconfigurable: 'static {
    fn descriptor() -> ComponentDescriptor;
}

/// Component name → descriptor.
///
/// Populated at startup, then shared read-only by any number of concurrent
/// parses; lookups take `&self` and never mutate.
///
/// # Examples
///
/// ```
/// use u_autoconfig::registry::{ComponentDescriptor, ComponentRegistry, ConstructorSpec};
///
/// struct Greedy;
///
/// let mut registry = ComponentRegistry::new();
/// registry
///     .register(
///         ComponentDescriptor::new::<Greedy>("GreedyConstructor")
///             .with_constructor(ConstructorSpec::new(vec![], |_args| Ok(Greedy))),
///     )
///     .unwrap();
/// assert!(registry.resolve("GreedyConstructor").is_ok());
/// assert!(registry.resolve("greedyconstructor").is_err());
/// ```
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    components: HashMap<String, ComponentDescriptor>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a descriptor under its name.
    ///
    /// Re-registering the same implementation type under the same name is a
    /// no-op; a different implementation type fails with
    /// [`AutoconfigError::DuplicateComponentName`].
    pub fn register(&mut self, descriptor: ComponentDescriptor) -> Result<()> {
        descriptor.validate()?;

        if let Some(existing) = self.components.get(descriptor.name()) {
            if existing.implementation_type() == descriptor.implementation_type() {
                debug!(component = descriptor.name(), "component already registered");
                return Ok(());
            }
            return Err(AutoconfigError::DuplicateComponentName {
                name: descriptor.name().to_string(),
                existing: existing.implementation_type().name(),
                rejected: descriptor.implementation_type().name(),
            });
        }

        debug!(
            component = descriptor.name(),
            implementation = descriptor.implementation_type().name(),
            constructors = descriptor.constructors().len(),
            "registered component"
        );
        self.components
            .insert(descriptor.name().to_string(), descriptor);
        Ok(())
    }

    /// Registers a type through its [`Autoconfigurable`] descriptor.
    pub fn register_type<T: Autoconfigurable>(&mut self) -> Result<()> {
        self.register(T::descriptor())
    }

    /// Looks up a descriptor by exact, case-sensitive name.
    pub fn resolve(&self, name: &str) -> Result<&ComponentDescriptor> {
        self.components
            .get(name)
            .ok_or_else(|| AutoconfigError::ComponentNotFound {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.components.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ConstructorSpec, ParameterSpec};

    struct First;
    struct Second;

    impl Autoconfigurable for First {
        fn descriptor() -> ComponentDescriptor {
            ComponentDescriptor::new::<First>("X").with_constructor(ConstructorSpec::new(
                vec![ParameterSpec::int("a")],
                |_args| Ok(First),
            ))
        }
    }

    impl Autoconfigurable for Second {
        fn descriptor() -> ComponentDescriptor {
            ComponentDescriptor::new::<Second>("X")
                .with_constructor(ConstructorSpec::new(vec![], |_args| Ok(Second)))
        }
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = ComponentRegistry::new();
        assert!(matches!(
            registry.resolve("Unknown"),
            Err(AutoconfigError::ComponentNotFound { name }) if name == "Unknown"
        ));
    }

    #[test]
    fn test_register_then_resolve() {
        let mut registry = ComponentRegistry::new();
        registry.register_type::<First>().unwrap();
        let descriptor = registry.resolve("X").unwrap();
        assert_eq!(descriptor.name(), "X");
        assert_eq!(descriptor.constructors().len(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_name_distinct_types() {
        let mut registry = ComponentRegistry::new();
        registry.register_type::<First>().unwrap();
        let err = registry.register_type::<Second>().unwrap_err();
        assert!(matches!(err, AutoconfigError::DuplicateComponentName { .. }));
        // The first registration survives.
        assert!(registry
            .resolve("X")
            .unwrap()
            .constructors()[0]
            .parameter("a")
            .is_some());
    }

    #[test]
    fn test_same_type_reregistration_is_noop() {
        let mut registry = ComponentRegistry::new();
        registry.register_type::<First>().unwrap();
        registry.register_type::<First>().unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_invalid_descriptor_rejected() {
        let mut registry = ComponentRegistry::new();
        let err = registry
            .register(ComponentDescriptor::new::<First>("Empty"))
            .unwrap_err();
        assert!(matches!(err, AutoconfigError::InvalidDescriptor { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_names_sorted() {
        let mut registry = ComponentRegistry::new();
        for name in ["b", "a", "c"] {
            registry
                .register(
                    ComponentDescriptor::new::<First>(name)
                        .with_constructor(ConstructorSpec::new(vec![], |_args| Ok(First))),
                )
                .unwrap();
        }
        assert_eq!(registry.names(), vec!["a", "b", "c"]);
        assert!(registry.contains("a"));
        assert!(!registry.contains("A"));
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ComponentRegistry>();
    }
}
