//! Parse entry points.

use super::config::EngineConfig;
use crate::builder::AlgorithmBuilder;
use crate::error::{AutoconfigError, Result};
use crate::registry::ComponentRegistry;
use crate::syntax::{parse_description_with_depth, walk, ComponentNode};
use crate::value::Instance;
use std::any::Any;
use std::sync::Arc;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Autoconfiguration engine.
///
/// Owns a shared, read-only [`ComponentRegistry`] and an [`EngineConfig`].
/// Every call to [`parse`](Self::parse) runs a fresh
/// [`AlgorithmBuilder`] over the tree, so one engine can be cloned and used
/// from many threads at once.
///
/// # Examples
///
/// ```
/// use u_autoconfig::registry::{
///     ComponentDescriptor, ComponentRegistry, ConstructorSpec, ParameterSpec,
/// };
/// use u_autoconfig::Autoconfig;
///
/// #[derive(Debug, PartialEq)]
/// struct Restarts(i32);
///
/// let mut registry = ComponentRegistry::new();
/// registry
///     .register(ComponentDescriptor::new::<Restarts>("Restarts").with_constructor(
///         ConstructorSpec::new(
///             vec![ParameterSpec::int("n").with_bounds(1.0, 100.0)],
///             |args| Ok(Restarts(args.int("n")?)),
///         ),
///     ))
///     .unwrap();
///
/// let engine = Autoconfig::new(registry);
/// let built: Restarts = engine.parse_str_as("Restarts(n=5)").unwrap();
/// assert_eq!(built, Restarts(5));
/// assert!(engine.parse_str("Restarts(n=0)").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Autoconfig {
    registry: Arc<ComponentRegistry>,
    config: EngineConfig,
}

impl Autoconfig {
    pub fn new(registry: impl Into<Arc<ComponentRegistry>>) -> Self {
        Self {
            registry: registry.into(),
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Materializes the component graph described by `root`.
    ///
    /// Nested components are built before the components that receive them.
    /// The first failure aborts the whole parse; no partial graph is
    /// returned.
    #[instrument(skip_all, fields(root = %root.name))]
    pub fn parse(&self, root: &ComponentNode) -> Result<Instance> {
        let mut builder = AlgorithmBuilder::new(&self.registry, &self.config);
        walk(root, &mut builder)?;
        let instance = builder.finish()?;
        debug!(
            component = instance.component(),
            output = instance.type_handle().name(),
            "materialized component graph"
        );
        Ok(instance)
    }

    /// Parses description text, then materializes it.
    ///
    /// The configured nesting limit already applies while parsing, so
    /// over-deep input fails before any component is built.
    #[instrument(skip_all, fields(len = source.len()))]
    pub fn parse_str(&self, source: &str) -> Result<Instance> {
        let root = parse_description_with_depth(source, self.config.max_depth)?;
        self.parse(&root)
    }

    /// Like [`parse`](Self::parse), but downcasts the root to `T`.
    ///
    /// # Errors
    ///
    /// [`AutoconfigError::UnexpectedRootType`] if the root component
    /// produces another type.
    pub fn parse_as<T: Any>(&self, root: &ComponentNode) -> Result<T> {
        downcast_root(self.parse(root)?)
    }

    /// Like [`parse_str`](Self::parse_str), but downcasts the root to `T`.
    pub fn parse_str_as<T: Any>(&self, source: &str) -> Result<T> {
        downcast_root(self.parse_str(source)?)
    }

    /// Builds `count` independent graphs from the same tree.
    ///
    /// Runs on the rayon pool when the `parallel` feature is enabled. The
    /// returned instances share no state with each other.
    #[instrument(skip_all, fields(root = %root.name, count = count))]
    pub fn materialize_many(&self, root: &ComponentNode, count: usize) -> Result<Vec<Instance>> {
        #[cfg(feature = "parallel")]
        {
            (0..count)
                .into_par_iter()
                .map(|_| self.parse(root))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            (0..count).map(|_| self.parse(root)).collect()
        }
    }
}

fn downcast_root<T: Any>(instance: Instance) -> Result<T> {
    instance
        .downcast::<T>()
        .map_err(|instance| AutoconfigError::UnexpectedRootType {
            component: instance.component().to_string(),
            expected: std::any::type_name::<T>(),
            actual: instance.type_handle().name(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ComponentDescriptor, ConstructorSpec, ParameterSpec};
    use crate::syntax::{Literal, MAX_NESTING_DEPTH};

    #[derive(Debug, Clone, PartialEq)]
    struct Counter {
        start: i32,
        label: String,
    }

    fn engine() -> Autoconfig {
        let mut registry = ComponentRegistry::new();
        registry
            .register(ComponentDescriptor::new::<Counter>("Counter").with_constructor(
                ConstructorSpec::new(
                    vec![ParameterSpec::int("start"), ParameterSpec::string("label")],
                    |mut args| {
                        Ok(Counter {
                            start: args.int("start")?,
                            label: args.string("label")?,
                        })
                    },
                ),
            ))
            .unwrap();
        Autoconfig::new(registry)
    }

    #[test]
    fn test_parse_node() {
        let root = ComponentNode::new("Counter")
            .with_property("start", Literal::Integer("3".into()))
            .with_property("label", Literal::String("a".into()));
        let counter: Counter = engine().parse_as(&root).unwrap();
        assert_eq!(
            counter,
            Counter {
                start: 3,
                label: "a".into()
            }
        );
    }

    #[test]
    fn test_parse_str() {
        let instance = engine().parse_str("Counter(start=1, label=\"x\")").unwrap();
        assert_eq!(instance.component(), "Counter");
        assert!(instance.is::<Counter>());
    }

    #[test]
    fn test_syntax_error_surfaces() {
        assert!(matches!(
            engine().parse_str("Counter(start=1"),
            Err(AutoconfigError::Syntax { .. })
        ));
    }

    #[test]
    fn test_wrong_root_type() {
        let err = engine()
            .parse_str_as::<String>("Counter(start=1, label=\"x\")")
            .unwrap_err();
        assert!(matches!(
            err,
            AutoconfigError::UnexpectedRootType { ref component, .. } if component == "Counter"
        ));
    }

    #[test]
    fn test_materialize_many_independent() {
        let root = crate::syntax::parse_description("Counter(start=7, label=\"run\")").unwrap();
        let mut counters: Vec<Counter> = engine()
            .materialize_many(&root, 4)
            .unwrap()
            .into_iter()
            .map(|instance| instance.downcast::<Counter>().unwrap())
            .collect();
        assert_eq!(counters.len(), 4);

        counters[0].start = 100;
        assert!(counters[1..].iter().all(|c| c.start == 7));
    }

    #[test]
    fn test_materialize_many_propagates_failure() {
        let root = crate::syntax::parse_description("Counter(start=7)").unwrap();
        assert!(engine().materialize_many(&root, 3).is_err());
    }

    #[test]
    fn test_deep_descriptions_fail_cleanly() {
        let depth = 100_000;
        let components = format!("{}Counter(){}", "Counter(x=".repeat(depth), ")".repeat(depth));
        let err = engine().parse_str(&components).unwrap_err();
        assert!(matches!(
            err.unlocated(),
            AutoconfigError::NestingTooDeep { max_depth: 64 }
        ));

        let arrays = format!("Counter(start={}{})", "[".repeat(depth), "]".repeat(depth));
        let err = engine().parse_str(&arrays).unwrap_err();
        assert!(matches!(
            err.unlocated(),
            AutoconfigError::NestingTooDeep { max_depth: 64 }
        ));

        let unlimited = engine().with_config(EngineConfig::default().with_max_depth(0));
        let err = unlimited.parse_str(&components).unwrap_err();
        assert!(matches!(
            err.unlocated(),
            AutoconfigError::NestingTooDeep { max_depth } if *max_depth == MAX_NESTING_DEPTH
        ));
    }

    #[test]
    fn test_clone_shares_registry() {
        let engine = engine().with_config(EngineConfig::default().with_max_depth(2));
        let copy = engine.clone();
        assert!(std::ptr::eq(engine.registry(), copy.registry()));
        assert_eq!(copy.config().max_depth, 2);
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Autoconfig>();
    }
}
