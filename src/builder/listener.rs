//! Tree-walk driver: turns walk callbacks into built components.

use super::component::ComponentBuilder;
use super::frame::FrameStack;
use super::literal::LiteralResolver;
use crate::engine::EngineConfig;
use crate::error::{AutoconfigError, Result};
use crate::registry::ComponentRegistry;
use crate::syntax::{ComponentNode, LiteralNode, PropertyNode, TreeListener};
use crate::value::{Instance, Value};

/// Per-parse walk state.
///
/// Holds the frame stack and the pending value slot for exactly one walk.
/// Create a fresh builder for every parse; the registry is only borrowed.
///
/// # Examples
///
/// ```
/// use u_autoconfig::builder::AlgorithmBuilder;
/// use u_autoconfig::engine::EngineConfig;
/// use u_autoconfig::registry::{ComponentDescriptor, ComponentRegistry, ConstructorSpec};
/// use u_autoconfig::syntax::{parse_description, walk};
///
/// struct Greedy;
///
/// let mut registry = ComponentRegistry::new();
/// registry
///     .register(
///         ComponentDescriptor::new::<Greedy>("Greedy")
///             .with_constructor(ConstructorSpec::new(vec![], |_args| Ok(Greedy))),
///     )
///     .unwrap();
///
/// let root = parse_description("Greedy()").unwrap();
/// let mut builder = AlgorithmBuilder::new(&registry, &EngineConfig::default());
/// walk(&root, &mut builder).unwrap();
/// let instance = builder.finish().unwrap();
/// assert!(instance.is::<Greedy>());
/// ```
#[derive(Debug)]
pub struct AlgorithmBuilder<'r> {
    registry: &'r ComponentRegistry,
    builder: ComponentBuilder,
    frames: FrameStack,
    pending: Option<Value>,
    max_depth: usize,
}

impl<'r> AlgorithmBuilder<'r> {
    pub fn new(registry: &'r ComponentRegistry, config: &EngineConfig) -> Self {
        Self {
            registry,
            builder: ComponentBuilder::new().with_integer_coercion(config.coerce_integers),
            frames: FrameStack::new(config.duplicate_properties),
            pending: None,
            max_depth: config.nesting_limit(),
        }
    }

    /// Number of currently open component frames.
    pub fn depth(&self) -> usize {
        self.frames.depth()
    }

    /// Returns the root instance once the walk has completed.
    pub fn finish(mut self) -> Result<Instance> {
        if !self.frames.is_empty() {
            return Err(AutoconfigError::Internal("walk ended with open frames"));
        }
        match self.pending.take() {
            Some(Value::Component(instance)) => Ok(instance),
            _ => Err(AutoconfigError::Internal("walk produced no component")),
        }
    }
}

impl TreeListener for AlgorithmBuilder<'_> {
    type Error = AutoconfigError;

    fn enter_component(&mut self, node: &ComponentNode) -> Result<()> {
        if self.frames.depth() >= self.max_depth {
            return Err(AutoconfigError::NestingTooDeep {
                max_depth: self.max_depth,
            }
            .at(node.span));
        }
        self.frames.push();
        Ok(())
    }

    fn exit_component(&mut self, node: &ComponentNode) -> Result<()> {
        let frame = self.frames.pop()?;
        let descriptor = self
            .registry
            .resolve(&node.name)
            .map_err(|e| e.at(node.span))?;
        let instance = self
            .builder
            .build(descriptor, frame)
            .map_err(|e| locate(e, node))?;
        self.pending = Some(Value::Component(instance));
        Ok(())
    }

    fn exit_literal(&mut self, node: &LiteralNode) -> Result<()> {
        let value = LiteralResolver::resolve(node).map_err(|e| e.at(node.span))?;
        self.pending = Some(value);
        Ok(())
    }

    fn exit_property(&mut self, node: &PropertyNode) -> Result<()> {
        let Some(value) = self.pending.take() else {
            return Err(AutoconfigError::UnresolvedProperty {
                property: node.name.clone(),
            }
            .at(node.span));
        };
        self.frames
            .current_frame()?
            .set(node.name.as_str(), Some(value))
            .map_err(|e| e.at(node.span))
    }
}

/// Points argument errors at the offending property, everything else at
/// the component.
fn locate(err: AutoconfigError, node: &ComponentNode) -> AutoconfigError {
    let span = err
        .parameter()
        .and_then(|name| node.property(name))
        .map_or(node.span, |property| property.span);
    err.at(span)
}
