//! Error taxonomy for configuration parsing and component construction.
//!
//! Every variant is terminal: a failing parse never returns a partial
//! component graph, and nothing is retried internally.

use crate::syntax::Span;
use thiserror::Error;

/// Boxed error produced by component factories.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AutoconfigError>;

/// Errors raised while registering components or turning a description
/// into a component graph.
#[derive(Error, Debug)]
pub enum AutoconfigError {
    /// The description text does not conform to the grammar.
    #[error("syntax error at {span}: {message}")]
    Syntax { span: Span, message: String },

    /// No component is registered under this name.
    #[error("component not found: {name}")]
    ComponentNotFound { name: String },

    /// Two distinct implementation types tried to claim the same name.
    #[error("duplicate component name {name}: registered by {existing}, rejected {rejected}")]
    DuplicateComponentName {
        name: String,
        existing: &'static str,
        rejected: &'static str,
    },

    /// A descriptor is internally inconsistent and cannot be registered.
    #[error("invalid descriptor for {component}: {reason}")]
    InvalidDescriptor { component: String, reason: String },

    /// Array literals are declared but not implemented.
    #[error("array literals are not supported (found array with {elements} elements)")]
    UnsupportedLiteral { elements: usize },

    /// Literal text could not be converted to its runtime value.
    #[error("cannot parse {kind} literal {text:?}: {reason}")]
    LiteralParse {
        kind: &'static str,
        text: String,
        reason: String,
    },

    /// A property node completed without a pending value.
    #[error("property {property} completed without a value")]
    UnresolvedProperty { property: String },

    /// A frame assignment was attempted with an unresolved value.
    #[error("property {property} assigned before its value exists")]
    MissingValue { property: String },

    /// The same property was assigned twice within one component.
    #[error("property {property} assigned more than once")]
    DuplicateProperty { property: String },

    /// Components are nested deeper than the configured limit.
    #[error("component nesting exceeds maximum depth {max_depth}")]
    NestingTooDeep { max_depth: usize },

    /// No constructor accepts the given property set.
    #[error("no constructor of {component} matches the given properties: {details}")]
    NoMatchingConstructor { component: String, details: String },

    /// A parameter without default was not provided.
    #[error("missing parameter {parameter} for {component}")]
    MissingParameter { component: String, parameter: String },

    /// A property value does not match the declared parameter type.
    #[error("parameter {parameter} of {component}: expected {expected}, got {actual}")]
    ParameterType {
        component: String,
        parameter: String,
        expected: String,
        actual: String,
    },

    /// A numeric property value lies outside the declared bounds.
    #[error("parameter {parameter} of {component}: value {value} outside [{min}, {max}]")]
    ParameterRange {
        component: String,
        parameter: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The component factory itself failed.
    #[error("failed to construct {component}: {source}")]
    ComponentConstruction {
        component: String,
        #[source]
        source: BoxError,
    },

    /// The finished graph is not of the type the caller asked for.
    #[error("root component {component} is {actual}, expected {expected}")]
    UnexpectedRootType {
        component: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Walk bookkeeping broke; indicates a driver bug, never user input.
    #[error("internal error: {0}")]
    Internal(&'static str),

    /// Wraps another error with the source position of the failing node.
    #[error("{source} (at {span})")]
    Located {
        span: Span,
        #[source]
        source: Box<AutoconfigError>,
    },
}

impl AutoconfigError {
    /// Attaches a source position, keeping the innermost one if already located.
    pub fn at(self, span: Span) -> Self {
        match self {
            located @ AutoconfigError::Located { .. } => located,
            other => AutoconfigError::Located {
                span,
                source: Box::new(other),
            },
        }
    }

    /// Returns the error without its position wrapper.
    pub fn unlocated(&self) -> &AutoconfigError {
        match self {
            AutoconfigError::Located { source, .. } => source.unlocated(),
            other => other,
        }
    }

    /// Returns the source position, if one was attached.
    pub fn span(&self) -> Option<Span> {
        match self {
            AutoconfigError::Located { span, .. } => Some(*span),
            AutoconfigError::Syntax { span, .. } => Some(*span),
            _ => None,
        }
    }

    /// Returns the offending parameter name for argument validation failures.
    pub fn parameter(&self) -> Option<&str> {
        match self.unlocated() {
            AutoconfigError::MissingParameter { parameter, .. }
            | AutoconfigError::ParameterType { parameter, .. }
            | AutoconfigError::ParameterRange { parameter, .. } => Some(parameter),
            _ => None,
        }
    }
}
