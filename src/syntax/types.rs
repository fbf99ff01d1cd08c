//! Syntax tree of the algorithm description language.

use std::fmt;

/// Byte range of a node in the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl Span {
    /// Creates a span covering `start..end`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Smallest span covering both `self` and `other`.
    pub fn join(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A literal as written in the description.
///
/// Scalar variants keep the literal's source text; conversion to a runtime
/// value happens in [`LiteralResolver`](crate::builder::LiteralResolver).
/// Quotes of character and string literals are already stripped.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Boolean(String),
    Character(String),
    Integer(String),
    Float(String),
    String(String),
    Null,
    /// Parsed so it can be reported, always rejected during resolution.
    Array(Vec<PropertyValue>),
}

impl Literal {
    /// Human-readable literal kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Literal::Boolean(_) => "boolean",
            Literal::Character(_) => "character",
            Literal::Integer(_) => "integer",
            Literal::Float(_) => "float",
            Literal::String(_) => "string",
            Literal::Null => "null",
            Literal::Array(_) => "array",
        }
    }
}

/// Literal leaf of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralNode {
    pub literal: Literal,
    pub span: Span,
}

impl LiteralNode {
    pub fn new(literal: Literal, span: Span) -> Self {
        Self { literal, span }
    }
}

/// Right-hand side of a property assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Literal(LiteralNode),
    Component(ComponentNode),
}

impl PropertyValue {
    pub fn span(&self) -> Span {
        match self {
            PropertyValue::Literal(node) => node.span,
            PropertyValue::Component(node) => node.span,
        }
    }
}

impl From<Literal> for PropertyValue {
    fn from(literal: Literal) -> Self {
        PropertyValue::Literal(LiteralNode::new(literal, Span::default()))
    }
}

impl From<LiteralNode> for PropertyValue {
    fn from(node: LiteralNode) -> Self {
        PropertyValue::Literal(node)
    }
}

impl From<ComponentNode> for PropertyValue {
    fn from(node: ComponentNode) -> Self {
        PropertyValue::Component(node)
    }
}

/// `name = value` inside a component.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyNode {
    pub name: String,
    pub value: PropertyValue,
    pub span: Span,
}

/// `Name(prop = value, ...)`.
///
/// # Examples
///
/// ```
/// use u_autoconfig::syntax::{ComponentNode, Literal};
///
/// let node = ComponentNode::new("FirstImprovementLS")
///     .with_property("maximize", Literal::Boolean("true".into()));
/// assert_eq!(node.properties.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentNode {
    pub name: String,
    pub properties: Vec<PropertyNode>,
    pub span: Span,
}

impl ComponentNode {
    /// Creates a component node without properties or position.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            span: Span::default(),
        }
    }

    /// Appends a property assignment.
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        let value = value.into();
        self.properties.push(PropertyNode {
            name: name.into(),
            span: value.span(),
            value,
        });
        self
    }

    /// Sets the source position.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Finds the first property with the given name.
    pub fn property(&self, name: &str) -> Option<&PropertyNode> {
        self.properties.iter().find(|p| p.name == name)
    }
}
