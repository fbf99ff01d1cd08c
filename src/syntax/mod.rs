//! Algorithm description language: syntax tree, lexer, parser and walker.
//!
//! A description names a root component and assigns its properties,
//! either literals or nested components:
//!
//! ```text
//! SimpleAlgorithm(constructive=GreedyConstructor(), improver=FirstImprovementLS(maximize=true))
//! ```
//!
//! The tree carries no semantics; names are resolved and values checked by
//! [`AlgorithmBuilder`](crate::builder::AlgorithmBuilder) while
//! [`walk`] drives it over the tree.

mod lexer;
mod parser;
mod types;
mod walker;

pub use lexer::Token;
pub(crate) use parser::nesting_limit;
pub use parser::{parse_description, parse_description_with_depth, MAX_NESTING_DEPTH};
pub use types::{ComponentNode, Literal, LiteralNode, PropertyNode, PropertyValue, Span};
pub use walker::{walk, TreeListener};
