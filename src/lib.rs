//! Autoconfiguration engine for algorithm descriptions.
//!
//! Turns a textual description of an algorithm, a tree of named components
//! with literal or nested-component properties, into a live, validated
//! component graph:
//!
//! - **Syntax** ([`syntax`]): lexer, recursive-descent parser producing a
//!   spanned [`ComponentNode`](syntax::ComponentNode) tree, and a
//!   depth-first walker with enter/exit callbacks.
//! - **Registry** ([`registry`]): component name → descriptor with the
//!   available constructors and their typed, optionally bounded and
//!   defaulted parameters.
//! - **Builder** ([`builder`]): literal resolution, per-component property
//!   frames, constructor selection with argument coercion and bounds
//!   checks, and the tree-walk driver.
//! - **Engine** ([`engine`]): the [`Autoconfig`] facade and its
//!   TOML-loadable [`EngineConfig`].
//! - **Algorithm** ([`algorithm`]): capability traits plus generic
//!   components (simple, multi-start, VND) ready to register.
//!
//! # Example
//!
//! ```
//! use u_autoconfig::algorithm::{
//!     register_algorithms, Algorithm, BoxedAlgorithm, BoxedConstructive, Constructive, Solution,
//! };
//! use u_autoconfig::registry::{ComponentDescriptor, ComponentRegistry, ConstructorSpec};
//! use u_autoconfig::Autoconfig;
//!
//! #[derive(Debug, Clone)]
//! struct Tour(f64);
//! impl Solution for Tour {
//!     fn score(&self) -> f64 { self.0 }
//! }
//!
//! #[derive(Debug)]
//! struct Greedy;
//! impl Constructive<Tour> for Greedy {
//!     fn construct(&self, _empty: Tour) -> Tour { Tour(12.0) }
//! }
//!
//! let mut registry = ComponentRegistry::new();
//! register_algorithms::<Tour>(&mut registry).unwrap();
//! registry
//!     .register(ComponentDescriptor::new::<Greedy>("GreedyConstructor").with_constructor(
//!         ConstructorSpec::new(vec![], |_args| Ok(Box::new(Greedy) as BoxedConstructive<Tour>)),
//!     ))
//!     .unwrap();
//!
//! let engine = Autoconfig::new(registry);
//! let algorithm: BoxedAlgorithm<Tour> = engine
//!     .parse_str_as("SimpleAlgorithm(constructive=GreedyConstructor(), improver=NullImprover())")
//!     .unwrap();
//! assert_eq!(algorithm.run(&Tour(0.0)).score(), 12.0);
//! ```
//!
//! # Concurrency
//!
//! The registry is read-only once built and every parse owns its walk
//! state, so an [`Autoconfig`] can be cloned into any number of threads.
//! With the `parallel` feature, [`Autoconfig::materialize_many`] builds
//! independent graphs on the rayon pool.

pub mod algorithm;
pub mod builder;
pub mod engine;
pub mod error;
pub mod registry;
pub mod syntax;
pub mod value;

pub use engine::{Autoconfig, ConfigError, DuplicatePropertyPolicy, EngineConfig};
pub use error::{AutoconfigError, BoxError, Result};
pub use registry::{Autoconfigurable, ComponentRegistry};
pub use value::{Arguments, Instance, Value};
