//! Component registry.
//!
//! Maps human-readable component names to descriptors of their
//! implementation: the available constructors and, for each, the ordered
//! parameter specifications (declared type, optional bounds and default).
//!
//! Registration is explicit. Each component supplies factory closures over
//! a named-argument bag ([`Arguments`](crate::value::Arguments)), either
//! directly through [`ComponentRegistry::register`] or by implementing
//! [`Autoconfigurable`].

mod catalog;
mod descriptor;

pub use catalog::{Autoconfigurable, ComponentRegistry};
pub use descriptor::{
    Bounds, ComponentDescriptor, ConstructorSpec, DefaultValue, ParamType, ParameterSpec,
    TypeHandle,
};
