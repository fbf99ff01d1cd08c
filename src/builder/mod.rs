//! Component graph construction.
//!
//! Turns a walked description tree into live component instances:
//!
//! 1. [`LiteralResolver`] converts literal nodes into typed [`Value`](crate::value::Value)s.
//! 2. [`FrameStack`] keeps one property [`Frame`] per open component node.
//! 3. [`ComponentBuilder`] selects a constructor for a closed frame,
//!    coerces and bounds-checks its arguments and invokes the factory.
//! 4. [`AlgorithmBuilder`] wires the three together as a
//!    [`TreeListener`](crate::syntax::TreeListener).
//!
//! Components are built bottom-up: every nested component is complete
//! before its parent's constructor runs.

mod component;
mod frame;
mod listener;
mod literal;

pub use component::ComponentBuilder;
pub use frame::{Frame, FrameStack};
pub use listener::AlgorithmBuilder;
pub use literal::LiteralResolver;
