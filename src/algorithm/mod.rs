//! Generic algorithm components for autoconfiguration.
//!
//! Defines the capability traits descriptions are typed against
//! ([`Constructive`], [`Improver`], [`Algorithm`]) and a small set of
//! problem-independent components built on them:
//!
//! | Registry name     | Type                      | Produces                 |
//! |-------------------|---------------------------|--------------------------|
//! | `SimpleAlgorithm` | [`SimpleAlgorithm`]       | [`BoxedAlgorithm`]       |
//! | `MultiStart`      | [`MultiStartAlgorithm`]   | [`BoxedAlgorithm`]       |
//! | `VND`             | [`Vnd`]                   | [`BoxedImprover`]        |
//! | `NullImprover`    | [`NullImprover`]          | [`BoxedImprover`]        |
//!
//! Problem-specific constructives and improvers are registered by the
//! caller with the matching boxed output type, so they can be nested in
//! any of the above:
//!
//! ```text
//! MultiStart(iterations=10, algorithm=SimpleAlgorithm(
//!     constructive=GreedyConstructor(),
//!     improver=VND(first=SwapLS(), second=InsertLS())))
//! ```
//!
//! The engine only builds these components; running them is up to the
//! caller.

#[cfg(test)]
mod fixtures;
mod multi_start;
mod simple;
mod types;
mod vnd;

pub use multi_start::MultiStartAlgorithm;
pub use simple::{NullImprover, SimpleAlgorithm};
pub use types::{
    is_improvement, Algorithm, BoxedAlgorithm, BoxedConstructive, BoxedImprover, Constructive,
    Improver, Solution, SCORE_EPSILON,
};
pub use vnd::Vnd;

use crate::error::Result;
use crate::registry::ComponentRegistry;

/// Registers the generic components for solution type `S`.
///
/// Registry names are global, so one registry serves one solution type;
/// registering a second `S` fails with
/// [`AutoconfigError::DuplicateComponentName`](crate::AutoconfigError::DuplicateComponentName).
pub fn register_algorithms<S: Solution>(registry: &mut ComponentRegistry) -> Result<()> {
    registry.register_type::<SimpleAlgorithm<S>>()?;
    registry.register_type::<MultiStartAlgorithm<S>>()?;
    registry.register_type::<Vnd<S>>()?;
    registry.register_type::<NullImprover<S>>()?;
    Ok(())
}
