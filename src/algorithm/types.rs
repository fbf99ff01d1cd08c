//! Capability traits for autoconfigurable algorithm components.

use std::fmt;

/// Scores closer than this are considered equal.
pub const SCORE_EPSILON: f64 = 1e-12;

/// A candidate solution to the problem being solved.
///
/// Only the score is needed by the generic components; everything else is
/// problem-specific.
pub trait Solution: Clone + fmt::Debug + Send + Sync + 'static {
    /// Objective value. Whether higher or lower is better is decided by the
    /// component comparing scores.
    fn score(&self) -> f64;
}

/// Builds a complete solution from an empty one.
pub trait Constructive<S: Solution>: fmt::Debug + Send + Sync {
    fn construct(&self, solution: S) -> S;
}

/// Transforms a solution into one that is no worse.
pub trait Improver<S: Solution>: fmt::Debug + Send + Sync {
    fn improve(&self, solution: S) -> S;
}

/// A complete solving strategy.
pub trait Algorithm<S: Solution>: fmt::Debug + Send + Sync {
    /// Display name, used to tell configured variants apart.
    fn name(&self) -> &str;

    /// Solves starting from `empty`, which is left untouched.
    fn run(&self, empty: &S) -> S;
}

/// Constructive as produced by the registry.
pub type BoxedConstructive<S> = Box<dyn Constructive<S>>;

/// Improver as produced by the registry.
pub type BoxedImprover<S> = Box<dyn Improver<S>>;

/// Algorithm as produced by the registry.
pub type BoxedAlgorithm<S> = Box<dyn Algorithm<S>>;

/// Whether `candidate` is strictly better than `incumbent` beyond
/// [`SCORE_EPSILON`].
pub fn is_improvement(incumbent: f64, candidate: f64, maximize: bool) -> bool {
    if maximize {
        candidate - incumbent > SCORE_EPSILON
    } else {
        incumbent - candidate > SCORE_EPSILON
    }
}
