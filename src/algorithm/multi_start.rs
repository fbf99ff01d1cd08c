//! Multi-start wrapper: run an algorithm repeatedly, keep the best.

use super::types::{is_improvement, Algorithm, BoxedAlgorithm, Solution};
use crate::registry::{
    Autoconfigurable, ComponentDescriptor, ConstructorSpec, DefaultValue, ParameterSpec,
};
use tracing::debug;

/// Runs the inner algorithm up to `iterations` times from the same empty
/// solution and returns the best result. Ties keep the earlier result.
///
/// With a patience set, the loop stops once that many consecutive runs
/// failed to improve, but never before `min_iterations` runs.
#[derive(Debug)]
pub struct MultiStartAlgorithm<S: Solution> {
    iterations: usize,
    min_iterations: usize,
    max_iterations_without_improving: usize,
    algorithm: BoxedAlgorithm<S>,
    maximize: bool,
    name: String,
}

impl<S: Solution> MultiStartAlgorithm<S> {
    /// `iterations` below 1 is raised to 1.
    pub fn new(iterations: usize, algorithm: BoxedAlgorithm<S>) -> Self {
        let name = format!("MultiStart({})", algorithm.name());
        Self {
            iterations: iterations.max(1),
            min_iterations: 1,
            max_iterations_without_improving: 0,
            algorithm,
            maximize: false,
            name,
        }
    }

    pub fn with_maximize(mut self, maximize: bool) -> Self {
        self.maximize = maximize;
        self
    }

    /// Runs that always happen, whatever the patience.
    pub fn with_min_iterations(mut self, min_iterations: usize) -> Self {
        self.min_iterations = min_iterations;
        self
    }

    /// Consecutive non-improving runs before stopping (0 to disable).
    pub fn with_max_iterations_without_improving(mut self, patience: usize) -> Self {
        self.max_iterations_without_improving = patience;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    fn exhausted(&self, completed: usize, stale: usize) -> bool {
        self.max_iterations_without_improving != 0
            && stale >= self.max_iterations_without_improving
            && completed >= self.min_iterations
    }
}

impl<S: Solution> Algorithm<S> for MultiStartAlgorithm<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, empty: &S) -> S {
        let mut best = self.algorithm.run(empty);
        let mut stale = 0;
        for iteration in 1..self.iterations {
            if self.exhausted(iteration, stale) {
                debug!(iteration, stale, "stopping, no recent improvement");
                break;
            }
            let candidate = self.algorithm.run(empty);
            if is_improvement(best.score(), candidate.score(), self.maximize) {
                debug!(iteration, score = candidate.score(), "new best");
                best = candidate;
                stale = 0;
            } else {
                stale += 1;
            }
        }
        best
    }
}

impl<S: Solution> Autoconfigurable for MultiStartAlgorithm<S> {
    fn descriptor() -> ComponentDescriptor {
        ComponentDescriptor::new::<Self>("MultiStart").with_constructor(
            ConstructorSpec::new(
                vec![
                    ParameterSpec::int("iterations").with_bounds(1.0, f64::from(i32::MAX)),
                    ParameterSpec::component::<BoxedAlgorithm<S>>("algorithm"),
                    ParameterSpec::bool("maximize").with_default(DefaultValue::Bool(false)),
                    ParameterSpec::int("minIterations")
                        .with_bounds(1.0, f64::from(i32::MAX))
                        .with_default(DefaultValue::Int(1)),
                    ParameterSpec::int("maxIterationsWithoutImproving")
                        .with_bounds(0.0, f64::from(i32::MAX))
                        .with_default(DefaultValue::Int(0)),
                    ParameterSpec::string("name").with_default(DefaultValue::Null),
                ],
                |mut args| {
                    let iterations = usize::try_from(args.int("iterations")?)?;
                    let algorithm = args.component::<BoxedAlgorithm<S>>("algorithm")?;
                    let mut multi_start = MultiStartAlgorithm::new(iterations, algorithm)
                        .with_maximize(args.bool("maximize")?)
                        .with_min_iterations(usize::try_from(args.int("minIterations")?)?)
                        .with_max_iterations_without_improving(usize::try_from(
                            args.int("maxIterationsWithoutImproving")?,
                        )?);
                    if let Some(name) = args.optional_string("name")? {
                        multi_start = multi_start.with_name(name);
                    }
                    Ok(Box::new(multi_start) as BoxedAlgorithm<S>)
                },
            )
            .autoconfig(),
        )
    }
}
