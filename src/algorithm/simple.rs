//! Construct-then-improve algorithm and the no-op improver.

use super::types::{
    Algorithm, BoxedAlgorithm, BoxedConstructive, BoxedImprover, Improver, Solution,
};
use crate::registry::{
    Autoconfigurable, ComponentDescriptor, ConstructorSpec, DefaultValue, ParameterSpec,
};
use std::marker::PhantomData;
use tracing::debug;

/// Improver that returns its input unchanged.
#[derive(Debug)]
pub struct NullImprover<S> {
    _solution: PhantomData<fn() -> S>,
}

impl<S> NullImprover<S> {
    pub fn new() -> Self {
        Self {
            _solution: PhantomData,
        }
    }
}

impl<S> Default for NullImprover<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Solution> Improver<S> for NullImprover<S> {
    fn improve(&self, solution: S) -> S {
        solution
    }
}

impl<S: Solution> Autoconfigurable for NullImprover<S> {
    fn descriptor() -> ComponentDescriptor {
        ComponentDescriptor::new::<Self>("NullImprover").with_constructor(ConstructorSpec::new(
            vec![],
            |_args| Ok(Box::new(NullImprover::<S>::new()) as BoxedImprover<S>),
        ))
    }
}

/// Runs one construction, then every improver once in order.
///
/// # Examples
///
/// ```
/// use u_autoconfig::algorithm::{Algorithm, Constructive, Solution, SimpleAlgorithm};
///
/// #[derive(Debug, Clone)]
/// struct Tour(f64);
/// impl Solution for Tour {
///     fn score(&self) -> f64 { self.0 }
/// }
///
/// #[derive(Debug)]
/// struct Greedy;
/// impl Constructive<Tour> for Greedy {
///     fn construct(&self, _empty: Tour) -> Tour { Tour(42.0) }
/// }
///
/// let algorithm: SimpleAlgorithm<Tour> = SimpleAlgorithm::new(Box::new(Greedy));
/// assert_eq!(algorithm.run(&Tour(0.0)).score(), 42.0);
/// ```
#[derive(Debug)]
pub struct SimpleAlgorithm<S: Solution> {
    name: String,
    constructive: BoxedConstructive<S>,
    improvers: Vec<BoxedImprover<S>>,
}

impl<S: Solution> SimpleAlgorithm<S> {
    /// Name used when none is configured.
    pub const DEFAULT_NAME: &'static str = "Simple";

    pub fn new(constructive: BoxedConstructive<S>) -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            constructive,
            improvers: Vec::new(),
        }
    }

    pub fn with_improver(mut self, improver: BoxedImprover<S>) -> Self {
        self.improvers.push(improver);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn improvers(&self) -> &[BoxedImprover<S>] {
        &self.improvers
    }
}

impl<S: Solution> Algorithm<S> for SimpleAlgorithm<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, empty: &S) -> S {
        let mut solution = self.constructive.construct(empty.clone());
        debug!(algorithm = %self.name, score = solution.score(), "constructed");
        for (i, improver) in self.improvers.iter().enumerate() {
            solution = improver.improve(solution);
            debug!(algorithm = %self.name, improver = i, score = solution.score(), "improved");
        }
        solution
    }
}

impl<S: Solution> Autoconfigurable for SimpleAlgorithm<S> {
    fn descriptor() -> ComponentDescriptor {
        let name = || {
            ParameterSpec::string("name")
                .with_default(DefaultValue::String(Self::DEFAULT_NAME.to_string()))
        };
        ComponentDescriptor::new::<Self>("SimpleAlgorithm")
            .with_constructor(ConstructorSpec::new(
                vec![
                    ParameterSpec::component::<BoxedConstructive<S>>("constructive"),
                    ParameterSpec::component::<BoxedImprover<S>>("improver"),
                    name(),
                ],
                |mut args| {
                    let mut algorithm = SimpleAlgorithm::<S>::new(
                        args.component::<BoxedConstructive<S>>("constructive")?,
                    )
                    .with_name(args.string("name")?);
                    // null means no improvement phase
                    if let Some(improver) =
                        args.optional_component::<BoxedImprover<S>>("improver")?
                    {
                        algorithm = algorithm.with_improver(improver);
                    }
                    Ok(Box::new(algorithm) as BoxedAlgorithm<S>)
                },
            ))
            .with_constructor(ConstructorSpec::new(
                vec![
                    ParameterSpec::component::<BoxedConstructive<S>>("constructive"),
                    name(),
                ],
                |mut args| {
                    let algorithm = SimpleAlgorithm::<S>::new(
                        args.component::<BoxedConstructive<S>>("constructive")?,
                    )
                    .with_name(args.string("name")?);
                    Ok(Box::new(algorithm) as BoxedAlgorithm<S>)
                },
            ))
    }
}
