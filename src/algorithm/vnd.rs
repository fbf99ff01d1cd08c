//! Variable Neighborhood Descent.
//!
//! Applies a sequence of improvers, restarting from the first one whenever
//! a later improver finds a better solution:
//!
//! 1. Set k = 0
//! 2. While k < number of improvers:
//!    a. x' = improver_k(x)
//!    b. If k = 0 or x' is no better than x: k = k + 1
//!    c. Otherwise: k = 0
//!    d. x = x'
//!
//! The first improver is never rerun immediately after itself.
//!
//! # Reference
//!
//! Hansen, P. & Mladenović, N. (2001). "Variable neighborhood search:
//! Principles and applications", *European Journal of Operational Research* 130(3), 449-467.

use super::types::{is_improvement, BoxedImprover, Improver, Solution};
use crate::registry::{
    Autoconfigurable, ComponentDescriptor, ConstructorSpec, DefaultValue, ParameterSpec,
};
use tracing::trace;

/// Variable Neighborhood Descent over an ordered list of improvers.
#[derive(Debug)]
pub struct Vnd<S: Solution> {
    improvers: Vec<BoxedImprover<S>>,
    maximize: bool,
}

impl<S: Solution> Vnd<S> {
    pub fn new(improvers: Vec<BoxedImprover<S>>, maximize: bool) -> Self {
        Self {
            improvers,
            maximize,
        }
    }

    pub fn improvers(&self) -> &[BoxedImprover<S>] {
        &self.improvers
    }

    pub fn is_maximizing(&self) -> bool {
        self.maximize
    }
}

impl<S: Solution> Improver<S> for Vnd<S> {
    fn improve(&self, mut solution: S) -> S {
        let mut k = 0;
        while k < self.improvers.len() {
            let previous = solution.score();
            solution = self.improvers[k].improve(solution);
            let current = solution.score();

            if k != 0 && is_improvement(previous, current, self.maximize) {
                trace!(neighborhood = k, previous, current, "improved, restarting");
                k = 0;
            } else {
                k += 1;
            }
        }
        solution
    }
}

impl<S: Solution> Autoconfigurable for Vnd<S> {
    fn descriptor() -> ComponentDescriptor {
        let maximize = || ParameterSpec::bool("maximize").with_default(DefaultValue::Bool(false));
        let improver = |name: &str| ParameterSpec::component::<BoxedImprover<S>>(name);

        ComponentDescriptor::new::<Self>("VND")
            .with_constructor(ConstructorSpec::new(
                vec![improver("first"), improver("second"), maximize()],
                |mut args| {
                    let improvers = vec![
                        args.component::<BoxedImprover<S>>("first")?,
                        args.component::<BoxedImprover<S>>("second")?,
                    ];
                    Ok(Box::new(Vnd::new(improvers, args.bool("maximize")?)) as BoxedImprover<S>)
                },
            ))
            .with_constructor(ConstructorSpec::new(
                vec![
                    improver("first"),
                    improver("second"),
                    improver("third"),
                    maximize(),
                ],
                |mut args| {
                    let improvers = vec![
                        args.component::<BoxedImprover<S>>("first")?,
                        args.component::<BoxedImprover<S>>("second")?,
                        args.component::<BoxedImprover<S>>("third")?,
                    ];
                    Ok(Box::new(Vnd::new(improvers, args.bool("maximize")?)) as BoxedImprover<S>)
                },
            ))
    }
}
