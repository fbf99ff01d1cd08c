//! Toy components shared by the algorithm tests.

use super::types::{Constructive, Improver, Solution};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, PartialEq)]
pub struct Score(pub f64);

impl Solution for Score {
    fn score(&self) -> f64 {
        self.0
    }
}

/// Always constructs the same score.
#[derive(Debug)]
pub struct Fixed(pub f64);

impl Constructive<Score> for Fixed {
    fn construct(&self, _solution: Score) -> Score {
        Score(self.0)
    }
}

/// Constructs the given scores in turn.
#[derive(Debug)]
pub struct Cycle {
    values: Vec<f64>,
    calls: AtomicUsize,
}

impl Cycle {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Constructive<Score> for Cycle {
    fn construct(&self, _solution: Score) -> Score {
        let call = self.calls.fetch_add(1, Ordering::Relaxed);
        Score(self.values[call % self.values.len()])
    }
}

/// Moves the score by `delta` once per call unless that would pass `stop`.
#[derive(Debug)]
pub struct Step {
    pub delta: f64,
    pub stop: f64,
}

impl Improver<Score> for Step {
    fn improve(&self, solution: Score) -> Score {
        let next = solution.0 + self.delta;
        let allowed = if self.delta < 0.0 {
            next >= self.stop
        } else {
            next <= self.stop
        };
        if allowed {
            Score(next)
        } else {
            solution
        }
    }
}
