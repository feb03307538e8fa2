#![allow(dead_code)]

use std::collections::VecDeque;

use evogen::{Evaluator, Random, Solution};

/// Installs a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Replays fixed draws in order and panics once they run out.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    ints: VecDeque<usize>,
    reals: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new(ints: Vec<usize>, reals: Vec<f64>) -> Self {
        Self {
            ints: ints.into(),
            reals: reals.into(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.ints.is_empty() && self.reals.is_empty()
    }
}

impl Random for ScriptedRandom {
    fn uniform_int(&mut self, bound: usize) -> usize {
        let value = self.ints.pop_front().expect("scripted ints exhausted");
        assert!(value < bound, "scripted int {} not below bound {}", value, bound);
        value
    }

    fn uniform_real(&mut self) -> f64 {
        self.reals.pop_front().expect("scripted reals exhausted")
    }
}

/// Always feasible; the cost of a solution is the sum of its selected indices.
#[derive(Debug, Clone)]
pub struct IndexSum {
    pub size: usize,
}

impl Evaluator for IndexSum {
    type Gene = u8;

    fn domain_size(&self) -> usize {
        self.size
    }

    fn cost(&self, elements: &[usize]) -> f64 {
        elements.iter().sum::<usize>() as f64
    }
}

/// 0/1 knapsack: maximise value while total weight stays within capacity. The
/// heaviest selected item is reported as forbidden when over capacity.
#[derive(Debug, Clone)]
pub struct Knapsack {
    pub weights: Vec<f64>,
    pub values: Vec<f64>,
    pub capacity: f64,
}

impl Knapsack {
    pub fn small() -> Self {
        Self {
            weights: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
            values: vec![3.0, 4.0, 5.0, 8.0, 10.0, 11.0, 12.0, 15.0],
            capacity: 12.0,
        }
    }

    pub fn weight(&self, solution: &Solution) -> f64 {
        solution.elements.iter().map(|&i| self.weights[i]).sum()
    }
}

impl Evaluator for Knapsack {
    type Gene = u8;

    fn domain_size(&self) -> usize {
        self.weights.len()
    }

    fn cost(&self, elements: &[usize]) -> f64 {
        elements.iter().map(|&i| self.values[i]).sum()
    }

    fn is_feasible(&self, solution: &Solution) -> bool {
        self.weight(solution) <= self.capacity
    }

    fn find_forbidden_value(&self, solution: &Solution) -> Option<usize> {
        if self.is_feasible(solution) {
            return None;
        }
        solution
            .elements
            .iter()
            .copied()
            .max_by(|&a, &b| self.weights[a].total_cmp(&self.weights[b]))
    }
}

/// No chromosome is ever feasible.
#[derive(Debug, Clone)]
pub struct Hopeless {
    pub size: usize,
}

impl Evaluator for Hopeless {
    type Gene = u8;

    fn domain_size(&self) -> usize {
        self.size
    }

    fn cost(&self, elements: &[usize]) -> f64 {
        elements.len() as f64
    }

    fn is_feasible(&self, _solution: &Solution) -> bool {
        false
    }

    fn find_forbidden_value(&self, _solution: &Solution) -> Option<usize> {
        Some(0)
    }
}

/// Feasible with at most two selected loci; cost is the sum of `locus + 1`.
#[derive(Debug, Clone)]
pub struct PairLimit {
    pub size: usize,
}

impl Evaluator for PairLimit {
    type Gene = u8;

    fn domain_size(&self) -> usize {
        self.size
    }

    fn cost(&self, elements: &[usize]) -> f64 {
        elements.iter().map(|&e| (e + 1) as f64).sum()
    }

    fn is_feasible(&self, solution: &Solution) -> bool {
        solution.len() <= 2
    }
}
