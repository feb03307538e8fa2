//! Draw sources for pinning operator behaviour in unit tests.

use std::collections::VecDeque;

use crate::rng::Random;

/// Replays fixed integer and real draws in order.
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

    pub fn ints(ints: Vec<usize>) -> Self {
        Self::new(ints, Vec::new())
    }

    pub fn reals(reals: Vec<f64>) -> Self {
        Self::new(Vec::new(), reals)
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

/// Forwards draws to an inner source and remembers every integer drawn.
#[derive(Debug)]
pub struct RecordingRandom<R: Random> {
    inner: R,
    pub ints: Vec<usize>,
}

impl<R: Random> RecordingRandom<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            ints: Vec::new(),
        }
    }
}

impl<R: Random> Random for RecordingRandom<R> {
    fn uniform_int(&mut self, bound: usize) -> usize {
        let value = self.inner.uniform_int(bound);
        self.ints.push(value);
        value
    }

    fn uniform_real(&mut self) -> f64 {
        self.inner.uniform_real()
    }
}
