use crate::chromosome::{Gene, Population};
use crate::error::{GeneticError, Result};
use crate::rng::Random;
use crate::selection::selection_strategy::{check_inputs, SelectionStrategy};

/// How stochastic universal sampling treats fitness values that cannot be used as
/// selection proportions directly.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SusScaling {
    /// Reject negative fitness values and a non-positive fitness total.
    #[default]
    FailFast,
    /// Shift all fitness values by the population minimum when it is negative.
    /// A population whose shifted fitness sums to zero is sampled uniformly.
    ShiftToNonNegative,
}

/// Stochastic universal sampling with two evenly spaced pointers.
///
/// Each round draws one pointer `p1` uniformly in `[0, 1)` and derives
/// `p2 = p1 + 0.5`, wrapped back into `[0, 1)`. A single scan over the cumulative
/// fitness distribution appends every chromosome whose interval `[start, end)`
/// contains a pointer, twice if it contains both. Rounds repeat until enough
/// parents are collected; the scan stops as soon as the last one is appended.
///
/// # Examples
///
/// ```
/// use evogen::chromosome::{Chromosome, Population};
/// use evogen::rng::RandomNumberGenerator;
/// use evogen::selection::{SelectionStrategy, StochasticUniversalSampling, SusScaling};
///
/// let population: Population<u8> = vec![
///     Chromosome::new(vec![1, 0]),
///     Chromosome::new(vec![0, 1]),
/// ]
/// .into();
/// let mut rng = RandomNumberGenerator::from_seed(3);
///
/// let sus = StochasticUniversalSampling::new(SusScaling::ShiftToNonNegative);
/// let parents = sus.select(&population, &[-5000.0, 3.0], 4, &mut rng).unwrap();
///
/// // After shifting, the infeasible chromosome has zero width and is never picked.
/// assert!(parents.iter().all(|parent| parent == &population[1]));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct StochasticUniversalSampling {
    scaling: SusScaling,
}

impl StochasticUniversalSampling {
    pub fn new(scaling: SusScaling) -> Self {
        Self { scaling }
    }

    pub fn scaling(&self) -> SusScaling {
        self.scaling
    }

    /// Builds the cumulative normalized-fitness distribution, in population order.
    ///
    /// The returned value at index `i` is the end of chromosome `i`'s interval; the
    /// last end is pinned to exactly `1.0`.
    ///
    /// # Errors
    ///
    /// With [`SusScaling::FailFast`], returns [`GeneticError::Selection`] if any fitness
    /// is negative or if the fitness total is not positive.
    pub fn cumulative_distribution(&self, fitness: &[f64]) -> Result<Vec<f64>> {
        let weights = match self.scaling {
            SusScaling::FailFast => {
                if let Some((idx, value)) = fitness.iter().enumerate().find(|(_, &f)| f < 0.0) {
                    return Err(GeneticError::Selection(format!(
                        "Stochastic universal sampling requires non-negative fitness, found {} at index {}",
                        value, idx
                    )));
                }
                fitness.to_vec()
            }
            SusScaling::ShiftToNonNegative => {
                let min = fitness.iter().cloned().fold(f64::INFINITY, f64::min);
                if min < 0.0 {
                    fitness.iter().map(|&f| f - min).collect()
                } else {
                    fitness.to_vec()
                }
            }
        };

        let mut total: f64 = weights.iter().sum();
        let weights = if total > 0.0 {
            weights
        } else if self.scaling == SusScaling::ShiftToNonNegative {
            total = weights.len() as f64;
            vec![1.0; weights.len()]
        } else {
            return Err(GeneticError::Selection(format!(
                "Stochastic universal sampling requires a positive fitness total, got {}",
                total
            )));
        };

        let mut cumulative = Vec::with_capacity(weights.len());
        let mut end = 0.0;
        for weight in &weights {
            end += weight / total;
            cumulative.push(end);
        }

        // Rounding must not leave a gap below 1.0 that no chromosome covers.
        if let Some(last) = cumulative.last_mut() {
            *last = 1.0;
        }

        Ok(cumulative)
    }
}

impl<G: Gene> SelectionStrategy<G> for StochasticUniversalSampling {
    fn select<R: Random>(
        &self,
        population: &Population<G>,
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut R,
    ) -> Result<Population<G>> {
        check_inputs(population, fitness)?;
        let cumulative = self.cumulative_distribution(fitness)?;

        let mut selected = Population::with_capacity(num_to_select);
        while selected.len() < num_to_select {
            let pointer1 = rng.uniform_real();
            let mut pointer2 = pointer1 + 0.5;
            if pointer2 >= 1.0 {
                pointer2 -= 1.0;
            }

            let mut start = 0.0;
            for (idx, &end) in cumulative.iter().enumerate() {
                for pointer in [pointer1, pointer2] {
                    if start <= pointer && pointer < end && selected.len() < num_to_select {
                        selected.push(population[idx].clone());
                    }
                }

                if selected.len() == num_to_select {
                    break;
                }
                start = end;
            }
        }

        Ok(selected)
    }
}
