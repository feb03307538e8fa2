use crate::chromosome::{Chromosome, Gene};
use crate::crossover::CrossoverStrategy;
use crate::rng::Random;

/// Two-point crossover.
///
/// Draws `crosspoint1` uniformly in `[0, n]` and `crosspoint2` uniformly in
/// `[crosspoint1, n]`, once per mating. Loci inside `[crosspoint1, crosspoint2)`
/// are exchanged between the offspring; the rest stay with their same-index parent.
///
/// ```text
///                        P1            P2
///    Parent 1: X1 ... Xi | Xi+1 ... Xj | Xj+1 ... Xn
///    Parent 2: Y1 ... Yi | Yi+1 ... Yj | Yj+1 ... Yn
///
/// Offspring 1: X1 ... Xi | Yi+1 ... Yj | Xj+1 ... Xn
/// Offspring 2: Y1 ... Yi | Xi+1 ... Xj | Yj+1 ... Yn
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoPointCrossover;

impl TwoPointCrossover {
    /// Exchanges the window `[crosspoint1, crosspoint2)` between two parents.
    pub fn exchange<G: Gene>(
        parent1: &Chromosome<G>,
        parent2: &Chromosome<G>,
        crosspoint1: usize,
        crosspoint2: usize,
    ) -> (Chromosome<G>, Chromosome<G>) {
        let mut offspring1 = Vec::with_capacity(parent1.len());
        let mut offspring2 = Vec::with_capacity(parent2.len());

        for locus in 0..parent1.len() {
            if (crosspoint1..crosspoint2).contains(&locus) {
                offspring1.push(parent2[locus]);
                offspring2.push(parent1[locus]);
            } else {
                offspring1.push(parent1[locus]);
                offspring2.push(parent2[locus]);
            }
        }

        (offspring1.into(), offspring2.into())
    }
}

impl<G: Gene> CrossoverStrategy<G> for TwoPointCrossover {
    fn mate<R: Random>(
        &self,
        parent1: &Chromosome<G>,
        parent2: &Chromosome<G>,
        rng: &mut R,
    ) -> (Chromosome<G>, Chromosome<G>) {
        let size = parent1.len();
        let crosspoint1 = rng.uniform_int(size + 1);
        let crosspoint2 = crosspoint1 + rng.uniform_int(size + 1 - crosspoint1);

        Self::exchange(parent1, parent2, crosspoint1, crosspoint2)
    }
}
