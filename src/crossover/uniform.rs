use crate::chromosome::{Chromosome, Gene};
use crate::crossover::CrossoverStrategy;
use crate::rng::Random;

/// Uniform crossover.
///
/// Flips one fair coin per locus per mating; on heads the two offspring exchange
/// their genes at that locus, on tails each keeps its same-index parent's gene.
///
/// ```text
///    Coins:       0  0  1  0  1  0
///    Parent 1:    X1 X2 X3 X4 X5 X6
///    Parent 2:    Y1 Y2 Y3 Y4 Y5 Y6
///
///    Offspring 1: X1 X2 Y3 X4 Y5 X6
///    Offspring 2: Y1 Y2 X3 Y4 X5 Y6
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCrossover;

impl<G: Gene> CrossoverStrategy<G> for UniformCrossover {
    fn mate<R: Random>(
        &self,
        parent1: &Chromosome<G>,
        parent2: &Chromosome<G>,
        rng: &mut R,
    ) -> (Chromosome<G>, Chromosome<G>) {
        let mut offspring1 = Vec::with_capacity(parent1.len());
        let mut offspring2 = Vec::with_capacity(parent2.len());

        for locus in 0..parent1.len() {
            if rng.is_head_not_tails() {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRandom;

    fn parents() -> (Chromosome<u8>, Chromosome<u8>) {
        (
            Chromosome::new(vec![0, 0, 0, 0]),
            Chromosome::new(vec![1, 1, 1, 1]),
        )
    }

    #[test]
    fn test_heads_swap_the_locus() {
        let (zeros, ones) = parents();
        let mut rng = ScriptedRandom::ints(vec![0, 1, 1, 0]);

        let (offspring1, offspring2) = UniformCrossover.mate(&zeros, &ones, &mut rng);

        assert!(rng.is_exhausted());
        assert_eq!(offspring1.genes(), &[0, 1, 1, 0]);
        assert_eq!(offspring2.genes(), &[1, 0, 0, 1]);
    }

    #[test]
    fn test_trailing_heads_reach_the_last_locus() {
        let (zeros, ones) = parents();
        let mut rng = ScriptedRandom::ints(vec![0, 1, 1, 1]);

        let (offspring1, offspring2) = UniformCrossover.mate(&zeros, &ones, &mut rng);

        assert_eq!(offspring1.genes(), &[0, 1, 1, 1]);
        assert_eq!(offspring2.genes(), &[1, 0, 0, 0]);
    }

    #[test]
    fn test_all_tails_copies_parents() {
        let (zeros, ones) = parents();
        let mut rng = ScriptedRandom::ints(vec![0, 0, 0, 0]);

        let (offspring1, offspring2) = UniformCrossover.mate(&zeros, &ones, &mut rng);

        assert_eq!(offspring1, zeros);
        assert_eq!(offspring2, ones);
    }
}
