use alloc::vec::Vec;

use crate::*;

/// Strategy for drawing a secret code. Kept behind a trait so tests and
/// callers can supply deterministic sources.
pub trait CodeGenerator {
    fn generate(self, config: JottoConfig) -> Vec<Peg>;
}

/// Draws `code_length` pegs uniformly at random, with replacement, from the
/// eligible code-peg set.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomCodeGenerator {
    seed: u64,
}

impl RandomCodeGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(self, config: JottoConfig) -> Vec<Peg> {
        use rand::prelude::*;

        let pool: Vec<Peg> = Peg::ALL
            .into_iter()
            .filter(|&peg| config.is_code_peg(peg))
            .collect();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        (0..config.code_length)
            .map(|_| pool[rng.random_range(0..pool.len())])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_codes_of_configured_length() {
        let config = JottoConfig::new(4, 6, false);

        let code = RandomCodeGenerator::new(7).generate(config);

        assert_eq!(code.len(), 4);
    }

    #[test]
    fn same_seed_generates_same_code() {
        let config = JottoConfig::new(6, 6, false);

        let first = RandomCodeGenerator::new(42).generate(config);
        let second = RandomCodeGenerator::new(42).generate(config);

        assert_eq!(first, second);
    }

    #[test]
    fn scoring_pegs_are_excluded_unless_configured_in() {
        let restricted = JottoConfig::new(16, 6, false);
        for seed in 0..64 {
            let code = RandomCodeGenerator::new(seed).generate(restricted);
            assert!(
                code.iter()
                    .all(|&peg| !matches!(peg, Peg::Black | Peg::White)),
                "seed {seed} emitted a scoring peg"
            );
        }
    }

    #[test]
    fn engine_accepts_generated_codes() {
        let mut engine = JottoEngine::new(JottoConfig::new(4, 6, true));

        engine.set_code_with(RandomCodeGenerator::new(1)).unwrap();

        assert_eq!(engine.code().len(), 4);
        assert_eq!(engine.state(), JottoState::Active);
    }
}
