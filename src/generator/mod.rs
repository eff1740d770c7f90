//! Raw paragraph generation and the randomized plural/negative passes.
//!
//! Every function that draws random numbers takes the generator explicitly,
//! so a seeded `ChaCha8Rng` reproduces a paragraph exactly.

pub mod negatives;
pub mod plurals;
pub mod random_paragraph;
pub mod random_sentences;

use rand::Rng;

pub use negatives::assign_random_negatives;
pub use plurals::{PluralsAssignment, get_countable_nouns};
pub use random_paragraph::RandomParagraph;
pub use random_sentences::{RandomSentences, assign_objects};

/// Retry ceiling for the resampling loops.
pub const MAX_RETRIES: usize = 100;

/// Probabilities are clamped to [0, 1], never rejected.
pub fn clamp_probability(p: f64) -> f64 {
  if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

/// One Bernoulli draw.
pub fn happens<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
  rng.random::<f64>() < clamp_probability(p)
}

/// Failures while building a raw paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
  EmptyVerbList,
  EmptyNounList,
  PoolTooSmall { requested: usize, found: usize },
  MissingPoolSize,
}

impl std::fmt::Display for GeneratorError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      GeneratorError::EmptyVerbList => write!(f, "There are no verbs in the verb list"),
      GeneratorError::EmptyNounList => write!(f, "There are no nouns in any of the noun lists"),
      GeneratorError::PoolTooSmall { requested, found } => write!(
        f,
        "Could only find {} unique subjects for a pool of {}; add more words to the word lists",
        found, requested
      ),
      GeneratorError::MissingPoolSize => write!(f, "pool_size is required when paragraph_type is pool"),
    }
  }
}

impl std::error::Error for GeneratorError {}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::SeedableRng;
  use rand_chacha::ChaCha8Rng;

  #[test]
  fn test_clamp_probability() {
    assert_eq!(clamp_probability(-1.0), 0.0);
    assert_eq!(clamp_probability(1.5), 1.0);
    assert_eq!(clamp_probability(0.3), 0.3);
    assert_eq!(clamp_probability(f64::NAN), 0.0);
  }

  #[test]
  fn test_happens_extremes() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    assert!((0..100).all(|_| happens(&mut rng, 1.0)));
    assert!((0..100).all(|_| !happens(&mut rng, 0.0)));
    assert!((0..100).all(|_| !happens(&mut rng, -3.0)));
  }

  #[test]
  fn test_error_messages() {
    let err = GeneratorError::PoolTooSmall { requested: 5, found: 2 };
    assert!(err.to_string().contains("pool of 5"));
  }
}
