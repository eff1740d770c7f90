use rand::Rng;

use super::happens;
use crate::domain::{Paragraph, StatusTag, Word};

/// Every verb occurrence is made negative independently with `p_negative`.
pub fn assign_random_negatives<R: Rng + ?Sized>(paragraph: &Paragraph, p_negative: f64, rng: &mut R) -> Paragraph {
  let mut result = paragraph.clone();
  for (s_index, w_index, word) in paragraph.indexed_all_words() {
    if let Word::Verb(verb) = word {
      if happens(rng, p_negative) {
        result = result.set(s_index, w_index, Word::Verb(verb.negative()));
      }
    }
  }
  result.set_tags(result.tags().add(StatusTag::HasNegatives))
}
