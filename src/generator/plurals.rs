use rand::Rng;

use super::happens;
use crate::domain::{Noun, Paragraph, StatusTag, Word};

/// Distinct countable nouns in order of first appearance, in basic form.
pub fn get_countable_nouns(paragraph: &Paragraph) -> Vec<Noun> {
  let mut nouns: Vec<Noun> = Vec::new();
  for noun in paragraph.all_words().filter_map(Word::as_noun) {
    if !noun.is_countable() {
      continue;
    }
    let basic = noun.to_basic_noun();
    if !nouns.contains(&basic) {
      nouns.push(basic);
    }
  }
  nouns
}

/// Makes chosen nouns plural at every position they occur.
#[derive(Debug, Clone)]
pub struct PluralsAssignment {
  raw: Paragraph,
}

impl PluralsAssignment {
  /// Strips existing plurals from countable nouns first, so assignment
  /// always starts from an all-singular paragraph.
  pub fn new(paragraph: &Paragraph) -> Self {
    let mut raw = paragraph.set_tags(paragraph.tags().remove(StatusTag::HasPlurals));
    for (s_index, w_index, word) in paragraph.indexed_all_words() {
      if let Word::Noun(noun) = word {
        if noun.is_countable() {
          raw = raw.set(s_index, w_index, Word::Noun(noun.to_basic_noun()));
        }
      }
    }
    Self { raw }
  }

  pub fn raw(&self) -> &Paragraph {
    &self.raw
  }

  pub fn assign_plural(&self, nouns: &[Noun]) -> Paragraph {
    let mut paragraph = self.raw.clone();
    for noun in nouns {
      for (s_index, w_index) in self.raw.find(&Word::Noun(noun.clone())) {
        if let Some(Word::Noun(found)) = self.raw.get_sentence(s_index).and_then(|s| s.get(w_index as isize)) {
          paragraph = paragraph.set(s_index, w_index, Word::Noun(found.plural()));
        }
      }
    }
    paragraph.set_tags(paragraph.tags().add(StatusTag::HasPlurals))
  }

  /// Each distinct countable noun is pluralized with probability `p_plural`.
  pub fn assign_random_plurals<R: Rng + ?Sized>(&self, p_plural: f64, rng: &mut R) -> Paragraph {
    let chosen: Vec<Noun> = get_countable_nouns(&self.raw)
      .into_iter()
      .filter(|_| happens(rng, p_plural))
      .collect();
    tracing::debug!("Pluralizing {} nouns", chosen.len());
    self.assign_plural(&chosen)
  }
}
