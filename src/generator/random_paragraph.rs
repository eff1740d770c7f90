use rand::Rng;

use super::random_sentences::RandomSentences;
use super::{GeneratorError, MAX_RETRIES, clamp_probability};
use crate::domain::{Noun, Paragraph, Sentence, StatusTag, Tags, VerbGroup, Word};

/// Raw paragraphs built from chained or pooled subjects.
#[derive(Debug, Clone)]
pub struct RandomParagraph {
  p_pronoun: f64,
  sentences: RandomSentences,
}

impl RandomParagraph {
  pub fn new(p_pronoun: f64, verbs: Vec<VerbGroup>, nouns: Vec<Noun>) -> Result<Self, GeneratorError> {
    Ok(Self {
      p_pronoun: clamp_probability(p_pronoun),
      sentences: RandomSentences::new(verbs, nouns)?,
    })
  }

  /// Subjects drawn uniformly from a pool of `pool_size` distinct subjects.
  pub fn create_pool_paragraph<R: Rng + ?Sized>(
    &self,
    pool_size: usize,
    num_sentences: usize,
    rng: &mut R,
  ) -> Result<Paragraph, GeneratorError> {
    let pool = self.get_subject_pool(pool_size, rng)?;
    let mut sentences = Vec::with_capacity(num_sentences);
    if !pool.is_empty() {
      for _ in 0..num_sentences {
        let subject = pool[rng.random_range(0..pool.len())].clone();
        sentences.push(self.sentences.sentence(subject, self.p_pronoun, rng));
      }
    }
    tracing::debug!("Created pool paragraph: {} sentences, pool of {}", sentences.len(), pool_size);
    Ok(raw(sentences))
  }

  pub fn get_subject_pool<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Result<Vec<Word>, GeneratorError> {
    let max_attempts = MAX_RETRIES + size;
    let mut pool: Vec<Word> = Vec::with_capacity(size);
    let mut attempts = 0;
    while pool.len() < size {
      if attempts >= max_attempts {
        return Err(GeneratorError::PoolTooSmall {
          requested: size,
          found: pool.len(),
        });
      }
      let subject = self.sentences.subject(self.p_pronoun, rng);
      if !pool.contains(&subject) {
        pool.push(subject);
      }
      attempts += 1;
    }
    Ok(pool)
  }

  /// Each subject continues from the previous sentence's last word before
  /// the ending mark.
  pub fn create_chain_paragraph<R: Rng + ?Sized>(&self, num_sentences: usize, rng: &mut R) -> Paragraph {
    let mut sentences: Vec<Sentence> = Vec::with_capacity(num_sentences);
    let mut subject = self.sentences.subject(self.p_pronoun, rng);
    for _ in 0..num_sentences {
      let sentence = self.sentences.sentence(subject, self.p_pronoun, rng);
      subject = self.next_subject(&sentence, rng);
      sentences.push(sentence);
    }
    tracing::debug!("Created chain paragraph: {} sentences", sentences.len());
    raw(sentences)
  }

  fn next_subject<R: Rng + ?Sized>(&self, sentence: &Sentence, rng: &mut R) -> Word {
    match sentence.get(-2) {
      Some(Word::Pronoun(pronoun)) => Word::Pronoun(pronoun.subject()),
      Some(Word::Noun(noun)) => Word::Noun(noun.clone()),
      _ => self.sentences.subject(self.p_pronoun, rng),
    }
  }
}

fn raw(sentences: Vec<Sentence>) -> Paragraph {
  Paragraph::with_tags(sentences, Tags::from([StatusTag::Raw]))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{BasicWord, Pronoun, Verb};
  use rand::SeedableRng;
  use rand_chacha::ChaCha8Rng;

  fn nouns() -> Vec<Noun> {
    vec![Noun::new("dog"), Noun::new("cat"), Noun::uncountable_noun("water"), Noun::proper_noun("Joe", false)]
  }

  fn verbs() -> Vec<VerbGroup> {
    vec![
      VerbGroup::new(Verb::new("like"), None, None, 1),
      VerbGroup::new(Verb::with_irregular_past("go", "went"), Some(BasicWord::preposition("with")), None, 1),
    ]
  }

  #[test]
  fn test_chain_paragraph_is_raw_and_sized() {
    let generator = RandomParagraph::new(0.3, verbs(), nouns()).unwrap();
    let paragraph = generator.create_chain_paragraph(10, &mut ChaCha8Rng::seed_from_u64(3));
    assert_eq!(paragraph.len(), 10);
    assert_eq!(paragraph.tags(), &Tags::from([StatusTag::Raw]));
  }

  #[test]
  fn test_chain_paragraph_links_object_to_next_subject() {
    let generator = RandomParagraph::new(0.5, verbs(), nouns()).unwrap();
    let paragraph = generator.create_chain_paragraph(20, &mut ChaCha8Rng::seed_from_u64(11));
    for pair in paragraph.sentence_list().windows(2) {
      let expected = match pair[0].get(-2) {
        Some(Word::Pronoun(pronoun)) => Word::Pronoun(pronoun.subject()),
        Some(other) => other.clone(),
        None => continue,
      };
      assert_eq!(pair[1].get(0), Some(&expected));
    }
  }

  #[test]
  fn test_chain_paragraph_is_reproducible_with_seed() {
    let generator = RandomParagraph::new(0.3, verbs(), nouns()).unwrap();
    let a = generator.create_chain_paragraph(8, &mut ChaCha8Rng::seed_from_u64(99));
    let b = generator.create_chain_paragraph(8, &mut ChaCha8Rng::seed_from_u64(99));
    assert_eq!(a, b);
  }

  #[test]
  fn test_pool_paragraph_uses_pool_subjects() {
    let generator = RandomParagraph::new(0.0, verbs(), nouns()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let paragraph = generator.create_pool_paragraph(2, 15, &mut rng).unwrap();
    assert_eq!(paragraph.len(), 15);
    let mut subjects: Vec<&Word> = paragraph.sentence_list().iter().filter_map(|s| s.get(0)).collect();
    subjects.dedup();
    let mut distinct: Vec<&Word> = Vec::new();
    for subject in subjects {
      if !distinct.contains(&subject) {
        distinct.push(subject);
      }
    }
    assert!(distinct.len() <= 2);
  }

  #[test]
  fn test_pool_too_small() {
    let generator = RandomParagraph::new(0.0, verbs(), vec![Noun::new("dog")]).unwrap();
    let err = generator
      .create_pool_paragraph(2, 5, &mut ChaCha8Rng::seed_from_u64(1))
      .unwrap_err();
    assert_eq!(err, GeneratorError::PoolTooSmall { requested: 2, found: 1 });
  }

  #[test]
  fn test_pool_of_pronouns_is_distinct() {
    let generator = RandomParagraph::new(1.0, verbs(), nouns()).unwrap();
    let pool = generator.get_subject_pool(5, &mut ChaCha8Rng::seed_from_u64(2)).unwrap();
    assert_eq!(pool.len(), 5);
    for (idx, subject) in pool.iter().enumerate() {
      assert!(!pool[idx + 1..].contains(subject));
      assert!(matches!(subject, Word::Pronoun(p) if *p == p.subject()));
    }
    assert!(!pool.contains(&Word::Pronoun(Pronoun::Me)));
  }
}
