//! End-to-end generation: word lists and settings in, answer and error
//! paragraphs out.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{GeneratorConfig, ParagraphType, Tense};
use crate::connector::convert_paragraph;
use crate::domain::{Paragraph, StatusTag};
use crate::error_maker::ErrorMaker;
use crate::generator::{GeneratorError, PluralsAssignment, RandomParagraph, assign_random_negatives};
use crate::grammarizer::Grammarizer;
use crate::word_lists::WordListSource;

/// One exercise: the grammatical answer and the same paragraph with errors.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedParagraphs {
  pub answer: Paragraph,
  pub error: Paragraph,
  pub error_count: usize,
}

impl GeneratedParagraphs {
  /// Answer text followed by the number of errors to find.
  pub fn answer_text(&self) -> String {
    format!("{} -- error count: {}", convert_paragraph(&self.answer), self.error_count)
  }

  pub fn error_text(&self) -> String {
    convert_paragraph(&self.error)
  }
}

pub struct ParagraphsGenerator<W: WordListSource> {
  config: GeneratorConfig,
  word_lists: W,
}

impl<W: WordListSource> ParagraphsGenerator<W> {
  pub fn new(config: GeneratorConfig, word_lists: W) -> Self {
    Self { config, word_lists }
  }

  pub fn config(&self) -> &GeneratorConfig {
    &self.config
  }

  pub fn word_lists(&self) -> &W {
    &self.word_lists
  }

  /// A generator seeded from `seed` in the config, or from the thread rng.
  pub fn rng(&self) -> ChaCha8Rng {
    match self.config.seed {
      Some(seed) => ChaCha8Rng::seed_from_u64(seed),
      None => ChaCha8Rng::from_rng(&mut rand::rng()),
    }
  }

  /// A grammatical paragraph in the configured tense, tagged GRAMMATICAL.
  pub fn create_paragraph<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Paragraph, GeneratorError> {
    let generator = RandomParagraph::new(
      self.config.probability_pronoun,
      self.word_lists.verbs(),
      self.word_lists.nouns(),
    )?;

    let raw = match self.config.paragraph_type {
      ParagraphType::Chain => generator.create_chain_paragraph(self.config.paragraph_size, rng),
      ParagraphType::Pool => {
        let pool_size = self.config.pool_size.ok_or(GeneratorError::MissingPoolSize)?;
        generator.create_pool_paragraph(pool_size, self.config.paragraph_size, rng)?
      }
    };

    let with_plurals = PluralsAssignment::new(&raw).assign_random_plurals(self.config.probability_plural_noun, rng);
    let with_negatives = assign_random_negatives(&with_plurals, self.config.probability_negative_verb, rng);

    let grammarizer = Grammarizer::new(with_negatives);
    let grammatical = match self.config.tense {
      Tense::SimplePresent => grammarizer.grammarize_to_present_tense(),
      Tense::SimplePast => grammarizer.grammarize_to_past_tense(),
    };
    let tags = grammatical.tags().add(StatusTag::Grammatical);
    Ok(grammatical.set_tags(tags))
  }

  /// Runs the enabled error passes in their fixed order.
  pub fn create_answer_and_error<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GeneratedParagraphs, GeneratorError> {
    let answer = self.create_paragraph(rng)?;
    let config = &self.config;
    let p_error = config.error_probability;

    let mut maker = ErrorMaker::new(answer.clone());
    if config.noun_errors {
      maker = maker.noun_errors(p_error, rng);
    }
    if config.pronoun_errors {
      maker = maker.pronoun_errors(p_error, rng);
    }
    if config.verb_errors {
      maker = maker.verb_errors(p_error, rng);
    }
    if config.is_do_errors {
      maker = maker.is_do_errors(p_error, rng);
    }
    if config.preposition_transpose_errors {
      maker = maker.preposition_errors(p_error, rng);
    }
    if config.punctuation_errors {
      maker = maker.punctuation_errors(p_error, rng);
    }

    let error_count = maker.error_count();
    Ok(GeneratedParagraphs {
      answer,
      error: maker.into_paragraph(),
      error_count,
    })
  }

  /// `num_paragraphs` independent exercises.
  pub fn generate_paragraphs<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<GeneratedParagraphs>, GeneratorError> {
    let generated = (0..self.config.num_paragraphs)
      .map(|_| self.create_answer_and_error(rng))
      .collect::<Result<Vec<_>, _>>()?;
    tracing::info!(
      "Generated {} paragraphs ({} {} sentences each, {})",
      generated.len(),
      self.config.paragraph_size,
      self.config.paragraph_type,
      self.config.tense
    );
    Ok(generated)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::answer_checker::AnswerChecker;
  use crate::domain::{BasicWord, Noun, Verb, VerbGroup};
  use crate::word_lists::WordLists;

  struct DummyWordLists;

  impl WordListSource for DummyWordLists {
    fn nouns(&self) -> Vec<Noun> {
      vec![Noun::new("dog"), Noun::proper_noun("Joe", false), Noun::uncountable_noun("water")]
    }

    fn verbs(&self) -> Vec<VerbGroup> {
      vec![
        VerbGroup::new(
          Verb::new("go"),
          Some(BasicWord::preposition("with")),
          Some(BasicWord::particle("away")),
          1,
        ),
        VerbGroup::new(Verb::with_irregular_past("eat", "ate"), None, None, 1),
      ]
    }
  }

  fn config() -> GeneratorConfig {
    GeneratorConfig {
      paragraph_size: 5,
      num_paragraphs: 3,
      ..GeneratorConfig::default()
    }
  }

  fn no_errors() -> GeneratorConfig {
    GeneratorConfig {
      error_probability: 0.0,
      ..config()
    }
  }

  #[test]
  fn test_new() {
    let generator = ParagraphsGenerator::new(config(), DummyWordLists);
    assert_eq!(generator.config(), &config());
    assert_eq!(generator.word_lists().nouns(), DummyWordLists.nouns());
    assert_eq!(generator.word_lists().verbs(), DummyWordLists.verbs());
  }

  #[test]
  fn test_create_paragraph_is_grammatical() {
    let generator = ParagraphsGenerator::new(config(), DummyWordLists);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let paragraph = generator.create_paragraph(&mut rng).unwrap();
    assert_eq!(paragraph.len(), 5);
    assert!(paragraph.tags().has(StatusTag::Grammatical));
    assert!(paragraph.tags().has(StatusTag::SimplePresent));
    assert!(!paragraph.tags().has(StatusTag::Raw));
  }

  #[test]
  fn test_past_tense_pool_paragraph() {
    let past_pool = GeneratorConfig {
      tense: Tense::SimplePast,
      paragraph_type: ParagraphType::Pool,
      pool_size: Some(2),
      ..config()
    };
    let generator = ParagraphsGenerator::new(past_pool, DummyWordLists);
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let paragraph = generator.create_paragraph(&mut rng).unwrap();
    assert_eq!(paragraph.len(), 5);
    assert!(paragraph.tags().has(StatusTag::SimplePast));
  }

  #[test]
  fn test_pool_without_size() {
    let missing = GeneratorConfig {
      paragraph_type: ParagraphType::Pool,
      pool_size: None,
      ..config()
    };
    let generator = ParagraphsGenerator::new(missing, DummyWordLists);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(generator.create_paragraph(&mut rng), Err(GeneratorError::MissingPoolSize));
  }

  #[test]
  fn test_empty_word_lists() {
    let generator = ParagraphsGenerator::new(config(), WordLists::default());
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(generator.generate_paragraphs(&mut rng), Err(GeneratorError::EmptyVerbList));
  }

  #[test]
  fn test_no_errors_leaves_answer_untouched() {
    let generator = ParagraphsGenerator::new(no_errors(), DummyWordLists);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for generated in generator.generate_paragraphs(&mut rng).unwrap() {
      assert_eq!(generated.error_count, 0);
      assert_eq!(generated.error.sentence_list(), generated.answer.sentence_list());
      assert_eq!(
        generated.answer_text(),
        format!("{} -- error count: 0", generated.error_text())
      );
    }
  }

  #[test]
  fn test_answer_text_checks_as_correct() {
    let generator = ParagraphsGenerator::new(no_errors(), DummyWordLists);
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    for generated in generator.generate_paragraphs(&mut rng).unwrap() {
      let checker = AnswerChecker::new(&generated.error_text(), generated.answer.clone());
      assert!(checker.is_submission_correct(), "{}", generated.error_text());
      assert_eq!(checker.count_word_errors(), 0);
    }
  }

  #[test]
  fn test_all_passes_at_certain_error() {
    let certain = GeneratorConfig {
      error_probability: 1.0,
      ..config()
    };
    let generator = ParagraphsGenerator::new(certain, DummyWordLists);
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let generated = generator.create_answer_and_error(&mut rng).unwrap();

    assert!(generated.error_count > 0);
    assert_ne!(generated.error, generated.answer);
    let tags = generated.error.tags();
    for tag in [
      StatusTag::NounErrors,
      StatusTag::PronounErrors,
      StatusTag::VerbErrors,
      StatusTag::IsDoErrors,
      StatusTag::PrepositionErrors,
      StatusTag::PunctuationErrors,
    ] {
      assert!(tags.has(tag), "{}", tag);
    }
    assert!(!tags.has(StatusTag::Grammatical));
    assert!(generated.answer.tags().has(StatusTag::Grammatical));
  }

  #[test]
  fn test_disabled_passes_leave_no_tags() {
    let only_punctuation = GeneratorConfig {
      error_probability: 1.0,
      noun_errors: false,
      pronoun_errors: false,
      verb_errors: false,
      is_do_errors: false,
      preposition_transpose_errors: false,
      ..config()
    };
    let generator = ParagraphsGenerator::new(only_punctuation, DummyWordLists);
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let generated = generator.create_answer_and_error(&mut rng).unwrap();
    assert_eq!(generated.error_count, 5);
    let tags = generated.error.tags();
    assert!(tags.has(StatusTag::PunctuationErrors));
    assert!(!tags.has(StatusTag::NounErrors));
    assert!(!tags.has(StatusTag::IsDoErrors));
  }

  #[test]
  fn test_seed_reproduces_output() {
    let seeded = GeneratorConfig {
      seed: Some(99),
      ..config()
    };
    let generator = ParagraphsGenerator::new(seeded, WordLists::bundled());
    let first = generator.generate_paragraphs(&mut generator.rng()).unwrap();
    let second = generator.generate_paragraphs(&mut generator.rng()).unwrap();
    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
  }
}
