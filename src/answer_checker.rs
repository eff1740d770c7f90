//! Scores a submission against the paragraph it was written from.
//!
//! The stored paragraph fixes which nouns were plural, but a learner may
//! pick either number for any countable noun as long as the rest of the
//! text agrees. The answer key is therefore rebuilt from what the
//! submission actually uses before comparing.

use crate::comparison::{ParagraphComparison, SentenceComparison, WordComparison};
use crate::domain::{Noun, Paragraph, StatusTag, Word, WordTag};
use crate::generator::{PluralsAssignment, get_countable_nouns};
use crate::grammarizer::Grammarizer;

#[derive(Debug, Clone)]
pub struct AnswerChecker {
  submission: String,
  original: Paragraph,
}

impl AnswerChecker {
  pub fn new(submission: &str, original: Paragraph) -> Self {
    Self {
      submission: submission.to_string(),
      original,
    }
  }

  pub fn submission(&self) -> &str {
    &self.submission
  }

  pub fn original(&self) -> &Paragraph {
    &self.original
  }

  pub fn is_submission_correct(&self) -> bool {
    self.count_sentence_errors() == 0
  }

  pub fn count_sentence_errors(&self) -> usize {
    self.get_sentence_hints().error_count
  }

  pub fn count_word_errors(&self) -> usize {
    self.get_word_hints().error_count
  }

  pub fn get_sentence_hints(&self) -> SentenceComparison {
    let hints = self.comparison().compare_by_sentences();
    tracing::debug!("Sentence check: {} errors", hints.error_count);
    hints
  }

  pub fn get_word_hints(&self) -> WordComparison {
    let hints = self.comparison().compare_by_words();
    tracing::debug!("Word check: {} errors", hints.error_count);
    hints
  }

  fn comparison(&self) -> ParagraphComparison {
    let answer = create_answer_paragraph(&self.submission, &self.original);
    ParagraphComparison::new(&answer, &self.submission)
  }
}

/// The answer key for `submission`: a countable noun is plural exactly when
/// its plural form appears anywhere in the submission text, then verbs and
/// articles are regrammarized in the original tense.
///
/// The plural test is plain substring containment, so a plural that happens
/// to be part of another word ("cats" in "bobcats") still counts.
pub fn create_answer_paragraph(submission: &str, original: &Paragraph) -> Paragraph {
  let lowered = submission.to_lowercase();
  let plurals: Vec<Noun> = get_countable_nouns(original)
    .into_iter()
    .filter(|noun| lowered.contains(&noun.plural().value().to_lowercase()))
    .collect();

  let with_plurals = PluralsAssignment::new(original).assign_plural(&plurals);
  let grammarizer = Grammarizer::new(revert_verbs(&with_plurals));
  if original.tags().has(StatusTag::SimplePast) {
    grammarizer.grammarize_to_past_tense()
  } else {
    grammarizer.grammarize_to_present_tense()
  }
}

/// Base form for every verb, keeping only negation.
fn revert_verbs(paragraph: &Paragraph) -> Paragraph {
  let mut reverted = paragraph.clone();
  for (s_index, w_index, word) in paragraph.indexed_all_words() {
    if let Word::Verb(verb) = word {
      let mut basic = verb.to_basic_verb();
      if verb.has_tag(WordTag::Negative) {
        basic = basic.negative();
      }
      reverted = reverted.set(s_index, w_index, Word::Verb(basic));
    }
  }
  reverted
}
