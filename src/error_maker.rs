//! Injects learner-style grammar mistakes into a grammatical paragraph.
//!
//! Each pass takes the maker by value and returns it, so passes chain:
//! `ErrorMaker::new(p).noun_errors(0.2, &mut rng).verb_errors(0.2, &mut rng)`.
//! A pass with a probability of zero or less changes nothing, tags included.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::domain::{BeVerb, Noun, Paragraph, Pronoun, Punctuation, Sentence, StatusTag, Verb, Word, WordTag};
use crate::generator::{clamp_probability, happens};
use crate::grammarizer::is_third_person_subject;

#[derive(Debug, Clone)]
pub struct ErrorMaker {
  paragraph: Paragraph,
  error_count: usize,
}

impl ErrorMaker {
  pub fn new(paragraph: Paragraph) -> Self {
    Self {
      paragraph,
      error_count: 0,
    }
  }

  pub fn paragraph(&self) -> &Paragraph {
    &self.paragraph
  }

  pub fn into_paragraph(self) -> Paragraph {
    self.paragraph
  }

  /// Words or sentences actually altered by the passes run so far.
  pub fn error_count(&self) -> usize {
    self.error_count
  }

  pub fn noun_errors<R: Rng + ?Sized>(self, p_error: f64, rng: &mut R) -> Self {
    self.word_pass(p_error, StatusTag::NounErrors, rng, |word, rng| match word {
      Word::Noun(noun) => Some(Word::Noun(make_noun_error(noun, rng))),
      _ => None,
    })
  }

  pub fn pronoun_errors<R: Rng + ?Sized>(self, p_error: f64, rng: &mut R) -> Self {
    self.word_pass(p_error, StatusTag::PronounErrors, rng, |word, _| match word {
      Word::Pronoun(pronoun) => Some(Word::Pronoun(swap_case_form(*pronoun))),
      Word::CapitalPronoun(pronoun) => Some(Word::CapitalPronoun(swap_case_form(*pronoun))),
      _ => None,
    })
  }

  pub fn verb_errors<R: Rng + ?Sized>(self, p_error: f64, rng: &mut R) -> Self {
    self.word_pass(p_error, StatusTag::VerbErrors, rng, |word, rng| match word {
      Word::Verb(verb) => Some(Word::Verb(make_verb_error(verb, rng))),
      _ => None,
    })
  }

  /// "I like" becomes "I am like": a form of "to be" carries the tense and
  /// negation and the main verb drops to its base form.
  pub fn is_do_errors<R: Rng + ?Sized>(self, p_error: f64, rng: &mut R) -> Self {
    self.sentence_pass(p_error, StatusTag::IsDoErrors, rng, |sentence, _| {
      let index = sentence.get_verb()?;
      let Some(Word::Verb(verb)) = sentence.get(index as isize) else {
        return None;
      };
      let be = match sentence.get(0) {
        Some(subject) if subject.as_pronoun() == Some(Pronoun::I) => BeVerb::Am,
        Some(subject) if is_third_person_subject(subject) => BeVerb::Is,
        _ => BeVerb::Are,
      };
      let mut replacement = make_is_do_error(&verb.de_capitalize(), be);
      if verb.is_capitalized() {
        if let Some(first) = replacement.first_mut() {
          *first = first.capitalize();
        }
      }
      Some(sentence.splice(index..index + 1, replacement))
    })
  }

  /// Moves the preposition and its object in front of the other satellites:
  /// "take the dog away with him" becomes "take with him the dog away".
  pub fn preposition_errors<R: Rng + ?Sized>(self, p_error: f64, rng: &mut R) -> Self {
    self.sentence_pass(p_error, StatusTag::PrepositionErrors, rng, |sentence, _| transpose_satellites(sentence))
  }

  /// Replaces the closing mark with a different one, or drops it.
  pub fn punctuation_errors<R: Rng + ?Sized>(self, p_error: f64, rng: &mut R) -> Self {
    self.sentence_pass(p_error, StatusTag::PunctuationErrors, rng, |sentence, rng| {
      let Some(Word::Punctuation(mark)) = sentence.get(-1) else {
        return None;
      };
      let others: Vec<Punctuation> = Punctuation::ALL.iter().copied().filter(|other| other != mark).collect();
      let replacement = *others.choose(rng)?;
      Some(sentence.set(sentence.len() - 1, Word::Punctuation(replacement)))
    })
  }

  fn word_pass<R, F>(self, p_error: f64, tag: StatusTag, rng: &mut R, mut make_error: F) -> Self
  where
    R: Rng + ?Sized,
    F: FnMut(&Word, &mut R) -> Option<Word>,
  {
    let p_error = clamp_probability(p_error);
    if p_error <= 0.0 {
      return self;
    }
    let mut paragraph = self.paragraph.clone();
    let mut changed = 0;
    for (s_index, w_index, word) in self.paragraph.indexed_all_words() {
      if !is_target(word) || !happens(rng, p_error) {
        continue;
      }
      if let Some(error) = make_error(word, rng) {
        if error != *word {
          paragraph = paragraph.set(s_index, w_index, error);
          changed += 1;
        }
      }
    }
    self.finish(paragraph, tag, changed)
  }

  fn sentence_pass<R, F>(self, p_error: f64, tag: StatusTag, rng: &mut R, mut make_error: F) -> Self
  where
    R: Rng + ?Sized,
    F: FnMut(&Sentence, &mut R) -> Option<Sentence>,
  {
    let p_error = clamp_probability(p_error);
    if p_error <= 0.0 {
      return self;
    }
    let mut paragraph = self.paragraph.clone();
    let mut changed = 0;
    for (s_index, sentence) in self.paragraph.sentence_list().iter().enumerate() {
      if !happens(rng, p_error) {
        continue;
      }
      if let Some(error) = make_error(sentence, rng) {
        if error != *sentence {
          paragraph = paragraph.set_sentence(s_index, error);
          changed += 1;
        }
      }
    }
    self.finish(paragraph, tag, changed)
  }

  fn finish(self, paragraph: Paragraph, tag: StatusTag, changed: usize) -> Self {
    tracing::debug!("{} pass altered {} places", tag, changed);
    let tags = paragraph.tags().add(tag).remove(StatusTag::Grammatical);
    Self {
      paragraph: paragraph.set_tags(tags),
      error_count: self.error_count + changed,
    }
  }
}

/// Word kinds a word-level pass may draw for. Other words consume no
/// randomness.
fn is_target(word: &Word) -> bool {
  matches!(
    word,
    Word::Noun(_) | Word::Verb(_) | Word::Pronoun(_) | Word::CapitalPronoun(_)
  )
}

fn swap_case_form(pronoun: Pronoun) -> Pronoun {
  if pronoun.subject() == pronoun {
    pronoun.object()
  } else {
    pronoun.subject()
  }
}

/// Weighted draw among the outcomes that differ from `current`.
fn pick<T, R>(current: &T, table: Vec<(T, f64)>, rng: &mut R) -> T
where
  T: Clone + PartialEq,
  R: Rng + ?Sized,
{
  let candidates: Vec<(T, f64)> = table.into_iter().filter(|(outcome, _)| outcome != current).collect();
  candidates
    .choose_weighted(rng, |(_, weight)| *weight)
    .map(|(outcome, _)| outcome.clone())
    .unwrap_or_else(|_| current.clone())
}

// ============================================================================
// Per-word transitions
// ============================================================================

/// Swaps a noun's number or article for a wrong one, keeping its capital.
pub fn make_noun_error<R: Rng + ?Sized>(noun: &Noun, rng: &mut R) -> Noun {
  let plain = noun.de_capitalize();
  let basic = plain.to_basic_noun();
  let a_plural = basic.plural().indefinite();

  let table = if plain.has_tag(WordTag::Proper) {
    vec![(basic.definite(), 0.6), (basic.indefinite(), 0.4)]
  } else if plain.has_tag(WordTag::Uncountable) {
    vec![(basic.plural(), 0.5), (basic.indefinite(), 0.5)]
  } else if plain.has_tag(WordTag::Plural) {
    vec![
      (basic.clone(), 0.55),
      (basic.indefinite(), 0.15),
      (basic.definite(), 0.15),
      (a_plural, 0.15),
    ]
  } else if plain.has_tag(WordTag::Indefinite) {
    vec![(basic.clone(), 0.67), (basic.plural(), 0.2), (a_plural, 0.13)]
  } else if plain.has_tag(WordTag::Definite) {
    vec![
      (basic.clone(), 0.67),
      (basic.indefinite(), 0.2),
      (basic.plural(), 0.07),
      (a_plural, 0.06),
    ]
  } else {
    vec![(basic.indefinite(), 0.5), (basic.definite(), 0.5)]
  };

  let error = pick(&plain, table, rng);
  if noun.is_capitalized() { error.capitalize() } else { error }
}

/// Swaps a verb's tense or person, including "playeds" and "didn't plays"
/// style double markings.
pub fn make_verb_error<R: Rng + ?Sized>(verb: &Verb, rng: &mut R) -> Verb {
  let plain = verb.de_capitalize();
  let basic = plain.to_basic_verb();
  let negative = basic.negative();

  let table = if plain.has_tag(WordTag::Negative) {
    if plain.has_tag(WordTag::Past) {
      vec![(negative.third_person(), 0.5), (negative.clone(), 0.5)]
    } else if plain.has_tag(WordTag::ThirdPerson) {
      let double_marked = Verb::from_parts(
        &format!("didn't {}", basic.third_person_form()),
        basic.irregular_past(),
        basic.infinitive(),
        negative.past_tense().tags().clone(),
      );
      vec![(negative.clone(), 0.4), (negative.past_tense(), 0.3), (double_marked, 0.3)]
    } else {
      vec![(negative.third_person(), 0.8), (negative.past_tense(), 0.2)]
    }
  } else if plain.has_tag(WordTag::Past) {
    vec![(basic.third_person(), 0.5), (basic.clone(), 0.5)]
  } else if plain.has_tag(WordTag::ThirdPerson) {
    let double_marked = Verb::from_parts(
      &format!("{}s", basic.past_form()),
      basic.irregular_past(),
      basic.infinitive(),
      basic.past_tense().tags().clone(),
    );
    vec![(basic.clone(), 0.6), (basic.past_tense(), 0.2), (double_marked, 0.2)]
  } else {
    vec![(basic.third_person(), 0.8), (basic.past_tense(), 0.2)]
  };

  let error = pick(&plain, table, rng);
  if verb.is_capitalized() { error.capitalize() } else { error }
}

/// `[be, verb]` where `be` follows the verb's tense and negation and the
/// verb is reduced to its base form.
pub fn make_is_do_error(verb: &Verb, be_verb: BeVerb) -> Vec<Word> {
  let mut be = be_verb;
  if verb.has_tag(WordTag::Past) {
    be = be.past_tense();
  }
  if verb.has_tag(WordTag::Negative) {
    be = be.negative();
  }
  vec![Word::BeVerb(be), Word::Verb(verb.to_basic_verb())]
}

/// Words between the verb and the closing mark, with the preposition and
/// its object moved to the front. `None` when nothing would move.
fn transpose_satellites(sentence: &Sentence) -> Option<Sentence> {
  let verb_index = sentence.get_verb()?;
  let words = sentence.word_list();
  let end = if words.last().is_some_and(Word::is_punctuation_mark) {
    words.len() - 1
  } else {
    words.len()
  };
  if verb_index + 1 >= end {
    return None;
  }
  let satellites = &words[verb_index + 1..end];
  if !satellites.iter().any(|word| word.has_tag(WordTag::SeparableParticle)) {
    return None;
  }
  let start = satellites.iter().position(|word| word.has_tag(WordTag::Preposition))?;
  let mut group_end = start + 1;
  if satellites.get(group_end).is_some_and(|word| !word.has_tag(WordTag::SeparableParticle)) {
    group_end += 1;
  }

  let mut reordered: Vec<Word> = satellites[start..group_end].to_vec();
  reordered.extend_from_slice(&satellites[..start]);
  reordered.extend_from_slice(&satellites[group_end..]);
  if reordered.as_slice() == satellites {
    return None;
  }
  Some(sentence.splice(verb_index + 1..end, reordered))
}
