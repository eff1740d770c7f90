//! Turns a raw, tagged paragraph into grammatical English: articles,
//! verb agreement and sentence-initial capitals.

use std::collections::HashSet;

use crate::domain::{Noun, Paragraph, Sentence, StatusTag, Verb, Word, WordTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tense {
  Present,
  Past,
}

#[derive(Debug, Clone)]
pub struct Grammarizer {
  raw: Paragraph,
}

impl Grammarizer {
  pub fn new(paragraph: Paragraph) -> Self {
    Self { raw: paragraph }
  }

  pub fn raw(&self) -> &Paragraph {
    &self.raw
  }

  pub fn grammarize_to_present_tense(&self) -> Paragraph {
    self.grammarize(Tense::Present)
  }

  pub fn grammarize_to_past_tense(&self) -> Paragraph {
    self.grammarize(Tense::Past)
  }

  fn grammarize(&self, tense: Tense) -> Paragraph {
    let mut seen: HashSet<Noun> = HashSet::new();
    let sentences: Vec<Sentence> = self
      .raw
      .sentence_list()
      .iter()
      .map(|sentence| grammarize_sentence(sentence, tense, &mut seen))
      .collect();

    let tense_tag = match tense {
      Tense::Present => StatusTag::SimplePresent,
      Tense::Past => StatusTag::SimplePast,
    };
    let tags = self.raw.tags().remove(StatusTag::Raw).add(tense_tag);
    Paragraph::with_tags(sentences, tags)
  }
}

fn grammarize_sentence(sentence: &Sentence, tense: Tense, seen: &mut HashSet<Noun>) -> Sentence {
  let third_person = sentence.get(0).is_some_and(is_third_person_subject);
  let verb_index = sentence.get_verb();

  let words: Vec<Word> = sentence
    .iter()
    .enumerate()
    .map(|(idx, word)| match word {
      Word::Noun(noun) => Word::Noun(assign_article(noun, seen)),
      Word::Verb(verb) if Some(idx) == verb_index => Word::Verb(conjugate(verb, tense, third_person)),
      other => other.clone(),
    })
    .collect();

  let mut result = Sentence::new(words);
  if let Some(first) = result.get(0) {
    result = result.set(0, first.capitalize());
  }
  result
}

/// Indefinite on a lemma's first paragraph-wide mention, definite after.
/// Plural and uncountable first mentions stay bare; proper nouns never change.
fn assign_article(noun: &Noun, seen: &mut HashSet<Noun>) -> Noun {
  let basic = noun.to_basic_noun();
  if basic.has_tag(WordTag::Proper) {
    return basic;
  }
  let plural = noun.has_tag(WordTag::Plural);
  let start = if plural { basic.plural() } else { basic.clone() };

  if seen.contains(&basic) {
    return start.definite();
  }
  seen.insert(basic.clone());
  if plural || basic.has_tag(WordTag::Uncountable) {
    start
  } else {
    start.indefinite()
  }
}

fn conjugate(verb: &Verb, tense: Tense, third_person: bool) -> Verb {
  let mut result = verb.to_basic_verb();
  if verb.has_tag(WordTag::Negative) {
    result = result.negative();
  }
  match tense {
    Tense::Past => result.past_tense(),
    Tense::Present if third_person => result.third_person(),
    Tense::Present => result,
  }
}

/// Singular nouns (countable, uncountable or proper) and HE/SHE/IT take
/// the third person singular.
pub fn is_third_person_subject(word: &Word) -> bool {
  match word {
    Word::Noun(noun) => !noun.has_tag(WordTag::Plural),
    Word::Pronoun(pronoun) | Word::CapitalPronoun(pronoun) => pronoun.is_third_person_singular(),
    _ => false,
  }
}
