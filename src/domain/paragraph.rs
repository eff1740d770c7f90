use super::sentence::Sentence;
use super::tags::{StatusTag, Tags};
use super::word::Word;

/// Ordered sentences plus the status tags recording which pipeline passes
/// produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Paragraph {
  sentences: Vec<Sentence>,
  tags: Tags<StatusTag>,
}

impl Paragraph {
  pub fn new(sentences: Vec<Sentence>) -> Self {
    Self::with_tags(sentences, Tags::new())
  }

  pub fn with_tags(sentences: Vec<Sentence>, tags: Tags<StatusTag>) -> Self {
    Self { sentences, tags }
  }

  pub fn sentence_list(&self) -> &[Sentence] {
    &self.sentences
  }

  pub fn get_sentence(&self, index: usize) -> Option<&Sentence> {
    self.sentences.get(index)
  }

  pub fn len(&self) -> usize {
    self.sentences.len()
  }

  pub fn is_empty(&self) -> bool {
    self.sentences.is_empty()
  }

  pub fn tags(&self) -> &Tags<StatusTag> {
    &self.tags
  }

  pub fn set_tags(&self, tags: Tags<StatusTag>) -> Self {
    Self {
      sentences: self.sentences.clone(),
      tags,
    }
  }

  /// Copy with one word replaced. Out-of-range indices return an unchanged copy.
  pub fn set(&self, sentence_index: usize, word_index: usize, word: Word) -> Self {
    let mut sentences = self.sentences.clone();
    if let Some(sentence) = sentences.get_mut(sentence_index) {
      *sentence = sentence.set(word_index, word);
    }
    Self {
      sentences,
      tags: self.tags.clone(),
    }
  }

  pub fn set_sentence(&self, sentence_index: usize, sentence: Sentence) -> Self {
    let mut sentences = self.sentences.clone();
    if let Some(slot) = sentences.get_mut(sentence_index) {
      *slot = sentence;
    }
    Self {
      sentences,
      tags: self.tags.clone(),
    }
  }

  pub fn all_words(&self) -> impl Iterator<Item = &Word> + '_ {
    self.sentences.iter().flat_map(|sentence| sentence.iter())
  }

  /// `(sentence_index, word_index, word)` for every word in order.
  pub fn indexed_all_words(&self) -> impl Iterator<Item = (usize, usize, &Word)> + '_ {
    self
      .sentences
      .iter()
      .enumerate()
      .flat_map(|(s_index, sentence)| sentence.iter().enumerate().map(move |(w_index, word)| (s_index, w_index, word)))
  }

  /// Every position holding `word`. Nouns match on their basic form and verbs
  /// on their infinitive, so "the dogs" finds "a dog".
  pub fn find(&self, word: &Word) -> Vec<(usize, usize)> {
    self
      .indexed_all_words()
      .filter(|(_, _, candidate)| same_lemma(word, candidate))
      .map(|(s_index, w_index, _)| (s_index, w_index))
      .collect()
  }
}

fn same_lemma(target: &Word, candidate: &Word) -> bool {
  match (target, candidate) {
    (Word::Noun(a), Word::Noun(b)) => a.to_basic_noun() == b.to_basic_noun(),
    (Word::Verb(a), Word::Verb(b)) => a.infinitive() == b.infinitive(),
    (a, b) => a == b,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{Noun, Pronoun, Punctuation, Verb};

  fn sample() -> Paragraph {
    Paragraph::new(vec![
      Sentence::new(vec![
        Noun::new("dog").indefinite().capitalize().into(),
        Verb::new("like").third_person().into(),
        Noun::new("cat").plural().into(),
        Punctuation::Period.into(),
      ]),
      Sentence::new(vec![
        Noun::new("cat").plural().definite().capitalize().into(),
        Verb::new("like").into(),
        Noun::new("dog").definite().into(),
        Punctuation::Exclamation.into(),
      ]),
    ])
  }

  #[test]
  fn test_find_matches_nouns_by_lemma() {
    let paragraph = sample();
    assert_eq!(paragraph.find(&Noun::new("dog").into()), vec![(0, 0), (1, 2)]);
    assert_eq!(paragraph.find(&Noun::new("cat").plural().into()), vec![(0, 2), (1, 0)]);
  }

  #[test]
  fn test_find_matches_verbs_by_infinitive() {
    assert_eq!(sample().find(&Verb::new("like").into()), vec![(0, 1), (1, 1)]);
  }

  #[test]
  fn test_find_other_words_by_equality() {
    assert_eq!(sample().find(&Punctuation::Period.into()), vec![(0, 3)]);
    assert!(sample().find(&Pronoun::Me.into()).is_empty());
  }

  #[test]
  fn test_set_is_copy_on_write() {
    let paragraph = sample();
    let changed = paragraph.set(1, 1, Pronoun::Me.into());
    assert_ne!(paragraph, changed);
    assert_eq!(changed.get_sentence(1).and_then(|s| s.get(1)), Some(&Word::Pronoun(Pronoun::Me)));
    assert_eq!(paragraph.tags(), changed.tags());
  }

  #[test]
  fn test_indexed_all_words_is_restartable() {
    let paragraph = sample();
    assert_eq!(paragraph.all_words().count(), 8);
    assert_eq!(paragraph.indexed_all_words().count(), 8);
    let last = paragraph.indexed_all_words().last().map(|(s, w, _)| (s, w));
    assert_eq!(last, Some((1, 3)));
  }

  #[test]
  fn test_set_tags() {
    let tagged = sample().set_tags(Tags::from([StatusTag::Raw]));
    assert!(tagged.tags().has(StatusTag::Raw));
    assert_eq!(tagged.sentence_list(), sample().sentence_list());
  }
}
