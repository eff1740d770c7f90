//! Tag vocabularies and the immutable tag set shared by words and paragraphs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Word-level grammatical state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WordTag {
  ThirdPerson,
  Past,
  Negative,
  Plural,
  Definite,
  Indefinite,
  Uncountable,
  Proper,
  SeparableParticle,
  Preposition,
  /// A bolded punctuation mark, still attached to the previous word.
  Punctuation,
}

impl WordTag {
  pub const ALL: [WordTag; 11] = [
    Self::ThirdPerson,
    Self::Past,
    Self::Negative,
    Self::Plural,
    Self::Definite,
    Self::Indefinite,
    Self::Uncountable,
    Self::Proper,
    Self::SeparableParticle,
    Self::Preposition,
    Self::Punctuation,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::ThirdPerson => "THIRD_PERSON",
      Self::Past => "PAST",
      Self::Negative => "NEGATIVE",
      Self::Plural => "PLURAL",
      Self::Definite => "DEFINITE",
      Self::Indefinite => "INDEFINITE",
      Self::Uncountable => "UNCOUNTABLE",
      Self::Proper => "PROPER",
      Self::SeparableParticle => "SEPARABLE_PARTICLE",
      Self::Preposition => "PREPOSITION",
      Self::Punctuation => "PUNCTUATION",
    }
  }
}

impl FromStr for WordTag {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .iter()
      .find(|tag| tag.as_str() == s)
      .copied()
      .ok_or_else(|| format!("Invalid word tag: {}", s))
  }
}

impl std::fmt::Display for WordTag {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Paragraph-level pipeline provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusTag {
  Raw,
  HasPlurals,
  HasNegatives,
  SimplePresent,
  SimplePast,
  NounErrors,
  PronounErrors,
  VerbErrors,
  IsDoErrors,
  PrepositionErrors,
  PunctuationErrors,
  Grammatical,
}

impl StatusTag {
  pub const ALL: [StatusTag; 12] = [
    Self::Raw,
    Self::HasPlurals,
    Self::HasNegatives,
    Self::SimplePresent,
    Self::SimplePast,
    Self::NounErrors,
    Self::PronounErrors,
    Self::VerbErrors,
    Self::IsDoErrors,
    Self::PrepositionErrors,
    Self::PunctuationErrors,
    Self::Grammatical,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Raw => "RAW",
      Self::HasPlurals => "HAS_PLURALS",
      Self::HasNegatives => "HAS_NEGATIVES",
      Self::SimplePresent => "SIMPLE_PRESENT",
      Self::SimplePast => "SIMPLE_PAST",
      Self::NounErrors => "NOUN_ERRORS",
      Self::PronounErrors => "PRONOUN_ERRORS",
      Self::VerbErrors => "VERB_ERRORS",
      Self::IsDoErrors => "IS_DO_ERRORS",
      Self::PrepositionErrors => "PREPOSITION_ERRORS",
      Self::PunctuationErrors => "PUNCTUATION_ERRORS",
      Self::Grammatical => "GRAMMATICAL",
    }
  }

  /// Tags that mark an error-injection pass.
  pub fn is_error_tag(&self) -> bool {
    matches!(
      self,
      Self::NounErrors
        | Self::PronounErrors
        | Self::VerbErrors
        | Self::IsDoErrors
        | Self::PrepositionErrors
        | Self::PunctuationErrors
    )
  }
}

impl FromStr for StatusTag {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .iter()
      .find(|tag| tag.as_str() == s)
      .copied()
      .ok_or_else(|| format!("Invalid status tag: {}", s))
  }
}

impl std::fmt::Display for StatusTag {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Immutable set of tags from a single vocabulary.
///
/// Every operation returns a new set. Iteration and `to_list` follow the
/// vocabulary's declaration order, so equal sets always list identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tags<T: Ord + Copy> {
  inner: BTreeSet<T>,
}

impl<T: Ord + Copy> Default for Tags<T> {
  fn default() -> Self {
    Self { inner: BTreeSet::new() }
  }
}

impl<T: Ord + Copy> Tags<T> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add(&self, tag: T) -> Self {
    let mut inner = self.inner.clone();
    inner.insert(tag);
    Self { inner }
  }

  pub fn remove(&self, tag: T) -> Self {
    let mut inner = self.inner.clone();
    inner.remove(&tag);
    Self { inner }
  }

  pub fn has(&self, tag: T) -> bool {
    self.inner.contains(&tag)
  }

  pub fn to_list(&self) -> Vec<T> {
    self.inner.iter().copied().collect()
  }

  pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
    self.inner.iter().copied()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  pub fn len(&self) -> usize {
    self.inner.len()
  }
}

impl<T: Ord + Copy> FromIterator<T> for Tags<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self {
      inner: iter.into_iter().collect(),
    }
  }
}

impl<T: Ord + Copy, const N: usize> From<[T; N]> for Tags<T> {
  fn from(tags: [T; N]) -> Self {
    tags.into_iter().collect()
  }
}
