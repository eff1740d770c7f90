use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::noun::Noun;
use super::tags::{Tags, WordTag};
use super::text::{bold, capitalize_first, lower_first};
use super::verb::Verb;

// ============================================================================
// Basic words
// ============================================================================

/// Any word with no grammar of its own: prepositions, particles, hint text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasicWord {
  value: String,
  tags: Tags<WordTag>,
}

impl BasicWord {
  pub fn new(value: &str) -> Self {
    Self::with_tags(value, Tags::new())
  }

  pub fn with_tags(value: &str, tags: Tags<WordTag>) -> Self {
    Self {
      value: value.to_string(),
      tags,
    }
  }

  pub fn preposition(value: &str) -> Self {
    Self::with_tags(value, Tags::from([WordTag::Preposition]))
  }

  pub fn particle(value: &str) -> Self {
    Self::with_tags(value, Tags::from([WordTag::SeparableParticle]))
  }

  pub fn value(&self) -> &str {
    &self.value
  }

  pub fn tags(&self) -> &Tags<WordTag> {
    &self.tags
  }

  pub fn capitalize(&self) -> Self {
    Self::with_tags(&capitalize_first(&self.value), self.tags.clone())
  }

  pub fn de_capitalize(&self) -> Self {
    Self::with_tags(&lower_first(&self.value), self.tags.clone())
  }
}

// ============================================================================
// Closed word sets
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Pronoun {
  I,
  Me,
  You,
  He,
  Him,
  She,
  Her,
  It,
  We,
  Us,
  They,
  Them,
}

impl Pronoun {
  pub const ALL: [Pronoun; 12] = [
    Self::I,
    Self::Me,
    Self::You,
    Self::He,
    Self::Him,
    Self::She,
    Self::Her,
    Self::It,
    Self::We,
    Self::Us,
    Self::They,
    Self::Them,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::I => "I",
      Self::Me => "ME",
      Self::You => "YOU",
      Self::He => "HE",
      Self::Him => "HIM",
      Self::She => "SHE",
      Self::Her => "HER",
      Self::It => "IT",
      Self::We => "WE",
      Self::Us => "US",
      Self::They => "THEY",
      Self::Them => "THEM",
    }
  }

  /// Surface form in running text.
  pub fn value(&self) -> &'static str {
    match self {
      Self::I => "I",
      Self::Me => "me",
      Self::You => "you",
      Self::He => "he",
      Self::Him => "him",
      Self::She => "she",
      Self::Her => "her",
      Self::It => "it",
      Self::We => "we",
      Self::Us => "us",
      Self::They => "they",
      Self::Them => "them",
    }
  }

  /// Surface form at the start of a sentence.
  pub fn capital_value(&self) -> &'static str {
    match self {
      Self::I => "I",
      Self::Me => "Me",
      Self::You => "You",
      Self::He => "He",
      Self::Him => "Him",
      Self::She => "She",
      Self::Her => "Her",
      Self::It => "It",
      Self::We => "We",
      Self::Us => "Us",
      Self::They => "They",
      Self::Them => "Them",
    }
  }

  pub fn subject(&self) -> Self {
    match self {
      Self::Me => Self::I,
      Self::Him => Self::He,
      Self::Her => Self::She,
      Self::Us => Self::We,
      Self::Them => Self::They,
      other => *other,
    }
  }

  pub fn object(&self) -> Self {
    match self {
      Self::I => Self::Me,
      Self::He => Self::Him,
      Self::She => Self::Her,
      Self::We => Self::Us,
      Self::They => Self::Them,
      other => *other,
    }
  }

  /// HE/SHE/IT in either case form.
  pub fn is_third_person_singular(&self) -> bool {
    matches!(self.subject(), Self::He | Self::She | Self::It)
  }
}

impl FromStr for Pronoun {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .iter()
      .find(|p| p.as_str() == s)
      .copied()
      .ok_or_else(|| format!("Invalid pronoun: {}", s))
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Punctuation {
  Period,
  Exclamation,
  Question,
  Comma,
  /// A removed terminal mark; renders as nothing.
  Missing,
}

impl Punctuation {
  pub const ALL: [Punctuation; 5] = [
    Self::Period,
    Self::Exclamation,
    Self::Question,
    Self::Comma,
    Self::Missing,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Period => "PERIOD",
      Self::Exclamation => "EXCLAMATION",
      Self::Question => "QUESTION",
      Self::Comma => "COMMA",
      Self::Missing => "MISSING",
    }
  }

  pub fn value(&self) -> &'static str {
    match self {
      Self::Period => ".",
      Self::Exclamation => "!",
      Self::Question => "?",
      Self::Comma => ",",
      Self::Missing => "",
    }
  }

  pub fn from_char(c: char) -> Option<Self> {
    match c {
      '.' => Some(Self::Period),
      '!' => Some(Self::Exclamation),
      '?' => Some(Self::Question),
      ',' => Some(Self::Comma),
      _ => None,
    }
  }
}

impl FromStr for Punctuation {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .iter()
      .find(|p| p.as_str() == s)
      .copied()
      .ok_or_else(|| format!("Invalid punctuation: {}", s))
  }
}

/// Forms of "to be", used to build is-do errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeVerb {
  Be,
  Is,
  Am,
  Are,
  IsNot,
  AmNot,
  AreNot,
  Was,
  Were,
  WasNot,
  WereNot,
}

impl BeVerb {
  pub const ALL: [BeVerb; 11] = [
    Self::Be,
    Self::Is,
    Self::Am,
    Self::Are,
    Self::IsNot,
    Self::AmNot,
    Self::AreNot,
    Self::Was,
    Self::Were,
    Self::WasNot,
    Self::WereNot,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Be => "BE",
      Self::Is => "IS",
      Self::Am => "AM",
      Self::Are => "ARE",
      Self::IsNot => "IS_NOT",
      Self::AmNot => "AM_NOT",
      Self::AreNot => "ARE_NOT",
      Self::Was => "WAS",
      Self::Were => "WERE",
      Self::WasNot => "WAS_NOT",
      Self::WereNot => "WERE_NOT",
    }
  }

  pub fn value(&self) -> &'static str {
    match self {
      Self::Be => "be",
      Self::Is => "is",
      Self::Am => "am",
      Self::Are => "are",
      Self::IsNot => "is not",
      Self::AmNot => "am not",
      Self::AreNot => "are not",
      Self::Was => "was",
      Self::Were => "were",
      Self::WasNot => "was not",
      Self::WereNot => "were not",
    }
  }

  pub fn tags(&self) -> Tags<WordTag> {
    let mut tags = Tags::new();
    if matches!(self, Self::Is | Self::IsNot) {
      tags = tags.add(WordTag::ThirdPerson);
    }
    if matches!(self, Self::IsNot | Self::AmNot | Self::AreNot | Self::WasNot | Self::WereNot) {
      tags = tags.add(WordTag::Negative);
    }
    if matches!(self, Self::Was | Self::Were | Self::WasNot | Self::WereNot) {
      tags = tags.add(WordTag::Past);
    }
    tags
  }

  pub fn negative(&self) -> Self {
    match self {
      Self::Is => Self::IsNot,
      Self::Am => Self::AmNot,
      Self::Are => Self::AreNot,
      Self::Was => Self::WasNot,
      Self::Were => Self::WereNot,
      other => *other,
    }
  }

  pub fn past_tense(&self) -> Self {
    match self {
      Self::Is | Self::Am => Self::Was,
      Self::Are => Self::Were,
      Self::IsNot | Self::AmNot => Self::WasNot,
      Self::AreNot => Self::WereNot,
      other => *other,
    }
  }
}

impl FromStr for BeVerb {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .iter()
      .find(|b| b.as_str() == s)
      .copied()
      .ok_or_else(|| format!("Invalid be verb: {}", s))
  }
}

// ============================================================================
// Word
// ============================================================================

/// One token of a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Word {
  Basic(BasicWord),
  Noun(Noun),
  Verb(Verb),
  Pronoun(Pronoun),
  CapitalPronoun(Pronoun),
  Punctuation(Punctuation),
  BeVerb(BeVerb),
}

impl Word {
  pub fn value(&self) -> &str {
    match self {
      Self::Basic(word) => word.value(),
      Self::Noun(noun) => noun.value(),
      Self::Verb(verb) => verb.value(),
      Self::Pronoun(pronoun) => pronoun.value(),
      Self::CapitalPronoun(pronoun) => pronoun.capital_value(),
      Self::Punctuation(mark) => mark.value(),
      Self::BeVerb(be) => be.value(),
    }
  }

  pub fn tags(&self) -> Tags<WordTag> {
    match self {
      Self::Basic(word) => word.tags().clone(),
      Self::Noun(noun) => noun.tags().clone(),
      Self::Verb(verb) => verb.tags().clone(),
      Self::BeVerb(be) => be.tags(),
      Self::Pronoun(_) | Self::CapitalPronoun(_) | Self::Punctuation(_) => Tags::new(),
    }
  }

  pub fn has_tag(&self, tag: WordTag) -> bool {
    self.tags().has(tag)
  }

  pub fn capitalize(&self) -> Self {
    match self {
      Self::Basic(word) => Self::Basic(word.capitalize()),
      Self::Noun(noun) => Self::Noun(noun.capitalize()),
      Self::Verb(verb) => Self::Verb(verb.capitalize()),
      Self::Pronoun(pronoun) | Self::CapitalPronoun(pronoun) => Self::CapitalPronoun(*pronoun),
      Self::Punctuation(_) => self.clone(),
      Self::BeVerb(be) => Self::Basic(BasicWord::with_tags(&capitalize_first(be.value()), be.tags())),
    }
  }

  pub fn de_capitalize(&self) -> Self {
    match self {
      Self::Basic(word) => Self::Basic(word.de_capitalize()),
      Self::Noun(noun) => Self::Noun(noun.de_capitalize()),
      Self::Verb(verb) => Self::Verb(verb.de_capitalize()),
      Self::Pronoun(pronoun) | Self::CapitalPronoun(pronoun) => Self::Pronoun(*pronoun),
      Self::Punctuation(_) | Self::BeVerb(_) => self.clone(),
    }
  }

  /// Hint-marked copy. Punctuation keeps a PUNCTUATION tag so it still
  /// attaches to the preceding word.
  pub fn bold(&self) -> Self {
    let tags = match self {
      Self::Punctuation(_) => Tags::from([WordTag::Punctuation]),
      other => other.tags().remove(WordTag::Punctuation),
    };
    Self::Basic(BasicWord::with_tags(&bold(self.value()), tags))
  }

  pub fn as_noun(&self) -> Option<&Noun> {
    match self {
      Self::Noun(noun) => Some(noun),
      _ => None,
    }
  }

  pub fn as_verb(&self) -> Option<&Verb> {
    match self {
      Self::Verb(verb) => Some(verb),
      _ => None,
    }
  }

  /// The pronoun behind either case form.
  pub fn as_pronoun(&self) -> Option<Pronoun> {
    match self {
      Self::Pronoun(pronoun) | Self::CapitalPronoun(pronoun) => Some(*pronoun),
      _ => None,
    }
  }

  pub fn is_punctuation_mark(&self) -> bool {
    matches!(self, Self::Punctuation(_))
  }
}

impl From<BasicWord> for Word {
  fn from(word: BasicWord) -> Self {
    Self::Basic(word)
  }
}

impl From<Noun> for Word {
  fn from(noun: Noun) -> Self {
    Self::Noun(noun)
  }
}

impl From<Verb> for Word {
  fn from(verb: Verb) -> Self {
    Self::Verb(verb)
  }
}

impl From<Pronoun> for Word {
  fn from(pronoun: Pronoun) -> Self {
    Self::Pronoun(pronoun)
  }
}

impl From<Punctuation> for Word {
  fn from(mark: Punctuation) -> Self {
    Self::Punctuation(mark)
  }
}

impl From<BeVerb> for Word {
  fn from(be: BeVerb) -> Self {
    Self::BeVerb(be)
  }
}

impl std::fmt::Display for Word {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.value())
  }
}
