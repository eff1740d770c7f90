use super::verb::Verb;
use super::word::BasicWord;

/// A verb's valence: its fixed satellites and how many objects it takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbGroup {
  pub verb: Verb,
  pub preposition: Option<BasicWord>,
  pub particle: Option<BasicWord>,
  pub objects: usize,
}

impl VerbGroup {
  pub fn new(verb: Verb, preposition: Option<BasicWord>, particle: Option<BasicWord>, objects: usize) -> Self {
    Self {
      verb,
      preposition,
      particle,
      objects,
    }
  }
}
