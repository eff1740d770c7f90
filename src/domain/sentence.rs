use super::word::Word;

/// An ordered, immutable run of words ending (usually) in punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Sentence {
  words: Vec<Word>,
}

impl Sentence {
  pub fn new(words: Vec<Word>) -> Self {
    Self { words }
  }

  pub fn word_list(&self) -> &[Word] {
    &self.words
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Word> {
    self.words.iter()
  }

  /// Negative indices count from the end, so `get(-2)` is the word before
  /// the closing punctuation.
  pub fn get(&self, index: isize) -> Option<&Word> {
    let idx = if index < 0 {
      self.words.len().checked_sub(index.unsigned_abs())?
    } else {
      index as usize
    };
    self.words.get(idx)
  }

  /// Copy with one word replaced. Out-of-range indices return an unchanged copy.
  pub fn set(&self, index: usize, word: Word) -> Self {
    let mut words = self.words.clone();
    if let Some(slot) = words.get_mut(index) {
      *slot = word;
    }
    Self { words }
  }

  /// Copy with `word` inserted before `index` (or appended past the end).
  pub fn insert(&self, index: usize, word: Word) -> Self {
    let mut words = self.words.clone();
    words.insert(index.min(words.len()), word);
    Self { words }
  }

  /// Copy with the words in `range` replaced by `replacement`.
  pub fn splice(&self, range: std::ops::Range<usize>, replacement: Vec<Word>) -> Self {
    let mut words = self.words.clone();
    let end = range.end.min(words.len());
    let start = range.start.min(end);
    words.splice(start..end, replacement);
    Self { words }
  }

  /// Position of the finite verb: the first `Word::Verb`.
  pub fn get_verb(&self) -> Option<usize> {
    self.words.iter().position(|word| matches!(word, Word::Verb(_)))
  }

  pub fn contains(&self, word: &Word) -> bool {
    self.words.contains(word)
  }
}

impl<'a> IntoIterator for &'a Sentence {
  type Item = &'a Word;
  type IntoIter = std::slice::Iter<'a, Word>;

  fn into_iter(self) -> Self::IntoIter {
    self.words.iter()
  }
}

impl From<Vec<Word>> for Sentence {
  fn from(words: Vec<Word>) -> Self {
    Self::new(words)
  }
}
