//! Renders words as text: single spaces between words, punctuation glued
//! to the word before it.

use crate::domain::{Paragraph, Word, WordTag};

/// Punctuation marks, and bolded marks that kept their PUNCTUATION tag.
pub fn is_punctuation(word: &Word) -> bool {
  match word {
    Word::Punctuation(_) => true,
    Word::Basic(basic) => basic.tags().has(WordTag::Punctuation),
    _ => false,
  }
}

pub fn connect_words(words: &[Word]) -> String {
  let mut text = String::new();
  for word in words {
    if !text.is_empty() && !is_punctuation(word) {
      text.push(' ');
    }
    text.push_str(word.value());
  }
  text
}

/// The whole paragraph as one line of text.
pub fn convert_paragraph(paragraph: &Paragraph) -> String {
  let words: Vec<Word> = paragraph.all_words().cloned().collect();
  connect_words(&words)
}
