//! Aligns a learner's free-text submission against the answer paragraph and
//! marks the differences with `<bold>` hints.
//!
//! Two granularities:
//! - by sentence: chunks split on `.`, `!`, `?` and `,` must equal the
//!   rendered answer sentences exactly (whitespace collapsed)
//! - by word: every answer word is located in the submission through the
//!   regex of all its inflected forms, and wrong forms, missing words and
//!   wrong marks are bolded

use regex::Regex;
use serde::Serialize;

use crate::connector::{connect_words, convert_paragraph};
use crate::domain::text::{bold, capitalize_first};
use crate::domain::{Noun, Paragraph, Punctuation, Sentence, Verb, Word};

const MARKS: [char; 4] = ['.', '!', '?', ','];
const TERMINAL_MARKS: [char; 3] = ['.', '!', '?'];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceComparison {
  pub error_count: usize,
  pub hint_paragraph: String,
  /// Submission chunks minus answer sentences.
  pub missing_sentences: isize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordComparison {
  pub error_count: usize,
  pub hint_paragraph: String,
  /// Submission words minus answer words.
  pub missing_words: isize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceHint {
  pub hint_sentence: String,
  pub error_count: usize,
}

#[derive(Debug, Clone)]
pub struct ParagraphComparison {
  answer: Paragraph,
  submission: String,
}

impl ParagraphComparison {
  pub fn new(answer: &Paragraph, submission: &str) -> Self {
    Self {
      answer: answer.clone(),
      submission: submission.to_string(),
    }
  }

  pub fn answer(&self) -> &Paragraph {
    &self.answer
  }

  pub fn submission(&self) -> &str {
    &self.submission
  }

  pub fn compare_by_sentences(&self) -> SentenceComparison {
    let submitted = split_sentences(&self.submission);
    let expected: Vec<String> = self
      .answer
      .sentence_list()
      .iter()
      .map(|sentence| collapse_whitespace(&connect_words(sentence.word_list())))
      .collect();

    let mut error_count = 0;
    let mut hints: Vec<String> = Vec::with_capacity(submitted.len());
    for index in 0..submitted.len().max(expected.len()) {
      match (submitted.get(index), expected.get(index)) {
        (Some(chunk), Some(answer)) if collapse_whitespace(chunk) == *answer => hints.push(chunk.clone()),
        (Some(chunk), _) => {
          hints.push(bold(chunk));
          error_count += 1;
        }
        (None, _) => error_count += 1,
      }
    }

    SentenceComparison {
      error_count,
      hint_paragraph: hints.join(" "),
      missing_sentences: submitted.len() as isize - expected.len() as isize,
    }
  }

  pub fn compare_by_words(&self) -> WordComparison {
    let text = self.submission.trim();
    let mut cursor = 0;
    let mut error_count = 0;
    let mut hint_paragraph = String::new();

    for sentence in self.answer.sentence_list() {
      let window_end = text[cursor..]
        .find(TERMINAL_MARKS)
        .map(|idx| cursor + idx + 1)
        .unwrap_or(text.len());
      let aligned = align_sentence(sentence, &text[cursor..window_end]);
      hint_paragraph.push_str(&aligned.hint);
      error_count += aligned.error_count;
      cursor += aligned.consumed;
    }
    hint_paragraph.push_str(&text[cursor..]);

    let submitted_words = self.submission.split_whitespace().count() as isize;
    let answer_words = convert_paragraph(&self.answer).split_whitespace().count() as isize;
    WordComparison {
      error_count,
      hint_paragraph,
      missing_words: submitted_words - answer_words,
    }
  }
}

/// Splits after every mark, keeping it. A trailing run with no mark is
/// still a chunk.
fn split_sentences(text: &str) -> Vec<String> {
  let mut chunks = Vec::new();
  let mut current = String::new();
  for c in text.chars() {
    current.push(c);
    if MARKS.contains(&c) {
      let chunk = current.trim();
      if !chunk.is_empty() {
        chunks.push(chunk.to_string());
      }
      current.clear();
    }
  }
  let rest = current.trim();
  if !rest.is_empty() {
    chunks.push(rest.to_string());
  }
  chunks
}

fn collapse_whitespace(text: &str) -> String {
  text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// Word group search
// ============================================================================

/// Byte span of the first match for `word` in any inflected form.
pub fn find_word_group(word: &Word, text: &str) -> Option<(usize, usize)> {
  match word {
    Word::Noun(noun) => find_noun_group(noun, text),
    Word::Verb(verb) => find_verb_group(verb, text),
    _ => find_word(word, text),
  }
}

/// An optional article followed by the singular or plural form. A stray
/// trailing "s" is tolerated so "feets" is still found as "feet".
pub fn find_noun_group(noun: &Noun, text: &str) -> Option<(usize, usize)> {
  let forms = case_forms(&[noun.base_noun().to_string(), noun.plural_form()]);
  let pattern = format!(r"\b(?:(?:a|A|an|An|the|The)\s+)?(?:{})s?\b", forms);
  find_pattern(&pattern, text)
}

/// An optional don't/doesn't/didn't followed by the base, third person or
/// past form.
pub fn find_verb_group(verb: &Verb, text: &str) -> Option<(usize, usize)> {
  let forms = case_forms(&[
    verb.infinitive().to_string(),
    verb.third_person_form(),
    verb.past_form(),
  ]);
  let pattern = format!(r"\b(?:(?:[Dd]on't|[Dd]oesn't|[Dd]idn't)\s+)?(?:{})\b", forms);
  find_pattern(&pattern, text)
}

/// Whole-word, case-insensitive match of the word's value.
pub fn find_word(word: &Word, text: &str) -> Option<(usize, usize)> {
  let value = word.value();
  if value.is_empty() {
    return None;
  }
  if let Word::Punctuation(_) = word {
    return text.find(value).map(|start| (start, start + value.len()));
  }
  find_pattern(&format!(r"(?i)\b{}\b", regex::escape(value)), text)
}

/// Every form as written and with a capital first letter, longest first.
fn case_forms(forms: &[String]) -> String {
  let mut all: Vec<String> = Vec::with_capacity(forms.len() * 2);
  for form in forms.iter().filter(|form| !form.is_empty()) {
    for candidate in [form.clone(), capitalize_first(form)] {
      if !all.contains(&candidate) {
        all.push(candidate);
      }
    }
  }
  all.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
  all.iter().map(|form| regex::escape(form)).collect::<Vec<_>>().join("|")
}

fn find_pattern(pattern: &str, text: &str) -> Option<(usize, usize)> {
  let regex = match Regex::new(pattern) {
    Ok(regex) => regex,
    Err(e) => {
      tracing::warn!("Skipping unbuildable word pattern {}: {}", pattern, e);
      return None;
    }
  };
  regex.find(text).map(|found| (found.start(), found.end()))
}

// ============================================================================
// Sentence alignment
// ============================================================================

struct Alignment {
  hint: String,
  error_count: usize,
  consumed: usize,
}

/// Compares one answer sentence against the text written for it. Text after
/// the aligned part is passed through unchanged.
pub fn compare_sentences(sentence: &Sentence, submission: &str) -> SentenceHint {
  let aligned = align_sentence(sentence, submission);
  SentenceHint {
    hint_sentence: format!("{}{}", aligned.hint, &submission[aligned.consumed..]),
    error_count: aligned.error_count,
  }
}

fn align_sentence(sentence: &Sentence, text: &str) -> Alignment {
  let (words, ending) = match sentence.word_list().split_last() {
    Some((Word::Punctuation(mark), words)) => (words, Some(*mark)),
    _ => (sentence.word_list(), None),
  };

  let mut hint = String::new();
  let mut error_count = 0;
  let mut cursor = 0;

  for (index, word) in words.iter().enumerate() {
    if let Some((start, end)) = find_word_group(word, &text[cursor..]) {
      let (start, end) = (cursor + start, cursor + end);
      hint.push_str(&text[cursor..start]);
      let found = &text[start..end];
      if found == word.value() {
        hint.push_str(found);
      } else {
        hint.push_str(&bold(found));
        error_count += 1;
      }
      cursor = end;
      continue;
    }

    error_count += 1;
    let rest = &text[cursor..];
    let leading = rest.len() - rest.trim_start().len();
    hint.push_str(&rest[..leading]);
    cursor += leading;

    let token_len = text[cursor..]
      .find(|c: char| c.is_whitespace() || MARKS.contains(&c))
      .unwrap_or(text.len() - cursor);
    let next_matches_here = words
      .get(index + 1)
      .and_then(|next| find_word_group(next, &text[cursor..]))
      .is_some_and(|(start, _)| start == 0);

    if token_len > 0 && !next_matches_here {
      hint.push_str(&bold(&text[cursor..cursor + token_len]));
      cursor += token_len;
    } else {
      let at_word_start = hint.is_empty() || hint.ends_with(char::is_whitespace);
      if !at_word_start {
        hint.push(' ');
      }
      hint.push_str(&bold(word.value()));
      if at_word_start && token_len > 0 {
        hint.push(' ');
      }
    }
  }

  if let Some(expected) = ending {
    let rest = &text[cursor..];
    let trimmed = rest.trim_start();
    match trimmed.chars().next() {
      Some(c) if MARKS.contains(&c) => {
        let start = cursor + (rest.len() - trimmed.len());
        let end = start + c.len_utf8();
        hint.push_str(&text[cursor..start]);
        let mark = &text[start..end];
        if mark == expected.value() {
          hint.push_str(mark);
        } else {
          hint.push_str(&bold(mark));
          error_count += 1;
        }
        cursor = end;
      }
      _ if expected == Punctuation::Missing => {}
      _ => {
        hint.push(' ');
        hint.push_str(&bold(Punctuation::Missing.as_str()));
        error_count += 1;
      }
    }
  }

  Alignment {
    hint,
    error_count,
    consumed: cursor,
  }
}
