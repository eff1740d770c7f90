//! Small string helpers shared by the word types.

pub const BOLD_OPEN: &str = "<bold>";
pub const BOLD_CLOSE: &str = "</bold>";

/// Wrap text in hint markup.
pub fn bold(text: &str) -> String {
  format!("{}{}{}", BOLD_OPEN, text, BOLD_CLOSE)
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
  let mut chars = text.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Lower-case the first character, leaving the rest untouched.
pub fn lower_first(text: &str) -> String {
  let mut chars = text.chars();
  match chars.next() {
    Some(first) => first.to_lowercase().chain(chars).collect(),
    None => String::new(),
  }
}

pub fn starts_upper(text: &str) -> bool {
  text.chars().next().is_some_and(char::is_uppercase)
}

pub fn is_vowel(c: char) -> bool {
  matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Ends in a consonant followed by `y` ("baby", "copy" but not "play").
pub fn ends_with_consonant_y(word: &str) -> bool {
  let mut rev = word.chars().rev();
  matches!((rev.next(), rev.next()), (Some('y'), Some(c)) if !is_vowel(c))
}

/// Endings that take "-es" rather than "-s".
pub fn takes_es(word: &str) -> bool {
  ["s", "x", "z", "ch", "sh", "o"]
    .iter()
    .any(|ending| word.ends_with(ending))
}

/// Drop the last character.
pub fn drop_last(word: &str) -> &str {
  match word.char_indices().last() {
    Some((idx, _)) => &word[..idx],
    None => word,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_capitalize_and_lower_first() {
    assert_eq!(capitalize_first("the dog"), "The dog");
    assert_eq!(lower_first("The Dude"), "the Dude");
    assert_eq!(capitalize_first(""), "");
  }

  #[test]
  fn test_consonant_y() {
    assert!(ends_with_consonant_y("baby"));
    assert!(!ends_with_consonant_y("play"));
    assert!(!ends_with_consonant_y("y"));
  }

  #[test]
  fn test_drop_last() {
    assert_eq!(drop_last("baby"), "bab");
    assert_eq!(drop_last(""), "");
  }
}
