use super::tags::{Tags, WordTag};
use super::text::{
  capitalize_first, drop_last, ends_with_consonant_y, is_vowel, lower_first, starts_upper, takes_es,
};

/// A verb. `value` is the conjugated surface form ("plays", "didn't go").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Verb {
  value: String,
  irregular_past: String,
  infinitive: String,
  tags: Tags<WordTag>,
}

impl Verb {
  pub fn new(infinitive: &str) -> Self {
    Self::build(infinitive, "", Tags::new())
  }

  pub fn with_irregular_past(infinitive: &str, irregular_past: &str) -> Self {
    Self::build(infinitive, irregular_past, Tags::new())
  }

  /// Assemble a verb from stored fields without re-rendering its value.
  /// Used for learner mistakes like "playeds" that no tag set renders.
  pub fn from_parts(value: &str, irregular_past: &str, infinitive: &str, tags: Tags<WordTag>) -> Self {
    Self {
      value: value.to_string(),
      irregular_past: irregular_past.to_string(),
      infinitive: infinitive.to_string(),
      tags,
    }
  }

  fn build(infinitive: &str, irregular_past: &str, tags: Tags<WordTag>) -> Self {
    Self {
      value: render(infinitive, irregular_past, &tags),
      irregular_past: irregular_past.to_string(),
      infinitive: infinitive.to_string(),
      tags,
    }
  }

  pub fn value(&self) -> &str {
    &self.value
  }

  pub fn irregular_past(&self) -> &str {
    &self.irregular_past
  }

  pub fn infinitive(&self) -> &str {
    &self.infinitive
  }

  pub fn tags(&self) -> &Tags<WordTag> {
    &self.tags
  }

  pub fn has_tag(&self, tag: WordTag) -> bool {
    self.tags.has(tag)
  }

  pub fn is_capitalized(&self) -> bool {
    starts_upper(&self.value) && !starts_upper(&render(&self.infinitive, &self.irregular_past, &self.tags))
  }

  fn with_tags(&self, tags: Tags<WordTag>) -> Self {
    let verb = Self::build(&self.infinitive, &self.irregular_past, tags);
    if self.is_capitalized() {
      verb.capitalize()
    } else {
      verb
    }
  }

  pub fn third_person(&self) -> Self {
    self.with_tags(self.tags.add(WordTag::ThirdPerson).remove(WordTag::Past))
  }

  pub fn past_tense(&self) -> Self {
    self.with_tags(self.tags.add(WordTag::Past).remove(WordTag::ThirdPerson))
  }

  pub fn negative(&self) -> Self {
    self.with_tags(self.tags.add(WordTag::Negative))
  }

  /// Infinitive with no tags; the irregular past is kept.
  pub fn to_basic_verb(&self) -> Self {
    Self::build(&self.infinitive, &self.irregular_past, Tags::new())
  }

  pub fn third_person_form(&self) -> String {
    third_person_form(&self.infinitive)
  }

  pub fn past_form(&self) -> String {
    if self.irregular_past.is_empty() {
      regular_past(&self.infinitive)
    } else {
      self.irregular_past.clone()
    }
  }

  pub fn capitalize(&self) -> Self {
    Self {
      value: capitalize_first(&self.value),
      ..self.clone()
    }
  }

  pub fn de_capitalize(&self) -> Self {
    if !self.is_capitalized() {
      return self.clone();
    }
    Self {
      value: lower_first(&self.value),
      ..self.clone()
    }
  }
}

fn render(infinitive: &str, irregular_past: &str, tags: &Tags<WordTag>) -> String {
  if tags.has(WordTag::Negative) {
    let auxiliary = if tags.has(WordTag::Past) {
      "didn't"
    } else if tags.has(WordTag::ThirdPerson) {
      "doesn't"
    } else {
      "don't"
    };
    return format!("{} {}", auxiliary, infinitive);
  }
  if tags.has(WordTag::Past) {
    if irregular_past.is_empty() {
      return regular_past(infinitive);
    }
    return irregular_past.to_string();
  }
  if tags.has(WordTag::ThirdPerson) {
    return third_person_form(infinitive);
  }
  infinitive.to_string()
}

/// go→goes, wax→waxes, copy→copies, play→plays.
pub fn third_person_form(infinitive: &str) -> String {
  if ends_with_consonant_y(infinitive) {
    return format!("{}ies", drop_last(infinitive));
  }
  if takes_es(infinitive) {
    return format!("{}es", infinitive);
  }
  format!("{}s", infinitive)
}

/// play→played, like→liked, copy→copied, bat→batted.
pub fn regular_past(infinitive: &str) -> String {
  if infinitive.ends_with('e') {
    return format!("{}d", infinitive);
  }
  if ends_with_consonant_y(infinitive) {
    return format!("{}ied", drop_last(infinitive));
  }
  if doubles_final_consonant(infinitive) {
    if let Some(last) = infinitive.chars().last() {
      return format!("{}{}ed", infinitive, last);
    }
  }
  format!("{}ed", infinitive)
}

/// Single-syllable consonant-vowel-consonant words (bat, stop, hug).
fn doubles_final_consonant(word: &str) -> bool {
  let chars: Vec<char> = word.chars().collect();
  if chars.len() < 3 {
    return false;
  }
  let n = chars.len();
  let (c1, v, c2) = (chars[n - 3], chars[n - 2], chars[n - 1]);
  let cvc = !is_vowel(c1) && is_vowel(v) && !is_vowel(c2) && !matches!(c2, 'w' | 'x' | 'y');
  let vowel_groups = chars
    .iter()
    .zip(std::iter::once(&' ').chain(chars.iter()))
    .filter(|(c, prev)| is_vowel(**c) && !is_vowel(**prev))
    .count();
  cvc && vowel_groups == 1
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_regular_past() {
    assert_eq!(regular_past("play"), "played");
    assert_eq!(regular_past("bat"), "batted");
    assert_eq!(regular_past("copy"), "copied");
    assert_eq!(regular_past("like"), "liked");
    assert_eq!(regular_past("visit"), "visited");
    assert_eq!(regular_past("fix"), "fixed");
    assert_eq!(regular_past("go"), "goed");
  }

  #[test]
  fn test_third_person_form() {
    assert_eq!(third_person_form("go"), "goes");
    assert_eq!(third_person_form("wax"), "waxes");
    assert_eq!(third_person_form("copy"), "copies");
    assert_eq!(third_person_form("play"), "plays");
  }

  #[test]
  fn test_conjugation() {
    let go = Verb::with_irregular_past("go", "went");
    assert_eq!(go.past_tense().value(), "went");
    assert_eq!(go.third_person().value(), "goes");
    assert_eq!(go.negative().value(), "don't go");
    assert_eq!(go.negative().third_person().value(), "doesn't go");
    assert_eq!(go.negative().past_tense().value(), "didn't go");
    assert_eq!(go.third_person().negative(), go.negative().third_person());
  }

  #[test]
  fn test_past_and_third_person_exclude_each_other() {
    let verb = Verb::new("play").third_person().past_tense();
    assert!(verb.has_tag(WordTag::Past));
    assert!(!verb.has_tag(WordTag::ThirdPerson));
    assert_eq!(verb.third_person().value(), "plays");
  }

  #[test]
  fn test_to_basic_verb_keeps_irregular_past() {
    let verb = Verb::with_irregular_past("go", "went").negative().past_tense().capitalize();
    assert_eq!(verb.to_basic_verb(), Verb::with_irregular_past("go", "went"));
  }

  #[test]
  fn test_capitalization_survives_derivation() {
    let verb = Verb::new("go").capitalize();
    assert_eq!(verb.value(), "Go");
    assert_eq!(verb.negative().value(), "Don't go");
    assert_eq!(verb.de_capitalize(), Verb::new("go"));
  }
}
