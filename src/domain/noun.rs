use super::tags::{Tags, WordTag};
use super::text::{
  bold, capitalize_first, drop_last, ends_with_consonant_y, is_vowel, lower_first, starts_upper,
  takes_es,
};

/// Words whose final f/fe becomes "ves".
static VES_PLURALS: &[&str] = &[
  "scarf", "dwarf", "half", "elf", "shelf", "leaf", "wolf", "life", "wife", "knife", "calf",
  "loaf", "thief",
];

/// A noun. `value` is the full surface form including any article
/// ("a dog", "the squirrels", "Joe"); `base_noun` is the undecorated lemma.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Noun {
  value: String,
  irregular_plural: String,
  base_noun: String,
  tags: Tags<WordTag>,
}

impl Noun {
  /// Countable noun with a regular plural.
  pub fn new(base: &str) -> Self {
    Self::build(base, "", Tags::new())
  }

  pub fn with_irregular_plural(base: &str, irregular_plural: &str) -> Self {
    Self::build(base, irregular_plural, Tags::new())
  }

  pub fn uncountable_noun(base: &str) -> Self {
    Self::build(base, "", Tags::from([WordTag::Uncountable]))
  }

  /// Proper nouns keep their spelling; `plural` marks names like "the Joneses".
  pub fn proper_noun(name: &str, plural: bool) -> Self {
    let tags = if plural {
      Tags::from([WordTag::Proper, WordTag::Plural])
    } else {
      Tags::from([WordTag::Proper])
    };
    Self::build(name, "", tags)
  }

  /// Assemble a noun from stored fields without re-rendering its value.
  pub fn from_parts(value: &str, irregular_plural: &str, base_noun: &str, tags: Tags<WordTag>) -> Self {
    Self {
      value: value.to_string(),
      irregular_plural: irregular_plural.to_string(),
      base_noun: base_noun.to_string(),
      tags,
    }
  }

  fn build(base: &str, irregular_plural: &str, tags: Tags<WordTag>) -> Self {
    Self {
      value: render(base, irregular_plural, &tags),
      irregular_plural: irregular_plural.to_string(),
      base_noun: base.to_string(),
      tags,
    }
  }

  pub fn value(&self) -> &str {
    &self.value
  }

  pub fn irregular_plural(&self) -> &str {
    &self.irregular_plural
  }

  pub fn base_noun(&self) -> &str {
    &self.base_noun
  }

  pub fn tags(&self) -> &Tags<WordTag> {
    &self.tags
  }

  pub fn has_tag(&self, tag: WordTag) -> bool {
    self.tags.has(tag)
  }

  pub fn is_countable(&self) -> bool {
    !self.has_tag(WordTag::Uncountable) && !self.has_tag(WordTag::Proper)
  }

  /// Upper-cased relative to how the tags would render it.
  pub fn is_capitalized(&self) -> bool {
    starts_upper(&self.value) && !starts_upper(&render(&self.base_noun, &self.irregular_plural, &self.tags))
  }

  fn with_tags(&self, tags: Tags<WordTag>) -> Self {
    let noun = Self::build(&self.base_noun, &self.irregular_plural, tags);
    if self.is_capitalized() {
      noun.capitalize()
    } else {
      noun
    }
  }

  pub fn plural(&self) -> Self {
    if self.has_tag(WordTag::Plural) || self.has_tag(WordTag::Proper) {
      return self.clone();
    }
    self.with_tags(self.tags.add(WordTag::Plural))
  }

  pub fn definite(&self) -> Self {
    self.with_tags(self.tags.add(WordTag::Definite).remove(WordTag::Indefinite))
  }

  pub fn indefinite(&self) -> Self {
    self.with_tags(self.tags.add(WordTag::Indefinite).remove(WordTag::Definite))
  }

  /// Lemma form: no article, singular unless a plural proper noun, lower-case start.
  pub fn to_basic_noun(&self) -> Self {
    let proper = self.has_tag(WordTag::Proper);
    let tags: Tags<WordTag> = self
      .tags
      .iter()
      .filter(|tag| match tag {
        WordTag::Uncountable | WordTag::Proper => true,
        WordTag::Plural => proper,
        _ => false,
      })
      .collect();
    Self::build(&self.base_noun, &self.irregular_plural, tags)
  }

  /// The plural core without any article.
  pub fn plural_form(&self) -> String {
    if self.irregular_plural.is_empty() {
      regular_plural(&self.base_noun)
    } else {
      self.irregular_plural.clone()
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

  pub fn bold_value(&self) -> String {
    bold(&self.value)
  }
}

fn render(base: &str, irregular_plural: &str, tags: &Tags<WordTag>) -> String {
  let core = if tags.has(WordTag::Plural) && !tags.has(WordTag::Proper) {
    if irregular_plural.is_empty() {
      regular_plural(base)
    } else {
      irregular_plural.to_string()
    }
  } else {
    base.to_string()
  };

  if tags.has(WordTag::Definite) {
    format!("the {}", core)
  } else if tags.has(WordTag::Indefinite) {
    let article = if core.chars().next().is_some_and(is_vowel) { "an" } else { "a" };
    format!("{} {}", article, core)
  } else {
    core
  }
}

/// English regular plural: baby→babies, box→boxes, leaf→leaves, dog→dogs.
pub fn regular_plural(word: &str) -> String {
  let lower = word.to_lowercase();
  if let Some(special) = VES_PLURALS.iter().find(|special| lower.ends_with(*special)) {
    let stem_len = if special.ends_with("fe") { 2 } else { 1 };
    let stem = &word[..word.len() - stem_len];
    return format!("{}ves", stem);
  }
  if ends_with_consonant_y(&lower) {
    return format!("{}ies", drop_last(word));
  }
  if takes_es(&lower) {
    return format!("{}es", word);
  }
  format!("{}s", word)
}
