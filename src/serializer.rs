//! JSON codec for paragraphs, so an answer paragraph can be stored with the
//! exercise and checked later.
//!
//! Every record carries a `class` discriminant. Nouns, verbs and basic
//! words keep their stored value and tags; closed word sets are written as
//! `{class, name}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{
  BasicWord, BeVerb, Noun, Paragraph, Pronoun, Punctuation, Sentence, StatusTag, Tags, Verb, Word, WordTag,
};

#[derive(Debug)]
pub enum SerializerError {
  UnknownClass(String),
  UnknownTag(String),
  UnknownName { class: String, name: String },
  MissingField { class: String, field: &'static str },
  Json(String),
}

impl std::fmt::Display for SerializerError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      SerializerError::UnknownClass(class) => write!(f, "Unknown class: {}", class),
      SerializerError::UnknownTag(tag) => write!(f, "Unknown tag: {}", tag),
      SerializerError::UnknownName { class, name } => write!(f, "Unknown {} name: {}", class, name),
      SerializerError::MissingField { class, field } => write!(f, "{} record is missing '{}'", class, field),
      SerializerError::Json(e) => write!(f, "Invalid paragraph JSON: {}", e),
    }
  }
}

impl std::error::Error for SerializerError {}

impl From<serde_json::Error> for SerializerError {
  fn from(e: serde_json::Error) -> Self {
    SerializerError::Json(e.to_string())
  }
}

#[derive(Debug, Serialize, Deserialize)]
struct ParagraphRecord {
  class: String,
  sentence_list: Vec<SentenceRecord>,
  tags: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SentenceRecord {
  class: String,
  word_list: Vec<WordRecord>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct WordRecord {
  class: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  value: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  irregular_plural: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  base_noun: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  irregular_past: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  infinitive: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  tags: Option<Vec<String>>,
}

// ============================================================================
// Encoding
// ============================================================================

pub fn to_value(paragraph: &Paragraph) -> Result<Value, SerializerError> {
  Ok(serde_json::to_value(paragraph_record(paragraph))?)
}

pub fn to_json(paragraph: &Paragraph) -> Result<String, SerializerError> {
  Ok(serde_json::to_string(&paragraph_record(paragraph))?)
}

fn paragraph_record(paragraph: &Paragraph) -> ParagraphRecord {
  ParagraphRecord {
    class: "Paragraph".to_string(),
    sentence_list: paragraph
      .sentence_list()
      .iter()
      .map(|sentence| SentenceRecord {
        class: "Sentence".to_string(),
        word_list: sentence.iter().map(word_record).collect(),
      })
      .collect(),
    tags: tag_names(paragraph.tags()),
  }
}

fn tag_names<T: Ord + Copy + std::fmt::Display>(tags: &Tags<T>) -> Vec<String> {
  tags.iter().map(|tag| tag.to_string()).collect()
}

fn named(class: &str, name: &str) -> WordRecord {
  WordRecord {
    class: class.to_string(),
    name: Some(name.to_string()),
    ..Default::default()
  }
}

fn word_record(word: &Word) -> WordRecord {
  match word {
    Word::Basic(basic) => WordRecord {
      class: "BasicWord".to_string(),
      value: Some(basic.value().to_string()),
      tags: Some(tag_names(basic.tags())),
      ..Default::default()
    },
    Word::Noun(noun) => WordRecord {
      class: "Noun".to_string(),
      value: Some(noun.value().to_string()),
      irregular_plural: Some(noun.irregular_plural().to_string()),
      base_noun: Some(noun.base_noun().to_string()),
      tags: Some(tag_names(noun.tags())),
      ..Default::default()
    },
    Word::Verb(verb) => WordRecord {
      class: "Verb".to_string(),
      value: Some(verb.value().to_string()),
      irregular_past: Some(verb.irregular_past().to_string()),
      infinitive: Some(verb.infinitive().to_string()),
      tags: Some(tag_names(verb.tags())),
      ..Default::default()
    },
    Word::Pronoun(pronoun) => named("Pronoun", pronoun.as_str()),
    Word::CapitalPronoun(pronoun) => named("CapitalPronoun", pronoun.as_str()),
    Word::Punctuation(mark) => named("Punctuation", mark.as_str()),
    Word::BeVerb(be) => named("BeVerb", be.as_str()),
  }
}

// ============================================================================
// Decoding
// ============================================================================

pub fn from_json(json: &str) -> Result<Paragraph, SerializerError> {
  let record: ParagraphRecord = serde_json::from_str(json)?;
  paragraph_from_record(record)
}

pub fn from_value(value: Value) -> Result<Paragraph, SerializerError> {
  let record: ParagraphRecord = serde_json::from_value(value)?;
  paragraph_from_record(record)
}

fn paragraph_from_record(record: ParagraphRecord) -> Result<Paragraph, SerializerError> {
  if record.class != "Paragraph" {
    return Err(SerializerError::UnknownClass(record.class));
  }
  let sentences = record
    .sentence_list
    .into_iter()
    .map(sentence_from_record)
    .collect::<Result<Vec<_>, _>>()?;
  let tags = parse_tags::<StatusTag>(&record.tags)?;
  Ok(Paragraph::with_tags(sentences, tags))
}

fn sentence_from_record(record: SentenceRecord) -> Result<Sentence, SerializerError> {
  if record.class != "Sentence" {
    return Err(SerializerError::UnknownClass(record.class));
  }
  let words = record
    .word_list
    .into_iter()
    .map(word_from_record)
    .collect::<Result<Vec<_>, _>>()?;
  Ok(Sentence::new(words))
}

fn parse_tags<T>(names: &[String]) -> Result<Tags<T>, SerializerError>
where
  T: Ord + Copy + std::str::FromStr,
{
  names
    .iter()
    .map(|name| name.parse::<T>().map_err(|_| SerializerError::UnknownTag(name.clone())))
    .collect()
}

fn field(value: Option<String>, class: &str, field: &'static str) -> Result<String, SerializerError> {
  value.ok_or_else(|| SerializerError::MissingField {
    class: class.to_string(),
    field,
  })
}

fn parse_name<T: std::str::FromStr>(record: &WordRecord) -> Result<T, SerializerError> {
  let name = record.name.clone().ok_or_else(|| SerializerError::MissingField {
    class: record.class.clone(),
    field: "name",
  })?;
  name.parse::<T>().map_err(|_| SerializerError::UnknownName {
    class: record.class.clone(),
    name,
  })
}

fn word_from_record(record: WordRecord) -> Result<Word, SerializerError> {
  match record.class.as_str() {
    "Pronoun" => Ok(Word::Pronoun(parse_name::<Pronoun>(&record)?)),
    "CapitalPronoun" => Ok(Word::CapitalPronoun(parse_name::<Pronoun>(&record)?)),
    "Punctuation" => Ok(Word::Punctuation(parse_name::<Punctuation>(&record)?)),
    "BeVerb" => Ok(Word::BeVerb(parse_name::<BeVerb>(&record)?)),
    "BasicWord" | "Noun" | "Verb" => {
      let tags = parse_tags::<WordTag>(&record.tags.unwrap_or_default())?;
      let class = record.class.as_str();
      let value = field(record.value, class, "value")?;
      let word = match class {
        "BasicWord" => Word::Basic(BasicWord::with_tags(&value, tags)),
        "Noun" => Word::Noun(Noun::from_parts(
          &value,
          &record.irregular_plural.unwrap_or_default(),
          &field(record.base_noun, class, "base_noun")?,
          tags,
        )),
        _ => Word::Verb(Verb::from_parts(
          &value,
          &record.irregular_past.unwrap_or_default(),
          &field(record.infinitive, class, "infinitive")?,
          tags,
        )),
      };
      Ok(word)
    }
    _ => Err(SerializerError::UnknownClass(record.class.clone())),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_empty_paragraph() {
    let paragraph = Paragraph::new(vec![]);
    assert_eq!(
      to_value(&paragraph).unwrap(),
      json!({"class": "Paragraph", "sentence_list": [], "tags": []})
    );
    assert_eq!(from_value(to_value(&paragraph).unwrap()).unwrap(), paragraph);
  }

  #[test]
  fn test_paragraph_with_empty_sentence_and_tags() {
    let paragraph = Paragraph::with_tags(
      vec![Sentence::new(vec![])],
      Tags::from([StatusTag::Raw, StatusTag::NounErrors]),
    );
    let value = to_value(&paragraph).unwrap();
    assert_eq!(
      value,
      json!({
        "class": "Paragraph",
        "sentence_list": [{"class": "Sentence", "word_list": []}],
        "tags": ["RAW", "NOUN_ERRORS"],
      })
    );
    assert_eq!(from_value(value).unwrap(), paragraph);
  }

  #[test]
  fn test_word_records() {
    let paragraph = Paragraph::new(vec![Sentence::new(vec![
      BasicWord::with_tags("x", Tags::from([WordTag::Preposition])).into(),
      Noun::from_parts("y", "z", "q", Tags::from([WordTag::Plural, WordTag::Definite])).into(),
      Verb::from_parts("x", "", "x", Tags::new()).into(),
      Word::CapitalPronoun(Pronoun::Me),
      Punctuation::Missing.into(),
      BeVerb::WereNot.into(),
    ])]);
    assert_eq!(
      to_value(&paragraph).unwrap()["sentence_list"][0]["word_list"],
      json!([
        {"class": "BasicWord", "value": "x", "tags": ["PREPOSITION"]},
        {"class": "Noun", "value": "y", "irregular_plural": "z", "base_noun": "q", "tags": ["PLURAL", "DEFINITE"]},
        {"class": "Verb", "value": "x", "irregular_past": "", "infinitive": "x", "tags": []},
        {"class": "CapitalPronoun", "name": "ME"},
        {"class": "Punctuation", "name": "MISSING"},
        {"class": "BeVerb", "name": "WERE_NOT"},
      ])
    );
  }

  #[test]
  fn test_json_round_trip_keeps_error_forms() {
    let paragraph = Paragraph::with_tags(
      vec![Sentence::new(vec![
        Noun::new("toy").plural().indefinite().capitalize().into(),
        Verb::from_parts("playeds", "", "play", Tags::from([WordTag::Past])).into(),
        Noun::proper_noun("the Dude", false).definite().into(),
        Punctuation::Exclamation.into(),
      ])],
      Tags::from([StatusTag::SimplePast, StatusTag::VerbErrors]),
    );
    let json = to_json(&paragraph).unwrap();
    assert_eq!(from_json(&json).unwrap(), paragraph);
  }

  #[test]
  fn test_unknown_class_is_an_error() {
    let value = json!({
      "class": "Paragraph",
      "sentence_list": [{"class": "Sentence", "word_list": [{"class": "Adjective", "value": "big"}]}],
      "tags": [],
    });
    assert!(matches!(from_value(value), Err(SerializerError::UnknownClass(c)) if c == "Adjective"));
    let value = json!({"class": "Chapter", "sentence_list": [], "tags": []});
    assert!(matches!(from_value(value), Err(SerializerError::UnknownClass(_))));
  }

  #[test]
  fn test_unknown_tag_and_name_are_errors() {
    let value = json!({"class": "Paragraph", "sentence_list": [], "tags": ["SHOUTING"]});
    assert!(matches!(from_value(value), Err(SerializerError::UnknownTag(t)) if t == "SHOUTING"));
    let value = json!({
      "class": "Paragraph",
      "sentence_list": [{"class": "Sentence", "word_list": [{"class": "Pronoun", "name": "YOUS"}]}],
      "tags": [],
    });
    assert!(matches!(from_value(value), Err(SerializerError::UnknownName { .. })));
  }

  #[test]
  fn test_malformed_json() {
    assert!(matches!(from_json("{not json"), Err(SerializerError::Json(_))));
    let missing = r#"{"class": "Paragraph", "sentence_list": [{"class": "Sentence", "word_list": [{"class": "Noun", "value": "x", "tags": []}]}], "tags": []}"#;
    assert!(matches!(
      from_json(missing),
      Err(SerializerError::MissingField { field: "base_noun", .. })
    ));
  }
}
