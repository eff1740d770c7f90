//! Word lists - the nouns and verbs a paragraph is built from.
//!
//! Lists are stored as plain serde records so they can be read from a JSON
//! file. Domain words are rebuilt from the records on every call.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{BasicWord, Noun, Verb, VerbGroup};

/// Anything that can hand the generator fresh noun and verb lists.
pub trait WordListSource {
    fn nouns(&self) -> Vec<Noun>;
    fn verbs(&self) -> Vec<VerbGroup>;
}

/// A verb with its valence. Empty strings mean "none".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbRecord {
    pub verb: String,
    #[serde(default)]
    pub irregular_past: String,
    #[serde(default)]
    pub preposition: String,
    #[serde(default)]
    pub particle: String,
    pub objects: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountableRecord {
    pub noun: String,
    #[serde(default)]
    pub irregular_plural: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UncountableRecord {
    pub noun: String,
}

/// Proper nouns. `is_plural` covers names like "the Joneses".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticRecord {
    pub noun: String,
    #[serde(default)]
    pub is_plural: bool,
}

/// Container for a word-list JSON file. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordLists {
    #[serde(default)]
    pub verbs: Vec<VerbRecord>,
    #[serde(default)]
    pub countable: Vec<CountableRecord>,
    #[serde(default)]
    pub uncountable: Vec<UncountableRecord>,
    #[serde(default, rename = "static")]
    pub static_nouns: Vec<StaticRecord>,
}

impl WordLists {
    pub fn new(
        verbs: Vec<VerbRecord>,
        countable: Vec<CountableRecord>,
        uncountable: Vec<UncountableRecord>,
        static_nouns: Vec<StaticRecord>,
    ) -> Self {
        Self {
            verbs,
            countable,
            uncountable,
            static_nouns,
        }
    }

    /// A small built-in list, used when no word-list file is given.
    pub fn bundled() -> Self {
        let verbs = [
            ("bring", "brought", "to", "", 2),
            ("eat", "ate", "", "", 1),
            ("give", "gave", "", "", 2),
            ("give", "gave", "to", "", 2),
            ("grab", "", "", "", 1),
            ("have", "had", "", "", 1),
            ("jump", "", "on", "", 1),
            ("like", "", "", "", 1),
            ("play", "", "with", "", 1),
            ("see", "saw", "", "", 1),
            ("take", "took", "", "away", 1),
            ("throw", "threw", "", "away", 1),
        ]
        .into_iter()
        .map(|(verb, irregular_past, preposition, particle, objects)| VerbRecord {
            verb: verb.to_string(),
            irregular_past: irregular_past.to_string(),
            preposition: preposition.to_string(),
            particle: particle.to_string(),
            objects,
        })
        .collect();

        let countable = [
            ("apple", ""),
            ("baby", "babies"),
            ("cat", ""),
            ("child", "children"),
            ("dog", ""),
            ("fish", "fish"),
            ("lamp", ""),
            ("man", "men"),
            ("sheep", "sheep"),
            ("farmer", ""),
            ("woman", "women"),
        ]
        .into_iter()
        .map(|(noun, irregular_plural)| CountableRecord {
            noun: noun.to_string(),
            irregular_plural: irregular_plural.to_string(),
        })
        .collect();

        let uncountable = ["milk", "rice", "sand", "water"]
            .into_iter()
            .map(|noun| UncountableRecord { noun: noun.to_string() })
            .collect();

        let static_nouns = [("Joe", false), ("Sarah", false), ("the Joneses", true)]
            .into_iter()
            .map(|(noun, is_plural)| StaticRecord {
                noun: noun.to_string(),
                is_plural,
            })
            .collect();

        Self::new(verbs, countable, uncountable, static_nouns)
    }
}

impl WordListSource for WordLists {
    fn nouns(&self) -> Vec<Noun> {
        let countable = self
            .countable
            .iter()
            .map(|record| Noun::with_irregular_plural(&record.noun, &record.irregular_plural));
        let uncountable = self.uncountable.iter().map(|record| Noun::uncountable_noun(&record.noun));
        let proper = self
            .static_nouns
            .iter()
            .map(|record| Noun::proper_noun(&record.noun, record.is_plural));
        countable.chain(uncountable).chain(proper).collect()
    }

    fn verbs(&self) -> Vec<VerbGroup> {
        self.verbs.iter().map(verb_group).collect()
    }
}

fn verb_group(record: &VerbRecord) -> VerbGroup {
    let verb = Verb::with_irregular_past(&record.verb, &record.irregular_past);
    let preposition = non_empty(&record.preposition).map(BasicWord::preposition);
    let particle = non_empty(&record.particle).map(BasicWord::particle);
    VerbGroup::new(verb, preposition, particle, record.objects)
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

/// Load word lists from a JSON file.
pub fn load_word_lists(path: &Path) -> Result<WordLists, WordListLoadError> {
    if !path.exists() {
        return Err(WordListLoadError::FileNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| WordListLoadError::IoError(path.display().to_string(), e.to_string()))?;

    let lists: WordLists = serde_json::from_str(&content)
        .map_err(|e| WordListLoadError::ParseError(path.display().to_string(), e.to_string()))?;

    tracing::info!(
        "Loaded word lists from {}: {} verbs, {} countable, {} uncountable, {} static",
        path.display(),
        lists.verbs.len(),
        lists.countable.len(),
        lists.uncountable.len(),
        lists.static_nouns.len()
    );
    Ok(lists)
}

/// Word list loading errors.
#[derive(Debug)]
pub enum WordListLoadError {
    FileNotFound(String),
    IoError(String, String),
    ParseError(String, String),
}

impl std::fmt::Display for WordListLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordListLoadError::FileNotFound(path) => write!(f, "Word list file not found: {}", path),
            WordListLoadError::IoError(path, err) => write!(f, "IO error reading {}: {}", path, err),
            WordListLoadError::ParseError(path, err) => write!(f, "Parse error in {}: {}", path, err),
        }
    }
}

impl std::error::Error for WordListLoadError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn verb_record(verb: &str, irregular_past: &str, preposition: &str, particle: &str, objects: usize) -> VerbRecord {
        VerbRecord {
            verb: verb.to_string(),
            irregular_past: irregular_past.to_string(),
            preposition: preposition.to_string(),
            particle: particle.to_string(),
            objects,
        }
    }

    #[test]
    fn test_empty_lists() {
        let lists = WordLists::default();
        assert_eq!(lists.verbs(), vec![]);
        assert_eq!(lists.nouns(), vec![]);
    }

    #[test]
    fn test_verbs_treat_empty_strings_as_absent() {
        let lists = WordLists::new(
            vec![
                verb_record("take", "took", "with", "away", 2),
                verb_record("play", "", "", "", 1),
            ],
            vec![],
            vec![],
            vec![],
        );
        assert_eq!(
            lists.verbs(),
            vec![
                VerbGroup::new(
                    Verb::with_irregular_past("take", "took"),
                    Some(BasicWord::preposition("with")),
                    Some(BasicWord::particle("away")),
                    2
                ),
                VerbGroup::new(Verb::new("play"), None, None, 1),
            ]
        );
        assert!(lists.nouns().is_empty());
    }

    #[test]
    fn test_nouns_countable_then_uncountable_then_static() {
        let lists = WordLists::new(
            vec![],
            vec![
                CountableRecord {
                    noun: "dog".to_string(),
                    irregular_plural: String::new(),
                },
                CountableRecord {
                    noun: "child".to_string(),
                    irregular_plural: "children".to_string(),
                },
            ],
            vec![UncountableRecord { noun: "water".to_string() }],
            vec![
                StaticRecord {
                    noun: "Joe".to_string(),
                    is_plural: false,
                },
                StaticRecord {
                    noun: "the Joneses".to_string(),
                    is_plural: true,
                },
            ],
        );
        assert_eq!(
            lists.nouns(),
            vec![
                Noun::new("dog"),
                Noun::with_irregular_plural("child", "children"),
                Noun::uncountable_noun("water"),
                Noun::proper_noun("Joe", false),
                Noun::proper_noun("the Joneses", true),
            ]
        );
        assert!(lists.verbs().is_empty());
    }

    #[test]
    fn test_lists_are_rebuilt_each_call() {
        let lists = WordLists::bundled();
        assert_eq!(lists.nouns(), lists.nouns());
        assert_eq!(lists.verbs(), lists.verbs());
    }

    #[test]
    fn test_bundled_has_every_kind_of_word() {
        let lists = WordLists::bundled();
        let nouns = lists.nouns();
        assert!(nouns.iter().any(|noun| noun.is_countable() && noun.irregular_plural().is_empty()));
        assert!(nouns.iter().any(|noun| !noun.irregular_plural().is_empty()));
        assert!(nouns.iter().any(|noun| !noun.is_countable()));
        let verbs = lists.verbs();
        assert!(verbs.iter().any(|group| group.objects == 2));
        assert!(verbs.iter().any(|group| group.preposition.is_some()));
        assert!(verbs.iter().any(|group| group.particle.is_some()));
    }

    #[test]
    fn test_load_word_lists_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "verbs": [{{"verb": "jump", "preposition": "on", "objects": 1}}],
                "countable": [{{"noun": "cat", "irregular_plural": ""}}],
                "static": [{{"noun": "Joe", "is_plural": false}}]
            }}"#
        )
        .unwrap();

        let lists = load_word_lists(file.path()).unwrap();
        assert_eq!(
            lists.verbs(),
            vec![VerbGroup::new(Verb::new("jump"), Some(BasicWord::preposition("on")), None, 1)]
        );
        assert_eq!(lists.nouns(), vec![Noun::new("cat"), Noun::proper_noun("Joe", false)]);
        assert!(lists.uncountable.is_empty());
    }

    #[test]
    fn test_load_word_lists_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            load_word_lists(&missing),
            Err(WordListLoadError::FileNotFound(_))
        ));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"verbs\": [{{\"verb\": \"go\"}}]}}").unwrap();
        let err = load_word_lists(file.path()).unwrap_err();
        assert!(matches!(err, WordListLoadError::ParseError(_, _)));
        assert!(err.to_string().starts_with("Parse error in "));
    }
}
