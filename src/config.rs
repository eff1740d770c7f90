//! Generator configuration.
//!
//! Values are read with priority config.toml (`[generator]` table) > .env /
//! environment (`PARAGRAPH_*`) > built-in defaults, key by key.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::generator::clamp_probability;

// ==================== Option Enums ====================

/// Tense the answer paragraph is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    #[default]
    SimplePresent,
    SimplePast,
}

impl Tense {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tense::SimplePresent => "simple_present",
            Tense::SimplePast => "simple_past",
        }
    }
}

impl std::fmt::Display for Tense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Tense {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple_present" => Ok(Tense::SimplePresent),
            "simple_past" => Ok(Tense::SimplePast),
            _ => Err(format!("Invalid tense: {}", s)),
        }
    }
}

/// How subjects are chosen: each sentence's object becomes the next subject
/// (`chain`), or subjects are drawn from a fixed pool (`pool`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphType {
    #[default]
    Chain,
    Pool,
}

impl ParagraphType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParagraphType::Chain => "chain",
            ParagraphType::Pool => "pool",
        }
    }
}

impl std::fmt::Display for ParagraphType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ParagraphType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chain" => Ok(ParagraphType::Chain),
            "pool" => Ok(ParagraphType::Pool),
            _ => Err(format!("Invalid paragraph type: {}", s)),
        }
    }
}

// ==================== Generator Configuration ====================

/// Validated generator settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratorConfig {
    pub error_probability: f64,
    pub noun_errors: bool,
    pub pronoun_errors: bool,
    pub verb_errors: bool,
    pub is_do_errors: bool,
    pub preposition_transpose_errors: bool,
    pub punctuation_errors: bool,

    pub tense: Tense,
    pub probability_plural_noun: f64,
    pub probability_negative_verb: f64,
    pub probability_pronoun: f64,

    pub paragraph_type: ParagraphType,
    /// Required when `paragraph_type` is `pool`.
    pub pool_size: Option<usize>,
    pub paragraph_size: usize,
    pub num_paragraphs: usize,
    /// Fixed seed for reproducible output; random when absent.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            error_probability: 0.2,
            noun_errors: true,
            pronoun_errors: true,
            verb_errors: true,
            is_do_errors: true,
            preposition_transpose_errors: true,
            punctuation_errors: true,
            tense: Tense::SimplePresent,
            probability_plural_noun: 0.2,
            probability_negative_verb: 0.3,
            probability_pronoun: 0.3,
            paragraph_type: ParagraphType::Chain,
            pool_size: Some(5),
            paragraph_size: 15,
            num_paragraphs: 1,
            seed: None,
        }
    }
}

/// Configuration file structure for config.toml
#[derive(Debug, Default, Deserialize)]
struct AppConfig {
    generator: Option<GeneratorSection>,
}

/// Unvalidated settings from one source. Unknown keys are ignored.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
struct GeneratorSection {
    error_probability: Option<f64>,
    noun_errors: Option<bool>,
    pronoun_errors: Option<bool>,
    verb_errors: Option<bool>,
    is_do_errors: Option<bool>,
    preposition_transpose_errors: Option<bool>,
    punctuation_errors: Option<bool>,
    tense: Option<String>,
    probability_plural_noun: Option<f64>,
    probability_negative_verb: Option<f64>,
    probability_pronoun: Option<f64>,
    paragraph_type: Option<String>,
    #[serde(alias = "subject_pool")]
    pool_size: Option<i64>,
    paragraph_size: Option<i64>,
    num_paragraphs: Option<i64>,
    seed: Option<u64>,
}

impl GeneratorSection {
    fn is_empty(&self) -> bool {
        self == &GeneratorSection::default()
    }

    /// Fill every unset key from `fallback`.
    fn or(self, fallback: GeneratorSection) -> GeneratorSection {
        GeneratorSection {
            error_probability: self.error_probability.or(fallback.error_probability),
            noun_errors: self.noun_errors.or(fallback.noun_errors),
            pronoun_errors: self.pronoun_errors.or(fallback.pronoun_errors),
            verb_errors: self.verb_errors.or(fallback.verb_errors),
            is_do_errors: self.is_do_errors.or(fallback.is_do_errors),
            preposition_transpose_errors: self
                .preposition_transpose_errors
                .or(fallback.preposition_transpose_errors),
            punctuation_errors: self.punctuation_errors.or(fallback.punctuation_errors),
            tense: self.tense.or(fallback.tense),
            probability_plural_noun: self.probability_plural_noun.or(fallback.probability_plural_noun),
            probability_negative_verb: self.probability_negative_verb.or(fallback.probability_negative_verb),
            probability_pronoun: self.probability_pronoun.or(fallback.probability_pronoun),
            paragraph_type: self.paragraph_type.or(fallback.paragraph_type),
            pool_size: self.pool_size.or(fallback.pool_size),
            paragraph_size: self.paragraph_size.or(fallback.paragraph_size),
            num_paragraphs: self.num_paragraphs.or(fallback.num_paragraphs),
            seed: self.seed.or(fallback.seed),
        }
    }

    /// Read `PARAGRAPH_<KEY>` variables through `lookup`.
    fn from_env<F>(lookup: F) -> Result<GeneratorSection, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(GeneratorSection {
            error_probability: env_value(&lookup, "error_probability")?,
            noun_errors: env_value(&lookup, "noun_errors")?,
            pronoun_errors: env_value(&lookup, "pronoun_errors")?,
            verb_errors: env_value(&lookup, "verb_errors")?,
            is_do_errors: env_value(&lookup, "is_do_errors")?,
            preposition_transpose_errors: env_value(&lookup, "preposition_transpose_errors")?,
            punctuation_errors: env_value(&lookup, "punctuation_errors")?,
            tense: env_value(&lookup, "tense")?,
            probability_plural_noun: env_value(&lookup, "probability_plural_noun")?,
            probability_negative_verb: env_value(&lookup, "probability_negative_verb")?,
            probability_pronoun: env_value(&lookup, "probability_pronoun")?,
            paragraph_type: env_value(&lookup, "paragraph_type")?,
            pool_size: env_value::<i64, _>(&lookup, "pool_size")?
                .or(env_value(&lookup, "subject_pool")?),
            paragraph_size: env_value(&lookup, "paragraph_size")?,
            num_paragraphs: env_value(&lookup, "num_paragraphs")?,
            seed: env_value(&lookup, "seed")?,
        })
    }

    fn validate(self) -> Result<GeneratorConfig, ConfigError> {
        let defaults = GeneratorConfig::default();
        let probability = |value: Option<f64>, default: f64| value.map(clamp_probability).unwrap_or(default);

        Ok(GeneratorConfig {
            error_probability: probability(self.error_probability, defaults.error_probability),
            noun_errors: self.noun_errors.unwrap_or(defaults.noun_errors),
            pronoun_errors: self.pronoun_errors.unwrap_or(defaults.pronoun_errors),
            verb_errors: self.verb_errors.unwrap_or(defaults.verb_errors),
            is_do_errors: self.is_do_errors.unwrap_or(defaults.is_do_errors),
            preposition_transpose_errors: self
                .preposition_transpose_errors
                .unwrap_or(defaults.preposition_transpose_errors),
            punctuation_errors: self.punctuation_errors.unwrap_or(defaults.punctuation_errors),
            tense: parse_option(self.tense, "tense")?.unwrap_or(defaults.tense),
            probability_plural_noun: probability(self.probability_plural_noun, defaults.probability_plural_noun),
            probability_negative_verb: probability(
                self.probability_negative_verb,
                defaults.probability_negative_verb,
            ),
            probability_pronoun: probability(self.probability_pronoun, defaults.probability_pronoun),
            paragraph_type: parse_option(self.paragraph_type, "paragraph_type")?.unwrap_or(defaults.paragraph_type),
            pool_size: match self.pool_size {
                Some(size) => Some(positive(size, "pool_size")?),
                None => defaults.pool_size,
            },
            paragraph_size: match self.paragraph_size {
                Some(size) => positive(size, "paragraph_size")?,
                None => defaults.paragraph_size,
            },
            num_paragraphs: match self.num_paragraphs {
                Some(count) => positive(count, "num_paragraphs")?,
                None => defaults.num_paragraphs,
            },
            seed: self.seed,
        })
    }
}

fn env_value<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let name = format!("PARAGRAPH_{}", key.to_uppercase());
    match lookup(&name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: name,
                value: raw,
            }),
        None => Ok(None),
    }
}

fn parse_option<T: std::str::FromStr>(value: Option<String>, key: &str) -> Result<Option<T>, ConfigError> {
    match value {
        Some(raw) => raw.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
        None => Ok(None),
    }
}

fn positive(value: i64, key: &str) -> Result<usize, ConfigError> {
    if value <= 0 {
        return Err(ConfigError::NonPositive { key: key.to_string() });
    }
    usize::try_from(value).map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Load generator config with priority: config.toml > .env > default
pub fn load_generator_config() -> Result<GeneratorConfig, ConfigError> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    load_generator_config_from(Path::new("config.toml"), |name| std::env::var(name).ok())
}

/// Same as [`load_generator_config`] with an explicit file and variable lookup.
pub fn load_generator_config_from<F>(path: &Path, lookup: F) -> Result<GeneratorConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // Priority 1: config.toml
    let from_file = read_config_file(path)?;
    if !from_file.is_empty() {
        tracing::info!("Using generator settings from {}", path.display());
    }

    // Priority 2: PARAGRAPH_* env
    let from_env = GeneratorSection::from_env(lookup)?;
    if !from_env.is_empty() {
        tracing::info!("Using generator settings from PARAGRAPH_* env");
    }

    let merged = from_file.or(from_env);
    if merged.is_empty() {
        tracing::info!("Using default generator settings");
    }

    let config = merged.validate()?;
    tracing::debug!("Generator config: {:?}", config);
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<GeneratorSection, ConfigError> {
    if !path.exists() {
        return Ok(GeneratorSection::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::IoError(path.display().to_string(), e.to_string()))?;

    let config: AppConfig = toml::from_str(&contents)
        .map_err(|e| ConfigError::ParseError(path.display().to_string(), e.to_string()))?;

    Ok(config.generator.unwrap_or_default())
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: String, value: String },
    NonPositive { key: String },
    IoError(String, String),
    ParseError(String, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => write!(f, "Invalid value for {}: {:?}", key, value),
            ConfigError::NonPositive { key } => write!(f, "{} must be greater than zero", key),
            ConfigError::IoError(path, err) => write!(f, "IO error reading {}: {}", path, err),
            ConfigError::ParseError(path, err) => write!(f, "Parse error in {}: {}", path, err),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_any_source() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_generator_config_from(&dir.path().join("config.toml"), no_env).unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.error_probability, 0.2);
        assert_eq!(config.probability_plural_noun, 0.2);
        assert_eq!(config.probability_negative_verb, 0.3);
        assert_eq!(config.probability_pronoun, 0.3);
        assert_eq!(config.tense, Tense::SimplePresent);
        assert_eq!(config.paragraph_type, ParagraphType::Chain);
        assert_eq!(config.paragraph_size, 15);
        assert_eq!(config.pool_size, Some(5));
        assert_eq!(config.num_paragraphs, 1);
        assert!(config.noun_errors && config.punctuation_errors);
    }

    #[test]
    fn test_file_values_and_unknown_keys() {
        let file = toml_file(
            r#"
            [generator]
            error_probability = 1.0
            noun_errors = false
            tense = "simple_past"
            paragraph_type = "pool"
            subject_pool = 3
            paragraph_size = 4
            seed = 42
            colour = "blue"

            [other]
            ignored = true
            "#,
        );
        let config = load_generator_config_from(file.path(), no_env).unwrap();
        assert_eq!(config.error_probability, 1.0);
        assert!(!config.noun_errors);
        assert!(config.verb_errors);
        assert_eq!(config.tense, Tense::SimplePast);
        assert_eq!(config.paragraph_type, ParagraphType::Pool);
        assert_eq!(config.pool_size, Some(3));
        assert_eq!(config.paragraph_size, 4);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_file_wins_over_env_key_by_key() {
        let file = toml_file("[generator]\nparagraph_size = 4\n");
        let lookup = env(&[
            ("PARAGRAPH_PARAGRAPH_SIZE", "9"),
            ("PARAGRAPH_TENSE", "simple_past"),
            ("PARAGRAPH_VERB_ERRORS", "false"),
            ("PARAGRAPH_SUBJECT_POOL", "7"),
        ]);
        let config = load_generator_config_from(file.path(), lookup).unwrap();
        assert_eq!(config.paragraph_size, 4);
        assert_eq!(config.tense, Tense::SimplePast);
        assert!(!config.verb_errors);
        assert_eq!(config.pool_size, Some(7));
    }

    #[test]
    fn test_probabilities_are_clamped() {
        let file = toml_file("[generator]\nerror_probability = 1.5\nprobability_pronoun = -0.5\n");
        let config = load_generator_config_from(file.path(), no_env).unwrap();
        assert_eq!(config.error_probability, 1.0);
        assert_eq!(config.probability_pronoun, 0.0);
    }

    #[test]
    fn test_invalid_values() {
        let file = toml_file("[generator]\ntense = \"future\"\n");
        assert_eq!(
            load_generator_config_from(file.path(), no_env),
            Err(ConfigError::InvalidValue {
                key: "tense".to_string(),
                value: "future".to_string(),
            })
        );

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");
        assert_eq!(
            load_generator_config_from(&missing, env(&[("PARAGRAPH_PARAGRAPH_SIZE", "lots")])),
            Err(ConfigError::InvalidValue {
                key: "PARAGRAPH_PARAGRAPH_SIZE".to_string(),
                value: "lots".to_string(),
            })
        );
    }

    #[test]
    fn test_non_positive_sizes() {
        for key in ["paragraph_size", "pool_size", "num_paragraphs"] {
            let file = toml_file(&format!("[generator]\n{} = 0\n", key));
            assert_eq!(
                load_generator_config_from(file.path(), no_env),
                Err(ConfigError::NonPositive { key: key.to_string() })
            );
        }
    }

    #[test]
    fn test_malformed_toml() {
        let file = toml_file("[generator\nparagraph_size = ");
        let err = load_generator_config_from(file.path(), no_env).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_, _)));
    }

    #[test]
    fn test_enum_names() {
        assert_eq!("simple_past".parse::<Tense>(), Ok(Tense::SimplePast));
        assert_eq!(Tense::SimplePresent.to_string(), "simple_present");
        assert_eq!("POOL".parse::<ParagraphType>(), Ok(ParagraphType::Pool));
        assert_eq!(ParagraphType::Chain.as_str(), "chain");
        assert!("sometimes".parse::<ParagraphType>().is_err());
    }
}
