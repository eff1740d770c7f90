pub mod noun;
pub mod paragraph;
pub mod sentence;
pub mod tags;
pub mod text;
pub mod verb;
pub mod verb_group;
pub mod word;

pub use noun::Noun;
pub use paragraph::Paragraph;
pub use sentence::Sentence;
pub use tags::{StatusTag, Tags, WordTag};
pub use verb::Verb;
pub use verb_group::VerbGroup;
pub use word::{BasicWord, BeVerb, Pronoun, Punctuation, Word};
