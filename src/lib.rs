pub mod answer_checker;
pub mod comparison;
pub mod config;
pub mod connector;
pub mod domain;
pub mod error_maker;
pub mod generator;
pub mod grammarizer;
pub mod paragraphs_generator;
pub mod serializer;
pub mod word_lists;
