use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paragraph_generator::answer_checker::AnswerChecker;
use paragraph_generator::paragraphs_generator::ParagraphsGenerator;
use paragraph_generator::word_lists::{WordLists, load_word_lists};
use paragraph_generator::{config, serializer};

#[derive(Parser, Debug)]
#[command(version, about = "Generate English paragraphs with grammar errors to find", long_about = None)]
struct Args {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Print answer and error paragraphs
  Generate {
    /// Number of paragraphs (overrides num_paragraphs)
    #[arg(short, long)]
    count: Option<usize>,

    /// Seed for reproducible output (overrides seed)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON word-list file; the built-in lists are used when omitted
    #[arg(short, long)]
    word_lists: Option<PathBuf>,

    /// Print serialized paragraphs instead of text
    #[arg(long)]
    json: bool,
  },
  /// Score a submission against a serialized answer paragraph
  Check {
    /// JSON file holding the answer paragraph
    #[arg(short, long)]
    answer: PathBuf,

    /// The submitted text
    #[arg(short, long)]
    submission: String,
  },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "paragraph_generator=info".into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  match Args::parse().command {
    Command::Generate {
      count,
      seed,
      word_lists,
      json,
    } => {
      let mut settings = config::load_generator_config()?;
      if let Some(count) = count {
        settings.num_paragraphs = count;
      }
      if seed.is_some() {
        settings.seed = seed;
      }
      let lists = match word_lists {
        Some(path) => load_word_lists(&path)?,
        None => WordLists::bundled(),
      };

      let generator = ParagraphsGenerator::new(settings, lists);
      let generated = generator.generate_paragraphs(&mut generator.rng())?;

      if json {
        let mut records = Vec::with_capacity(generated.len());
        for item in &generated {
          records.push(serde_json::json!({
            "answer": serializer::to_value(&item.answer)?,
            "error": serializer::to_value(&item.error)?,
            "error_count": item.error_count,
          }));
        }
        println!("{}", serde_json::to_string_pretty(&records)?);
      } else {
        for item in &generated {
          println!("{}\n{}\n", item.answer_text(), item.error_text());
        }
      }
    }
    Command::Check { answer, submission } => {
      let content = std::fs::read_to_string(&answer)?;
      let original = serializer::from_json(&content)?;
      let checker = AnswerChecker::new(&submission, original);

      let sentences = checker.get_sentence_hints();
      let words = checker.get_word_hints();
      println!(
        "Sentence errors: {} (missing sentences: {})\n{}\n",
        sentences.error_count, sentences.missing_sentences, sentences.hint_paragraph
      );
      println!(
        "Word errors: {} (missing words: {})\n{}",
        words.error_count, words.missing_words, words.hint_paragraph
      );
      if checker.is_submission_correct() {
        println!("\nCorrect!");
      }
    }
  }
  Ok(())
}
