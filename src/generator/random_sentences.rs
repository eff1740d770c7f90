use rand::Rng;

use super::{GeneratorError, MAX_RETRIES, clamp_probability, happens};
use crate::domain::{Noun, Pronoun, Punctuation, Sentence, VerbGroup, Word, WordTag};

/// Sentence endings; a period is twice as likely as an exclamation mark.
const ENDINGS: [Punctuation; 3] = [Punctuation::Period, Punctuation::Period, Punctuation::Exclamation];

/// Builds single raw sentences from the word lists.
#[derive(Debug, Clone)]
pub struct RandomSentences {
  verbs: Vec<VerbGroup>,
  nouns: Vec<Noun>,
}

impl RandomSentences {
  pub fn new(verbs: Vec<VerbGroup>, nouns: Vec<Noun>) -> Result<Self, GeneratorError> {
    if verbs.is_empty() {
      return Err(GeneratorError::EmptyVerbList);
    }
    if nouns.is_empty() {
      return Err(GeneratorError::EmptyNounList);
    }
    Ok(Self { verbs, nouns })
  }

  fn random_noun<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
    Word::Noun(self.nouns[rng.random_range(0..self.nouns.len())].clone())
  }

  fn random_pronoun<R: Rng + ?Sized>(rng: &mut R) -> Pronoun {
    Pronoun::ALL[rng.random_range(0..Pronoun::ALL.len())]
  }

  pub fn subject<R: Rng + ?Sized>(&self, p_pronoun: f64, rng: &mut R) -> Word {
    if happens(rng, p_pronoun) {
      Word::Pronoun(Self::random_pronoun(rng).subject())
    } else {
      self.random_noun(rng)
    }
  }

  pub fn object<R: Rng + ?Sized>(&self, p_pronoun: f64, rng: &mut R) -> Word {
    if happens(rng, p_pronoun) {
      Word::Pronoun(Self::random_pronoun(rng).object())
    } else {
      self.random_noun(rng)
    }
  }

  /// Verb, satellites and objects, closed by an ending mark.
  pub fn predicate<R: Rng + ?Sized>(&self, p_pronoun: f64, rng: &mut R) -> Vec<Word> {
    let p_pronoun = clamp_probability(p_pronoun);
    let verb_group = &self.verbs[rng.random_range(0..self.verbs.len())];
    let objects = self.get_objects(verb_group.objects, p_pronoun, rng);

    let mut predicate = assign_objects(verb_group, objects);
    predicate.push(Word::Punctuation(ENDINGS[rng.random_range(0..ENDINGS.len())]));
    predicate
  }

  /// Only the first object may be a pronoun. Repeats are rejected until
  /// the retry ceiling is hit.
  fn get_objects<R: Rng + ?Sized>(&self, count: usize, p_pronoun: f64, rng: &mut R) -> Vec<Word> {
    let mut objects: Vec<Word> = Vec::with_capacity(count);
    let mut loop_count = 0;
    while objects.len() < count {
      let candidate = if objects.is_empty() {
        self.object(p_pronoun, rng)
      } else {
        self.object(0.0, rng)
      };
      if !objects.contains(&candidate) || loop_count > MAX_RETRIES {
        objects.push(candidate);
      }
      loop_count += 1;
    }
    objects
  }

  /// Resamples the predicate while it would repeat the subject
  /// ("He likes him"), then prepends the subject.
  pub fn sentence<R: Rng + ?Sized>(&self, subject: Word, p_pronoun: f64, rng: &mut R) -> Sentence {
    let p_pronoun = clamp_probability(p_pronoun);
    let to_test = match subject.as_pronoun() {
      Some(pronoun) => Word::Pronoun(pronoun.object()),
      None => subject.clone(),
    };

    let mut predicate = self.predicate(p_pronoun, rng);
    for _ in 0..MAX_RETRIES {
      if !predicate.contains(&to_test) {
        break;
      }
      predicate = self.predicate(p_pronoun, rng);
    }
    predicate.insert(0, subject);
    Sentence::new(predicate)
  }
}

/// Orders a verb's preposition, particle and objects.
///
/// Objects are taken from the back: the first fills the preposition slot,
/// later pronouns go in front of the particle and later nouns after it.
pub fn assign_objects(verb_group: &VerbGroup, mut objects: Vec<Word>) -> Vec<Word> {
  let mut preposition: Vec<Option<Word>> = vec![verb_group.preposition.clone().map(Word::Basic)];
  let mut particle: Vec<Option<Word>> = vec![verb_group.particle.clone().map(Word::Basic)];

  while let Some(object) = objects.pop() {
    if preposition.len() < 2 {
      preposition.push(Some(object));
    } else if matches!(object, Word::Pronoun(_)) {
      particle.insert(0, Some(object));
    } else {
      particle.push(Some(object));
    }
  }

  let mut predicate = vec![Some(Word::Verb(verb_group.verb.clone()))];
  if preposition_precedes_particle(&preposition, &particle) {
    predicate.extend(preposition);
    predicate.extend(particle);
  } else {
    predicate.extend(particle);
    predicate.extend(preposition);
  }
  predicate.into_iter().flatten().collect()
}

/// True only for "pick it up": no preposition, a bare separable particle and
/// a pronoun object.
fn preposition_precedes_particle(preposition: &[Option<Word>], particle: &[Option<Word>]) -> bool {
  let lacks_preposition = preposition.iter().any(Option::is_none);
  let only_separable_particle = particle
    .iter()
    .all(|word| word.as_ref().is_some_and(|w| w.has_tag(WordTag::SeparableParticle)));
  let preposition_with_pronoun = preposition.iter().any(|word| matches!(word, Some(Word::Pronoun(_))));
  lacks_preposition && only_separable_particle && preposition_with_pronoun
}
