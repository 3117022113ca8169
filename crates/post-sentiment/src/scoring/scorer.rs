use super::lexicon::Lexicon;
use super::tokenizer::tokenize;
use super::{Scorer, ScoringError, SentimentScore};
use tracing::trace;

const NEGATION_FACTOR: f64 = -0.5;
const DEFAULT_NEGATION_WINDOW: usize = 3;

/// Averages lexicon assessments across a text, applying intensifiers and
/// negations to the sentiment word that follows them.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: Lexicon,
    negation_window: usize,
}

impl LexiconScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            negation_window: DEFAULT_NEGATION_WINDOW,
        }
    }

    /// Number of tokens after a negation word within which a sentiment word is
    /// flipped. Zero disables negation handling.
    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new(Lexicon::standard())
    }
}

impl Scorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<SentimentScore, ScoringError> {
        let tokens = tokenize(text);

        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut assessed = 0usize;
        let mut intensity = 1.0;
        let mut negation_distance: Option<usize> = None;

        for token in &tokens {
            if self.lexicon.is_negation(token) {
                negation_distance = Some(0);
                intensity = 1.0;
                continue;
            }

            match self.lexicon.get(token) {
                Some(entry) if entry.is_intensifier() => {
                    intensity *= entry.intensity;
                }
                Some(entry) => {
                    let mut polarity = entry.polarity * intensity;
                    let subjectivity = entry.subjectivity * intensity;
                    if negation_distance.is_some_and(|distance| distance < self.negation_window) {
                        polarity *= NEGATION_FACTOR;
                    }

                    trace!(%token, polarity, subjectivity, "assessed token");
                    polarity_sum += polarity;
                    subjectivity_sum += subjectivity;
                    assessed += 1;
                    intensity = 1.0;
                    negation_distance = None;
                }
                None => {
                    intensity = 1.0;
                }
            }

            if let Some(distance) = negation_distance.as_mut() {
                *distance += 1;
            }
        }

        if assessed == 0 {
            return Ok(SentimentScore::neutral());
        }

        let count = assessed as f64;
        SentimentScore::new(
            (polarity_sum / count).clamp(-1.0, 1.0),
            (subjectivity_sum / count).clamp(0.0, 1.0),
        )
    }
}
