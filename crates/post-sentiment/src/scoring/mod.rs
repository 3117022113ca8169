mod lexicon;
mod scorer;
mod tokenizer;

pub use lexicon::{Lexicon, LexiconEntry};
pub use scorer::LexiconScorer;
pub use tokenizer::tokenize;

use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("{field} {value} is outside the allowed range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("failed to read lexicon: {0}")]
    LexiconIo(#[from] std::io::Error),
    #[error("invalid lexicon CSV data: {0}")]
    LexiconCsv(#[from] csv::Error),
    #[error("lexicon row {row} ('{word}') is invalid: {reason}")]
    LexiconEntry {
        row: usize,
        word: String,
        reason: String,
    },
}

/// Polarity in [-1, 1] and subjectivity in [0, 1] for one document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentScore {
    polarity: f64,
    subjectivity: f64,
}

impl SentimentScore {
    pub fn new(polarity: f64, subjectivity: f64) -> Result<Self, ScoringError> {
        check_range("polarity", polarity, -1.0, 1.0)?;
        check_range("subjectivity", subjectivity, 0.0, 1.0)?;
        Ok(Self {
            polarity,
            subjectivity,
        })
    }

    pub const fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }

    pub fn polarity(&self) -> f64 {
        self.polarity
    }

    pub fn subjectivity(&self) -> f64 {
        self.subjectivity
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ScoringError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ScoringError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Turns a text into a polarity/subjectivity score. Failures abort the run.
pub trait Scorer {
    fn score(&self, text: &str) -> Result<SentimentScore, ScoringError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_accepts_range_bounds() {
        let score = SentimentScore::new(-1.0, 1.0).expect("bounds are valid");
        assert_eq!(score.polarity(), -1.0);
        assert_eq!(score.subjectivity(), 1.0);
    }

    #[test]
    fn score_rejects_out_of_range_polarity() {
        let err = SentimentScore::new(1.5, 0.2).expect_err("polarity too large");
        assert!(matches!(
            err,
            ScoringError::OutOfRange {
                field: "polarity",
                ..
            }
        ));
    }

    #[test]
    fn score_rejects_non_finite_values() {
        assert!(SentimentScore::new(f64::NAN, 0.0).is_err());
        assert!(SentimentScore::new(0.0, f64::INFINITY).is_err());
        assert!(SentimentScore::new(0.0, -0.01).is_err());
    }
}
