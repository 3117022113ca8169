use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity must exceed this value for a post to count as positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Polarity must fall below this value for a post to count as negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Positive, Self::Negative, Self::Neutral]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }

    /// Position in the canonical Positive, Negative, Neutral order.
    pub const fn rank(self) -> usize {
        match self {
            Self::Positive => 0,
            Self::Negative => 1,
            Self::Neutral => 2,
        }
    }

    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            Self::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a polarity score to its three-way label. Both thresholds are strict,
/// so exactly 0.1 and -0.1 (and NaN) stay neutral.
pub fn classify(polarity: f64) -> SentimentLabel {
    SentimentLabel::from_polarity(polarity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_above_threshold_is_positive() {
        for polarity in [0.1000001, 0.2, 0.5, 1.0] {
            assert_eq!(classify(polarity), SentimentLabel::Positive, "{polarity}");
        }
    }

    #[test]
    fn polarity_below_threshold_is_negative() {
        for polarity in [-0.1000001, -0.3, -1.0] {
            assert_eq!(classify(polarity), SentimentLabel::Negative, "{polarity}");
        }
    }

    #[test]
    fn boundaries_are_neutral() {
        assert_eq!(classify(0.1), SentimentLabel::Neutral);
        assert_eq!(classify(-0.1), SentimentLabel::Neutral);
        assert_eq!(classify(0.0), SentimentLabel::Neutral);
        assert_eq!(classify(-0.05), SentimentLabel::Neutral);
    }

    #[test]
    fn nan_falls_through_to_neutral() {
        assert_eq!(classify(f64::NAN), SentimentLabel::Neutral);
    }

    #[test]
    fn canonical_order_matches_rank() {
        let ranks: Vec<usize> = SentimentLabel::ordered()
            .iter()
            .map(|label| label.rank())
            .collect();
        assert_eq!(ranks, vec![0, 1, 2]);
        assert_eq!(SentimentLabel::Negative.to_string(), "Negative");
    }
}
