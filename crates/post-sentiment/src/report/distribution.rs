use crate::classify::SentimentLabel;
use crate::pipeline::AnnotatedPost;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How bars are ordered along the chart's x-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartOrder {
    /// Most frequent label first; ties keep the canonical order.
    #[default]
    Frequency,
    /// Positive, Negative, Neutral.
    Canonical,
}

impl FromStr for ChartOrder {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "frequency" | "freq" => Ok(Self::Frequency),
            "canonical" | "fixed" => Ok(Self::Canonical),
            other => Err(format!(
                "unknown chart order '{other}' (expected 'frequency' or 'canonical')"
            )),
        }
    }
}

impl fmt::Display for ChartOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frequency => f.write_str("frequency"),
            Self::Canonical => f.write_str("canonical"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: SentimentLabel,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelDistribution {
    counts: [usize; 3],
}

impl LabelDistribution {
    pub fn from_posts(posts: &[AnnotatedPost]) -> Self {
        posts.iter().map(AnnotatedPost::label).collect()
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        self.counts[label.rank()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Observed labels only, arranged per `order`.
    pub fn ordered(&self, order: ChartOrder) -> Vec<LabelCount> {
        let mut entries: Vec<LabelCount> = SentimentLabel::ordered()
            .into_iter()
            .map(|label| LabelCount {
                label,
                count: self.count(label),
            })
            .filter(|entry| entry.count > 0)
            .collect();

        if order == ChartOrder::Frequency {
            // stable sort keeps canonical order among equal counts
            entries.sort_by(|a, b| b.count.cmp(&a.count));
        }
        entries
    }
}

impl FromIterator<SentimentLabel> for LabelDistribution {
    fn from_iter<I: IntoIterator<Item = SentimentLabel>>(iter: I) -> Self {
        let mut distribution = Self::default();
        for label in iter {
            distribution.counts[label.rank()] += 1;
        }
        distribution
    }
}
