use crate::classify::{classify, SentimentLabel};
use crate::config::ReportConfig;
use crate::corpus::Corpus;
use crate::error::AppError;
use crate::report::{export_table, BarChart, LabelCount, LabelDistribution};
use crate::scoring::{Scorer, ScoringError, SentimentScore};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// A scored and labelled document. The label is always derived from the
/// polarity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedPost {
    text: String,
    polarity: f64,
    subjectivity: f64,
    label: SentimentLabel,
}

impl AnnotatedPost {
    pub fn new(text: impl Into<String>, score: SentimentScore) -> Self {
        Self {
            text: text.into(),
            polarity: score.polarity(),
            subjectivity: score.subjectivity(),
            label: classify(score.polarity()),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn polarity(&self) -> f64 {
        self.polarity
    }

    pub fn subjectivity(&self) -> f64 {
        self.subjectivity
    }

    pub fn label(&self) -> SentimentLabel {
        self.label
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub total_posts: usize,
    pub distribution: Vec<LabelCount>,
    pub results_path: PathBuf,
    pub chart_path: PathBuf,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analyzed {} posts", self.total_posts)?;
        for entry in &self.distribution {
            writeln!(f, "- {}: {}", entry.label, entry.count)?;
        }
        writeln!(f, "Results table: {}", self.results_path.display())?;
        write!(f, "Sentiment chart: {}", self.chart_path.display())
    }
}

/// Corpus -> scorer -> classifier -> reporter, strictly in that order.
pub struct SentimentPipeline<'a> {
    scorer: &'a dyn Scorer,
    report: ReportConfig,
}

impl<'a> SentimentPipeline<'a> {
    pub fn new(scorer: &'a dyn Scorer, report: ReportConfig) -> Self {
        Self { scorer, report }
    }

    /// Scores and classifies every post in corpus order. The first scoring
    /// failure aborts the whole batch.
    pub fn annotate(&self, corpus: &Corpus) -> Result<Vec<AnnotatedPost>, ScoringError> {
        corpus
            .iter()
            .map(|text| -> Result<AnnotatedPost, ScoringError> {
                let score = self.scorer.score(text)?;
                let post = AnnotatedPost::new(text, score);
                debug!(
                    polarity = post.polarity(),
                    subjectivity = post.subjectivity(),
                    label = %post.label(),
                    "annotated post"
                );
                Ok(post)
            })
            .collect()
    }

    /// Runs every stage and writes the confirmation line to `console` once the
    /// results table is on disk.
    pub fn run<W: Write>(&self, corpus: &Corpus, console: &mut W) -> Result<RunSummary, AppError> {
        let posts = self.annotate(corpus)?;

        let results_path = &self.report.results_path;
        export_table(results_path, &posts)?;
        writeln!(console, "Results saved to '{}'", results_path.display())?;
        info!(rows = posts.len(), path = %results_path.display(), "results table written");

        let distribution = LabelDistribution::from_posts(&posts);
        if distribution.is_empty() {
            warn!("corpus is empty; rendering chart without bars");
        }

        let chart = BarChart::sentiment_distribution(&distribution, self.report.chart.order);
        let chart_path = &self.report.chart_path;
        chart.save(chart_path, self.report.chart.width, self.report.chart.height)?;
        info!(
            bars = chart.bars().len(),
            order = %self.report.chart.order,
            path = %chart_path.display(),
            "sentiment chart saved"
        );

        Ok(RunSummary {
            total_posts: posts.len(),
            distribution: distribution.ordered(self.report.chart.order),
            results_path: results_path.clone(),
            chart_path: chart_path.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;
    use crate::report::ChartOrder;
    use crate::scoring::LexiconScorer;

    struct FixedScorer(f64);

    impl Scorer for FixedScorer {
        fn score(&self, _text: &str) -> Result<SentimentScore, ScoringError> {
            SentimentScore::new(self.0, 0.5)
        }
    }

    fn report_config() -> ReportConfig {
        ReportConfig {
            results_path: PathBuf::from("unused.csv"),
            chart_path: PathBuf::from("unused.png"),
            chart: ChartConfig {
                order: ChartOrder::Frequency,
                width: 800,
                height: 500,
                show: false,
            },
        }
    }

    #[test]
    fn label_is_derived_from_polarity() {
        let post = AnnotatedPost::new(
            "edge",
            SentimentScore::new(0.1, 0.9).expect("valid score"),
        );
        assert_eq!(post.label(), SentimentLabel::Neutral);
        assert_eq!(post.subjectivity(), 0.9);
    }

    #[test]
    fn annotate_preserves_corpus_order() {
        let scorer = LexiconScorer::default();
        let pipeline = SentimentPipeline::new(&scorer, report_config());
        let corpus = Corpus::sample();

        let posts = pipeline.annotate(&corpus).expect("sample scores");
        let texts: Vec<&str> = posts.iter().map(AnnotatedPost::text).collect();
        let expected: Vec<&str> = corpus.iter().collect();
        assert_eq!(texts, expected);
        assert!(posts
            .iter()
            .all(|post| post.label() == classify(post.polarity())));
    }

    #[test]
    fn annotate_propagates_scorer_failure() {
        let scorer = FixedScorer(3.0);
        let pipeline = SentimentPipeline::new(&scorer, report_config());
        let corpus = Corpus::new(["one", "two"]).expect("valid corpus");

        let err = pipeline.annotate(&corpus).expect_err("invalid score aborts");
        assert!(matches!(err, ScoringError::OutOfRange { .. }));
    }

    #[test]
    fn summary_lists_counts() {
        let summary = RunSummary {
            total_posts: 3,
            distribution: vec![LabelCount {
                label: SentimentLabel::Positive,
                count: 3,
            }],
            results_path: PathBuf::from("out.csv"),
            chart_path: PathBuf::from("out.png"),
        };
        let text = summary.to_string();
        assert!(text.starts_with("Analyzed 3 posts"));
        assert!(text.contains("- Positive: 3"));
    }
}
