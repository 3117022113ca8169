pub mod classify;
pub mod config;
pub mod corpus;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod scoring;
pub mod telemetry;

pub use classify::{classify, SentimentLabel};
pub use corpus::Corpus;
pub use pipeline::{AnnotatedPost, RunSummary, SentimentPipeline};
pub use scoring::{LexiconScorer, Scorer, SentimentScore};
