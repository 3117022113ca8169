use post_sentiment::error::AppError;
use post_sentiment::report::ChartOrder;
use post_sentiment::scoring::Lexicon;
use post_sentiment::LexiconScorer;
use std::path::Path;
use tracing::info;

pub(crate) fn parse_chart_order(raw: &str) -> Result<ChartOrder, String> {
    raw.parse()
}

/// Uses the lexicon at `path` when one is given, the built-in lexicon otherwise.
pub(crate) fn build_scorer(path: Option<&Path>) -> Result<LexiconScorer, AppError> {
    let lexicon = match path {
        Some(path) => {
            let lexicon = Lexicon::from_path(path)?;
            info!(path = %path.display(), entries = lexicon.len(), "custom lexicon loaded");
            lexicon
        }
        None => Lexicon::standard(),
    };
    Ok(LexiconScorer::new(lexicon))
}
