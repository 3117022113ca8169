use crate::infra::{build_scorer, parse_chart_order};
use clap::{Args, ValueEnum};
use post_sentiment::config::AppConfig;
use post_sentiment::error::AppError;
use post_sentiment::report::{ChartOrder, ChartViewer};
use post_sentiment::{Corpus, SentimentPipeline};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SummaryFormat {
    Text,
    Json,
}

#[derive(Args, Debug, Default)]
pub(crate) struct AnalyzeArgs {
    /// Corpus file: one post per line, or a CSV with a `Post` column. Defaults to the built-in sample posts.
    #[arg(long)]
    pub(crate) corpus: Option<PathBuf>,
    /// Override the results table path
    #[arg(long)]
    pub(crate) results: Option<PathBuf>,
    /// Override the chart image path (format follows the extension)
    #[arg(long)]
    pub(crate) chart: Option<PathBuf>,
    /// Bar order on the chart: frequency or canonical
    #[arg(long, value_parser = parse_chart_order)]
    pub(crate) chart_order: Option<ChartOrder>,
    /// CSV lexicon (word,polarity,subjectivity[,intensity]) replacing the built-in one
    #[arg(long)]
    pub(crate) lexicon: Option<PathBuf>,
    /// Print a run summary after the outputs are written
    #[arg(long, value_enum)]
    pub(crate) summary: Option<SummaryFormat>,
    /// Open the saved chart in the system image viewer
    #[arg(long)]
    pub(crate) show: bool,
}

pub(crate) fn run_analyze<W: Write>(
    args: AnalyzeArgs,
    mut config: AppConfig,
    viewer: &dyn ChartViewer,
    out: &mut W,
) -> Result<(), AppError> {
    let AnalyzeArgs {
        corpus,
        results,
        chart,
        chart_order,
        lexicon,
        summary,
        show,
    } = args;

    if let Some(path) = results {
        config.report.results_path = path;
    }
    if let Some(path) = chart {
        config.report.chart_path = path;
    }
    if let Some(order) = chart_order {
        config.report.chart.order = order;
    }
    if show {
        config.report.chart.show = true;
    }
    let show_chart = config.report.chart.show;
    let lexicon_path = lexicon.or(config.scoring.lexicon_path);

    let corpus = match corpus {
        Some(path) => {
            let corpus = Corpus::from_path(&path)?;
            info!(path = %path.display(), posts = corpus.len(), "corpus loaded");
            corpus
        }
        None => Corpus::sample(),
    };

    let scorer = build_scorer(lexicon_path.as_deref())?;
    let pipeline = SentimentPipeline::new(&scorer, config.report);
    let run_summary = pipeline.run(&corpus, out)?;
    if show_chart {
        viewer.show(&run_summary.chart_path)?;
    }

    match summary {
        Some(SummaryFormat::Text) => writeln!(out, "{run_summary}")?,
        Some(SummaryFormat::Json) => {
            let json = serde_json::to_string_pretty(&run_summary)?;
            writeln!(out, "{json}")?;
        }
        None => {}
    }

    Ok(())
}
