use crate::analyze::{run_analyze, AnalyzeArgs};
use crate::score::{run_score, ScoreArgs};
use clap::{Parser, Subcommand};
use post_sentiment::config::AppConfig;
use post_sentiment::error::AppError;
use post_sentiment::report::SystemViewer;
use post_sentiment::telemetry;
use std::io;

#[derive(Parser, Debug)]
#[command(
    name = "post-sentiment",
    about = "Score, classify and chart the sentiment of short text posts",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a corpus, export the results table and render the chart (default command)
    Analyze(AnalyzeArgs),
    /// Score and classify the given texts without writing any files
    Score(ScoreArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Analyze(AnalyzeArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let mut stdout = io::stdout().lock();
    match command {
        Command::Analyze(args) => run_analyze(args, config, &SystemViewer, &mut stdout),
        Command::Score(args) => run_score(args, &config, &mut stdout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use post_sentiment::report::ChartOrder;

    #[test]
    fn no_subcommand_defaults_to_analyze() {
        let cli = Cli::try_parse_from(["post-sentiment"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn analyze_flags_parse() {
        let cli = Cli::try_parse_from([
            "post-sentiment",
            "analyze",
            "--corpus",
            "posts.txt",
            "--chart-order",
            "canonical",
            "--summary",
            "json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Analyze(args)) => {
                assert_eq!(args.corpus.as_deref(), Some(std::path::Path::new("posts.txt")));
                assert_eq!(args.chart_order, Some(ChartOrder::Canonical));
                assert!(args.summary.is_some());
                assert!(!args.show);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn show_flag_parses() {
        let cli = Cli::try_parse_from(["post-sentiment", "analyze", "--show"]).expect("parses");
        match cli.command {
            Some(Command::Analyze(args)) => assert!(args.show),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_chart_order() {
        let result = Cli::try_parse_from(["post-sentiment", "analyze", "--chart-order", "random"]);
        assert!(result.is_err());
    }

    #[test]
    fn score_requires_text() {
        assert!(Cli::try_parse_from(["post-sentiment", "score"]).is_err());
        assert!(Cli::try_parse_from(["post-sentiment", "score", "so good"]).is_ok());
    }
}
