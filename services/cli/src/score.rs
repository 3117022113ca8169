use crate::infra::build_scorer;
use clap::Args;
use post_sentiment::config::AppConfig;
use post_sentiment::error::AppError;
use post_sentiment::report::format_decimal;
use post_sentiment::{AnnotatedPost, Scorer};
use std::io::Write;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Texts to score
    #[arg(required = true)]
    pub(crate) texts: Vec<String>,
    /// CSV lexicon replacing the built-in one
    #[arg(long)]
    pub(crate) lexicon: Option<PathBuf>,
    /// Emit one JSON object per line instead of tab-separated text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score<W: Write>(
    args: ScoreArgs,
    config: &AppConfig,
    out: &mut W,
) -> Result<(), AppError> {
    let lexicon_path = args.lexicon.or_else(|| config.scoring.lexicon_path.clone());
    let scorer = build_scorer(lexicon_path.as_deref())?;

    for text in &args.texts {
        let post = AnnotatedPost::new(text.as_str(), scorer.score(text)?);
        if args.json {
            let line = serde_json::to_string(&post)?;
            writeln!(out, "{line}")?;
        } else {
            writeln!(
                out,
                "{}\t{}\t{}\t{}",
                post.label(),
                format_decimal(post.polarity()),
                format_decimal(post.subjectivity()),
                post.text()
            )?;
        }
    }

    Ok(())
}
