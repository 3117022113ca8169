use super::ReportError;
use crate::classify::SentimentLabel;
use crate::pipeline::AnnotatedPost;
use serde::{Serialize, Serializer};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const TABLE_HEADER: [&str; 4] = ["Post", "Polarity", "Subjectivity", "Sentiment"];

#[derive(Debug, Serialize)]
struct TableRow<'a> {
    post: &'a str,
    #[serde(serialize_with = "plain_decimal")]
    polarity: f64,
    #[serde(serialize_with = "plain_decimal")]
    subjectivity: f64,
    sentiment: SentimentLabel,
}

impl<'a> From<&'a AnnotatedPost> for TableRow<'a> {
    fn from(post: &'a AnnotatedPost) -> Self {
        Self {
            post: post.text(),
            polarity: post.polarity(),
            subjectivity: post.subjectivity(),
            sentiment: post.label(),
        }
    }
}

/// Shortest round-trip decimal, never exponent notation. Negative zero is
/// written as `0`.
pub fn format_decimal(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_string()
}

fn plain_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_decimal(*value))
}

/// Writes the header and one row per post in input order. An empty slice
/// still produces the header line.
pub fn write_table<W: Write>(writer: W, posts: &[AnnotatedPost]) -> Result<(), ReportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(TABLE_HEADER)?;
    for post in posts {
        csv_writer.serialize(TableRow::from(post))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Creates or truncates `path` and writes the results table to it.
pub fn export_table(path: &Path, posts: &[AnnotatedPost]) -> Result<(), ReportError> {
    let file = File::create(path)?;
    write_table(file, posts)
}
