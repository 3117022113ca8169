use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

const SAMPLE_POSTS: [&str; 10] = [
    "I love this new phone! The camera quality is amazing.",
    "I'm feeling really sad about what happened yesterday.",
    "It's an average product, not too good, not too bad.",
    "Absolutely fantastic experience with the service!",
    "Worst customer support ever. Totally disappointed.",
    "Meh, it's okay I guess. Could be better.",
    "Thrilled to announce our product launch! Stay tuned.",
    "Why is this app so slow and buggy?!",
    "Happy to be a part of this amazing community.",
    "I don't know what to say. Mixed feelings.",
];

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid corpus CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("corpus CSV has no `Post` column")]
    MissingPostColumn,
    #[error("corpus document {index} is empty")]
    EmptyDocument { index: usize },
}

/// Ordered, finite collection of non-empty text documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    posts: Vec<String>,
}

impl Corpus {
    pub fn new<I, S>(posts: I) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let posts: Vec<String> = posts.into_iter().map(Into::into).collect();
        if let Some(index) = posts.iter().position(|post| post.trim().is_empty()) {
            return Err(CorpusError::EmptyDocument { index });
        }
        Ok(Self { posts })
    }

    /// The built-in sample of ten social media posts.
    pub fn sample() -> Self {
        Self {
            posts: SAMPLE_POSTS.iter().map(|post| post.to_string()).collect(),
        }
    }

    /// One post per line; surrounding whitespace is trimmed and blank lines skipped.
    pub fn from_lines<R: Read>(reader: R) -> Result<Self, CorpusError> {
        let mut posts = Vec::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                posts.push(trimmed.to_string());
            }
        }
        Ok(Self { posts })
    }

    /// Reads the `Post` column of a CSV file with a header row.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self, CorpusError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        if !csv_reader.headers()?.iter().any(|header| header == "Post") {
            return Err(CorpusError::MissingPostColumn);
        }

        let mut posts = Vec::new();
        for (index, record) in csv_reader.deserialize::<CorpusRow>().enumerate() {
            let row = record?;
            if row.post.trim().is_empty() {
                return Err(CorpusError::EmptyDocument { index });
            }
            posts.push(row.post);
        }
        Ok(Self { posts })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        if is_csv {
            Self::from_csv(file)
        } else {
            Self::from_lines(file)
        }
    }

    pub fn posts(&self) -> &[String] {
        &self.posts
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.posts.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct CorpusRow {
    #[serde(rename = "Post")]
    post: String,
}
