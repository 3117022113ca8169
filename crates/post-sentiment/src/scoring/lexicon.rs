use super::ScoringError;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Lexicon word, polarity, subjectivity, intensity.
const DEFAULT_ENTRIES: &[(&str, f64, f64, f64)] = &[
    // positive
    ("amazing", 0.6, 0.9, 1.0),
    ("awesome", 1.0, 1.0, 1.0),
    ("beautiful", 0.85, 1.0, 1.0),
    ("best", 1.0, 0.3, 1.0),
    ("better", 0.5, 0.5, 1.0),
    ("brilliant", 0.9, 1.0, 1.0),
    ("excellent", 1.0, 1.0, 1.0),
    ("excited", 0.375, 0.75, 1.0),
    ("fantastic", 0.4, 0.9, 1.0),
    ("fine", 0.4167, 0.5, 1.0),
    ("fun", 0.3, 0.2, 1.0),
    ("glad", 0.5, 1.0, 1.0),
    ("good", 0.7, 0.6, 1.0),
    ("great", 0.8, 0.75, 1.0),
    ("happy", 0.8, 1.0, 1.0),
    ("helpful", 0.5, 0.5, 1.0),
    ("love", 0.5, 0.6, 1.0),
    ("lovely", 0.5, 0.75, 1.0),
    ("new", 0.1364, 0.4545, 1.0),
    ("nice", 0.6, 1.0, 1.0),
    ("okay", 0.5, 0.5, 1.0),
    ("perfect", 1.0, 1.0, 1.0),
    ("pleased", 0.5, 0.75, 1.0),
    ("recommend", 0.3, 0.4, 1.0),
    ("smooth", 0.4, 0.6, 1.0),
    ("thrilled", 0.6, 0.8, 1.0),
    ("wonderful", 1.0, 1.0, 1.0),
    // negative
    ("angry", -0.5, 1.0, 1.0),
    ("annoying", -0.8, 0.9, 1.0),
    ("average", -0.15, 0.4, 1.0),
    ("awful", -1.0, 1.0, 1.0),
    ("bad", -0.7, 0.6667, 1.0),
    ("boring", -1.0, 1.0, 1.0),
    ("broken", -0.4, 0.4, 1.0),
    ("buggy", -0.5, 0.6, 1.0),
    ("disappointed", -0.75, 0.75, 1.0),
    ("disappointing", -0.6, 0.7, 1.0),
    ("frustrated", -0.7, 0.8, 1.0),
    ("hate", -0.8, 0.9, 1.0),
    ("horrible", -1.0, 1.0, 1.0),
    ("meh", -0.2, 0.5, 1.0),
    ("poor", -0.4, 0.6, 1.0),
    ("sad", -0.5, 1.0, 1.0),
    ("slow", -0.3, 0.4, 1.0),
    ("terrible", -1.0, 1.0, 1.0),
    ("unhappy", -0.6, 0.9, 1.0),
    ("useless", -0.5, 0.2, 1.0),
    ("worse", -0.4, 0.6, 1.0),
    ("worst", -1.0, 1.0, 1.0),
    ("wrong", -0.5, 0.9, 1.0),
    // neutral but opinionated
    ("mixed", 0.0, 0.1, 1.0),
    ("guess", 0.0, 0.2, 1.0),
    // intensifiers
    ("absolutely", 0.0, 0.0, 1.3),
    ("completely", 0.0, 0.0, 1.3),
    ("extremely", 0.0, 0.0, 1.5),
    ("highly", 0.0, 0.0, 1.3),
    ("incredibly", 0.0, 0.0, 1.5),
    ("quite", 0.0, 0.0, 1.1),
    ("really", 0.0, 0.0, 1.2),
    ("slightly", 0.0, 0.0, 0.7),
    ("so", 0.0, 0.0, 1.3),
    ("somewhat", 0.0, 0.0, 0.8),
    ("too", 0.0, 0.0, 1.2),
    ("totally", 0.0, 0.0, 1.3),
    ("very", 0.0, 0.0, 1.3),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "nothing", "nobody", "don't", "doesn't", "didn't",
    "isn't", "wasn't", "aren't", "weren't", "can't", "cannot", "couldn't", "won't", "wouldn't",
    "shouldn't", "haven't", "hasn't",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconEntry {
    pub polarity: f64,
    pub subjectivity: f64,
    pub intensity: f64,
}

impl LexiconEntry {
    /// An entry that carries no sentiment of its own and only scales the next word.
    pub fn is_intensifier(&self) -> bool {
        self.polarity == 0.0 && self.intensity != 1.0
    }
}

#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
    negations: Vec<String>,
}

impl Lexicon {
    /// No entries, built-in negations.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
            negations: NEGATIONS.iter().map(|word| word.to_string()).collect(),
        }
    }

    pub fn standard() -> Self {
        let mut lexicon = Self::empty();
        for &(word, polarity, subjectivity, intensity) in DEFAULT_ENTRIES {
            lexicon.entries.insert(
                word.to_string(),
                LexiconEntry {
                    polarity,
                    subjectivity,
                    intensity,
                },
            );
        }
        lexicon
    }

    /// Loads entries from a CSV file with `word,polarity,subjectivity[,intensity]`
    /// columns. Negation words are always the built-in set.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ScoringError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut lexicon = Self::empty();

        for (index, record) in csv_reader.deserialize::<LexiconRow>().enumerate() {
            let row = record?;
            // header is line 1
            let row_number = index + 2;
            let entry = row.validate(row_number)?;
            lexicon.insert(&row.word, entry);
        }

        Ok(lexicon)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScoringError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn insert(&mut self, word: &str, entry: LexiconEntry) {
        self.entries.insert(word.trim().to_lowercase(), entry);
    }

    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.iter().any(|negation| negation == word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Deserialize)]
struct LexiconRow {
    word: String,
    polarity: f64,
    subjectivity: f64,
    #[serde(default)]
    intensity: Option<f64>,
}

impl LexiconRow {
    fn validate(&self, row: usize) -> Result<LexiconEntry, ScoringError> {
        let invalid = |reason: &str| ScoringError::LexiconEntry {
            row,
            word: self.word.clone(),
            reason: reason.to_string(),
        };

        if self.word.trim().is_empty() {
            return Err(invalid("word is empty"));
        }
        if !(-1.0..=1.0).contains(&self.polarity) {
            return Err(invalid("polarity must be within -1..=1"));
        }
        if !(0.0..=1.0).contains(&self.subjectivity) {
            return Err(invalid("subjectivity must be within 0..=1"));
        }
        let intensity = self.intensity.unwrap_or(1.0);
        if !intensity.is_finite() || intensity <= 0.0 {
            return Err(invalid("intensity must be a positive number"));
        }

        Ok(LexiconEntry {
            polarity: self.polarity,
            subjectivity: self.subjectivity,
            intensity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_lexicon_knows_common_words() {
        let lexicon = Lexicon::standard();
        assert!(lexicon.get("amazing").expect("amazing present").polarity > 0.1);
        assert!(lexicon.get("worst").expect("worst present").polarity < -0.1);
        assert!(lexicon.get("very").expect("very present").is_intensifier());
        assert!(!lexicon.get("mixed").expect("mixed present").is_intensifier());
        assert!(lexicon.is_negation("don't"));
        assert!(!lexicon.is_negation("do"));
    }

    #[test]
    fn loads_entries_from_csv() {
        let input = "word,polarity,subjectivity,intensity\n\
Stellar,0.9,0.8,\n\
hardly,0,0,0.5\n";
        let lexicon = Lexicon::from_reader(input.as_bytes()).expect("lexicon loads");
        assert_eq!(lexicon.len(), 2);
        let stellar = lexicon.get("stellar").expect("lowercased key");
        assert_eq!(stellar.intensity, 1.0);
        assert!(lexicon.get("hardly").expect("hardly present").is_intensifier());
    }

    #[test]
    fn rejects_out_of_range_rows() {
        let input = "word,polarity,subjectivity\ngood,0.5,0.5\nodd,2.0,0.5\n";
        let err = Lexicon::from_reader(input.as_bytes()).expect_err("row rejected");
        match err {
            ScoringError::LexiconEntry { row, word, .. } => {
                assert_eq!(row, 3);
                assert_eq!(word, "odd");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
