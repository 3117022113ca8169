/// Splits text into lowercase word tokens. Apostrophes inside a word are kept
/// so contractions like "don't" stay a single token.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
        .map(|raw| raw.replace('\u{2019}', "'"))
        .map(|raw| raw.trim_matches('\'').to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}
