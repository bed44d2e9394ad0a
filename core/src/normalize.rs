use lazy_static::lazy_static;
use std::collections::HashSet;

/// Characters replaced with a space before splitting. This is a
/// per-`char` class replacement, not a regex; multi-byte sequences
/// pass through untouched.
const PUNCTUATION: &str = ",.!?;:-_()[]{}\"'";

lazy_static! {
    static ref DEFAULT_STOPWORDS: StopwordSet = StopwordSet::from_words([
        "yang", "dan", "atau", "di", "ke", "dari", "itu", "ini", "ada", "untuk", "pada",
    ]);
}

/// Tokens dropped during normalization.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words.into_iter().map(|w| w.as_ref().to_string()).collect();
        Self { words }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        DEFAULT_STOPWORDS.clone()
    }
}

/// Turns raw text into cleaned tokens: lowercase, punctuation replaced
/// with spaces, whitespace split, stopwords dropped. Order is
/// preserved and tokens are not deduplicated. This stage never fails.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    stopwords: StopwordSet,
}

impl Normalizer {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self { stopwords }
    }

    pub fn normalize(&self, raw: &str) -> Vec<String> {
        let lowered = raw.to_lowercase();
        let cleaned: String = lowered
            .chars()
            .map(|c| if PUNCTUATION.contains(c) { ' ' } else { c })
            .collect();
        cleaned
            .split_whitespace()
            .filter(|token| !self.stopwords.contains(token))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        let tokens = Normalizer::default().normalize("Kucing, Makan! (ikan)");
        assert_eq!(tokens, vec!["kucing", "makan", "ikan"]);
    }

    #[test]
    fn drops_stopwords_but_keeps_order_and_repeats() {
        let tokens = Normalizer::default().normalize("ikan dan ikan untuk kucing");
        assert_eq!(tokens, vec!["ikan", "ikan", "kucing"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(Normalizer::default().normalize("").is_empty());
        assert!(Normalizer::default().normalize("  \t \n ").is_empty());
    }

    #[test]
    fn hyphen_and_underscore_split_tokens() {
        let tokens = Normalizer::default().normalize("rumah-sakit data_set");
        assert_eq!(tokens, vec!["rumah", "sakit", "data", "set"]);
    }

    #[test]
    fn custom_stopwords_are_injected() {
        let normalizer = Normalizer::new(StopwordSet::from_words(["ikan"]));
        let tokens = normalizer.normalize("ikan dan kucing");
        // "dan" is no longer a stopword with the custom set
        assert_eq!(tokens, vec!["dan", "kucing"]);
    }

    #[test]
    fn multibyte_text_passes_through() {
        let tokens = Normalizer::default().normalize("caf\u{e9} enak");
        assert_eq!(tokens, vec!["caf\u{e9}", "enak"]);
    }
}
