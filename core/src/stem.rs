use crate::dictionary::Dictionary;

/// Suffixes tried in order; only the first one whose ending and length
/// guard both hold is stripped, the rest are never considered.
const SUFFIXES: [&str; 3] = ["kan", "an", "i"];

/// Prefixes tried in order, longest variants first. Unlike the suffix
/// pass, the prefix pass moves on to the next rule when a stripped
/// candidate misses the dictionary.
const PREFIXES: [&str; 10] = [
    "meng", "meny", "men", "mem", "me", "ber", "ter", "di", "ke", "se",
];

/// Single-pass affix-stripping stemmer for Indonesian.
///
/// Deliberately shallow: one suffix strip, then one prefix strip, each
/// accepted only on a dictionary hit. No recursion and no combined
/// affix rules beyond that one pass of each; a token that resolves to
/// no root word is returned unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Stemmer<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> Stemmer<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn stem(&self, token: &str) -> String {
        // Step 1: already a root word.
        if self.dictionary.contains(token) {
            return token.to_string();
        }

        // Step 2: strip one suffix and look the candidate up.
        let candidate = strip_suffix(token);
        if self.dictionary.contains(candidate) {
            return candidate.to_string();
        }

        // Step 3: prefix rules against the suffix candidate (or the
        // original token when no suffix matched). Each rule strips
        // independently off `candidate`; the first dictionary hit wins.
        let chars = candidate.chars().count();
        for prefix in PREFIXES {
            if candidate.starts_with(prefix) && chars > prefix.len() + 2 {
                let stripped = &candidate[prefix.len()..];
                if self.dictionary.contains(stripped) {
                    return stripped.to_string();
                }
            }
        }

        // Stemming failed; emit the token as-is.
        token.to_string()
    }
}

/// The length guard counts characters, not bytes. Affixes are ASCII,
/// so stripping by byte length lands on a char boundary.
fn strip_suffix(word: &str) -> &str {
    let chars = word.chars().count();
    for suffix in SUFFIXES {
        if word.ends_with(suffix) && chars > suffix.len() + 2 {
            return &word[..word.len() - suffix.len()];
        }
    }
    word
}
