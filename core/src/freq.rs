use std::collections::{HashMap, HashSet};

/// Count term occurrences in one token sequence. A term absent from
/// the map has count 0.
pub fn term_frequency(tokens: &[String]) -> HashMap<String, u32> {
    let mut tf = HashMap::new();
    for token in tokens {
        *tf.entry(token.clone()).or_insert(0) += 1;
    }
    tf
}

/// Document-frequency-derived IDF weights over a set of token lists.
///
/// Duplicates within one list count once; `idf[t] = ln(n / (1 + df[t]))`
/// where `n` is the number of lists supplied. Weights can be zero or
/// negative and are not clamped. Whether the query's own token list is
/// part of the input is the caller's choice.
pub fn inverse_document_frequency<'a, I>(token_lists: I) -> HashMap<String, f64>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut total_docs = 0usize;
    let mut df: HashMap<&'a str, u32> = HashMap::new();
    for tokens in token_lists {
        total_docs += 1;
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for term in unique {
            *df.entry(term).or_insert(0) += 1;
        }
    }
    let n = total_docs as f64;
    df.into_iter()
        .map(|(term, count)| (term.to_string(), (n / (1.0 + f64::from(count))).ln()))
        .collect()
}
