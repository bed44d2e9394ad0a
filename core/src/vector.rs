use std::collections::{BTreeSet, HashMap};

/// Sorted, deduplicated term universe for one search.
///
/// Vectors are only comparable when they were built from the same
/// vocabulary: entry `i` of every vector corresponds to `terms[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    /// Union of all terms across the supplied token lists, ascending
    /// by raw string comparison.
    pub fn build<'a, I>(token_lists: I) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let unique: BTreeSet<&str> = token_lists
            .into_iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();
        let terms = unique.into_iter().map(str::to_string).collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Project a term-frequency map into TF-IDF weighted space: one entry
/// per vocabulary term, `tf * idf`, with absent terms contributing 0.
pub fn vectorize(
    tf: &HashMap<String, u32>,
    idf: &HashMap<String, f64>,
    vocabulary: &Vocabulary,
) -> Vec<f64> {
    vocabulary
        .terms()
        .iter()
        .map(|term| {
            let count = tf.get(term).copied().unwrap_or(0);
            let weight = idf.get(term).copied().unwrap_or(0.0);
            f64::from(count) * weight
        })
        .collect()
}

/// Dot product over Euclidean norms. A zero-norm operand short-circuits
/// to 0.0 instead of dividing by zero.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot(a, b) / (norm_a * norm_b)
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::{inverse_document_frequency, term_frequency};

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn vocabulary_is_sorted_dedup_union() {
        let a = toks(&["kucing", "makan", "makan"]);
        let b = toks(&["anjing", "makan"]);
        let vocab = Vocabulary::build([a.as_slice(), b.as_slice()]);
        assert_eq!(vocab.terms(), &["anjing", "kucing", "makan"]);
    }

    #[test]
    fn vocabulary_of_nothing_is_empty() {
        let vocab = Vocabulary::build(std::iter::empty());
        assert!(vocab.is_empty());
    }

    #[test]
    fn vector_length_matches_vocabulary() {
        let a = toks(&["satu", "dua", "tiga"]);
        let vocab = Vocabulary::build([a.as_slice()]);
        let vec = vectorize(
            &term_frequency(&a),
            &inverse_document_frequency([a.as_slice()]),
            &vocab,
        );
        assert_eq!(vec.len(), vocab.len());
    }

    #[test]
    fn vectorize_round_trips_counts_scaled_by_idf() {
        let doc = toks(&["ikan", "ikan", "kucing"]);
        let other = toks(&["anjing"]);
        let tf = term_frequency(&doc);
        let idf = inverse_document_frequency([doc.as_slice(), other.as_slice()]);
        let vocab = Vocabulary::build([doc.as_slice(), other.as_slice()]);
        let vec = vectorize(&tf, &idf, &vocab);
        for (i, term) in vocab.terms().iter().enumerate() {
            let count = tf.get(term).copied().unwrap_or(0);
            let weight = idf.get(term).copied().unwrap_or(0.0);
            assert_eq!(vec[i], f64::from(count) * weight);
        }
    }

    #[test]
    fn cosine_of_a_vector_with_itself_is_one() {
        let v = [1.0, 2.0, 3.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cosine_against_zero_vector_is_zero() {
        let v = [1.0, 2.0, 3.0];
        let zero = [0.0, 0.0, 0.0];
        assert_eq!(cosine_similarity(&v, &zero), 0.0);
        assert_eq!(cosine_similarity(&zero, &v), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn cosine_of_opposite_vectors_is_negative_one() {
        let v = [1.0, 0.0];
        let w = [-1.0, 0.0];
        assert!((cosine_similarity(&v, &w) + 1.0).abs() < 1e-12);
    }
}
