use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::correlate::pearson_similarity;
use crate::dictionary::Dictionary;
use crate::freq::{inverse_document_frequency, term_frequency};
use crate::normalize::Normalizer;
use crate::stem::Stemmer;
use crate::vector::{cosine_similarity, vectorize, Vocabulary};

/// Similarity metric used to score documents against the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scorer {
    /// TF-IDF weighted vectors compared by cosine similarity.
    CosineTfIdf,
    /// Pearson correlation over raw term-frequency vectors.
    PearsonTf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankConfig {
    pub scorer: Scorer,
    /// Whether the query's own token list counts toward document
    /// frequency when computing IDF. Both behaviors exist in the wild;
    /// neither is canonical.
    pub idf_includes_query: bool,
    /// Keep only the best K results.
    pub top_k: Option<usize>,
    /// Drop results scoring strictly below this threshold.
    pub min_score: Option<f64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            scorer: Scorer::CosineTfIdf,
            idf_includes_query: true,
            top_k: None,
            min_score: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub doc_id: String,
    pub score: f64,
}

/// Outcome of one search: descending-ranked results plus the number of
/// documents excluded because their raw text was blank.
#[derive(Debug, Clone, Default)]
pub struct RankOutcome {
    pub results: Vec<ScoredResult>,
    pub skipped_docs: usize,
}

/// Orchestrates the whole pipeline: normalize and stem the query and
/// every document, build the shared vocabulary, compute frequencies,
/// score, and sort. Recomputes everything from raw text on every call;
/// the only shared state is the read-only dictionary.
pub struct Ranker<'d> {
    normalizer: Normalizer,
    stemmer: Stemmer<'d>,
    config: RankConfig,
}

impl<'d> Ranker<'d> {
    pub fn new(dictionary: &'d Dictionary, config: RankConfig) -> Self {
        Self {
            normalizer: Normalizer::default(),
            stemmer: Stemmer::new(dictionary),
            config,
        }
    }

    /// Replace the default normalizer, e.g. to inject a custom
    /// stopword set.
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Normalize and stem one piece of raw text.
    pub fn preprocess(&self, raw: &str) -> Vec<String> {
        self.normalizer
            .normalize(raw)
            .iter()
            .map(|token| self.stemmer.stem(token))
            .collect()
    }

    /// Rank `corpus` against `query_text`, descending by score with
    /// stable insertion-order tie-break. An empty corpus yields empty
    /// results; an empty or all-stopword query scores every document 0.
    pub fn rank(&self, query_text: &str, corpus: &[(String, String)]) -> RankOutcome {
        let query_tokens = self.preprocess(query_text);

        let mut doc_ids: Vec<&str> = Vec::new();
        let mut doc_tokens: Vec<Vec<String>> = Vec::new();
        let mut skipped_docs = 0usize;
        for (doc_id, raw_text) in corpus {
            if raw_text.trim().is_empty() {
                tracing::debug!(%doc_id, "skipping document with blank text");
                skipped_docs += 1;
                continue;
            }
            doc_ids.push(doc_id.as_str());
            doc_tokens.push(self.preprocess(raw_text));
        }

        if doc_ids.is_empty() {
            return RankOutcome {
                results: Vec::new(),
                skipped_docs,
            };
        }

        // The query always contributes to the vocabulary, whatever the
        // IDF corpus composition is.
        let vocabulary = Vocabulary::build(
            doc_tokens
                .iter()
                .map(Vec::as_slice)
                .chain(std::iter::once(query_tokens.as_slice())),
        );

        let tf_docs: Vec<HashMap<String, u32>> =
            doc_tokens.iter().map(|tokens| term_frequency(tokens)).collect();
        let tf_query = term_frequency(&query_tokens);

        let scores: Vec<f64> = match self.config.scorer {
            Scorer::CosineTfIdf => {
                let doc_lists = doc_tokens.iter().map(Vec::as_slice);
                let idf = if self.config.idf_includes_query {
                    inverse_document_frequency(
                        doc_lists.chain(std::iter::once(query_tokens.as_slice())),
                    )
                } else {
                    inverse_document_frequency(doc_lists)
                };
                let query_vector = vectorize(&tf_query, &idf, &vocabulary);
                tf_docs
                    .iter()
                    .map(|tf| cosine_similarity(&vectorize(tf, &idf, &vocabulary), &query_vector))
                    .collect()
            }
            Scorer::PearsonTf => tf_docs
                .iter()
                .map(|tf| pearson_similarity(&tf_query, tf, &vocabulary))
                .collect(),
        };

        let mut results: Vec<ScoredResult> = doc_ids
            .into_iter()
            .zip(scores)
            .map(|(doc_id, score)| ScoredResult {
                doc_id: doc_id.to_string(),
                score,
            })
            .collect();
        // Stable sort: equal scores keep corpus order.
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        if let Some(min) = self.config.min_score {
            results.retain(|r| r.score >= min);
        }
        if let Some(k) = self.config.top_k {
            results.truncate(k);
        }

        tracing::info!(
            results = results.len(),
            vocabulary = vocabulary.len(),
            skipped = skipped_docs,
            "ranked corpus against query"
        );
        RankOutcome {
            results,
            skipped_docs,
        }
    }
}
