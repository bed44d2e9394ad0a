pub mod correlate;
pub mod dictionary;
pub mod freq;
pub mod normalize;
pub mod rank;
pub mod stem;
pub mod vector;

pub use correlate::pearson_similarity;
pub use dictionary::Dictionary;
pub use normalize::{Normalizer, StopwordSet};
pub use rank::{RankConfig, RankOutcome, Ranker, ScoredResult, Scorer};
pub use stem::Stemmer;
pub use vector::{cosine_similarity, vectorize, Vocabulary};
