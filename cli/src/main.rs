use anyhow::{bail, Result};
use caridoc_core::{Dictionary, Normalizer, RankConfig, Ranker, Scorer, Stemmer};
use clap::{Parser, Subcommand, ValueEnum};
use regex::RegexBuilder;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "caridoc")]
#[command(about = "Rank Indonesian plain-text documents against a query", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank every .txt document under a dataset directory against a query
    Search {
        /// Root-word dictionary file (kamus), one word per line
        #[arg(long)]
        dictionary: PathBuf,
        /// Directory walked recursively for .txt documents
        #[arg(long)]
        dataset: PathBuf,
        /// Query text
        #[arg(long)]
        query: String,
        /// Similarity metric
        #[arg(long, value_enum, default_value_t = ScorerArg::CosineTfidf)]
        scorer: ScorerArg,
        /// Keep only the best K results
        #[arg(long)]
        top_k: Option<usize>,
        /// Drop results scoring below this threshold
        #[arg(long)]
        min_score: Option<f64>,
        /// Count the query's own tokens toward document frequency
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        idf_includes_query: bool,
        /// Emit the full report as JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the token -> stem mapping for a piece of text
    Analyze {
        /// Root-word dictionary file (kamus), one word per line
        #[arg(long)]
        dictionary: PathBuf,
        /// Text to normalize and stem
        #[arg(long)]
        text: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ScorerArg {
    CosineTfidf,
    PearsonTf,
}

impl From<ScorerArg> for Scorer {
    fn from(arg: ScorerArg) -> Self {
        match arg {
            ScorerArg::CosineTfidf => Scorer::CosineTfIdf,
            ScorerArg::PearsonTf => Scorer::PearsonTf,
        }
    }
}

#[derive(Serialize)]
struct SearchReport<'a> {
    query: &'a str,
    config: &'a RankConfig,
    total_docs: usize,
    skipped_docs: usize,
    results: Vec<ReportHit>,
}

#[derive(Serialize)]
struct ReportHit {
    doc_id: String,
    score: f64,
    excerpt: Option<String>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            dictionary,
            dataset,
            query,
            scorer,
            top_k,
            min_score,
            idf_includes_query,
            json,
        } => {
            let config = RankConfig {
                scorer: scorer.into(),
                idf_includes_query,
                top_k,
                min_score,
            };
            run_search(&dictionary, &dataset, &query, config, json)
        }
        Commands::Analyze { dictionary, text } => run_analyze(&dictionary, &text),
    }
}

fn run_search(
    dictionary: &Path,
    dataset: &Path,
    query: &str,
    config: RankConfig,
    json: bool,
) -> Result<()> {
    if query.trim().is_empty() {
        bail!("query must not be blank");
    }
    let dict = Dictionary::load(dictionary)?;
    let corpus = load_dataset(dataset)?;
    tracing::info!(docs = corpus.len(), "dataset loaded");

    let ranker = Ranker::new(&dict, config);
    let outcome = ranker.rank(query, &corpus);

    let raw_terms: Vec<String> = query.split_whitespace().map(str::to_string).collect();
    let texts: HashMap<&str, &str> = corpus
        .iter()
        .map(|(id, text)| (id.as_str(), text.as_str()))
        .collect();
    let hits: Vec<ReportHit> = outcome
        .results
        .iter()
        .map(|r| ReportHit {
            doc_id: r.doc_id.clone(),
            score: r.score,
            excerpt: texts
                .get(r.doc_id.as_str())
                .and_then(|text| excerpt(text, &raw_terms)),
        })
        .collect();

    if json {
        let report = SearchReport {
            query,
            config: ranker.config(),
            total_docs: corpus.len(),
            skipped_docs: outcome.skipped_docs,
            results: hits,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Query: {query}");
    if outcome.skipped_docs > 0 {
        println!("Skipped {} blank document(s)", outcome.skipped_docs);
    }
    if hits.is_empty() {
        println!("No results.");
        return Ok(());
    }
    for (i, hit) in hits.iter().enumerate() {
        println!("{:>3}. {:<40} {:.4}", i + 1, hit.doc_id, hit.score);
        if let Some(excerpt) = &hit.excerpt {
            println!("     {excerpt}");
        }
    }
    Ok(())
}

fn run_analyze(dictionary: &Path, text: &str) -> Result<()> {
    let dict = Dictionary::load(dictionary)?;
    let normalizer = Normalizer::default();
    let stemmer = Stemmer::new(&dict);
    for token in normalizer.normalize(text) {
        let stem = stemmer.stem(&token);
        println!("{token} -> {stem}");
    }
    Ok(())
}

/// Collect `(doc_id, raw_text)` pairs from every .txt file under
/// `root`, in path order. Other extensions are skipped; unreadable
/// files are logged and skipped rather than aborting the search.
fn load_dataset(root: &Path) -> Result<Vec<(String, String)>> {
    if !root.is_dir() {
        bail!("dataset path {} is not a directory", root.display());
    }
    let mut corpus = Vec::new();
    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("txt") {
            tracing::debug!(path = %path.display(), "skipping non-txt file");
            continue;
        }
        let doc_id = path
            .strip_prefix(root)
            .unwrap_or(path)
            .display()
            .to_string();
        match fs::read(path) {
            Ok(bytes) => corpus.push((doc_id, String::from_utf8_lossy(&bytes).into_owned())),
            Err(err) => tracing::warn!(path = %path.display(), %err, "skipping unreadable file"),
        }
    }
    Ok(corpus)
}

/// Short window of text around the first case-insensitive occurrence
/// of any raw query term, whitespace collapsed for display.
fn excerpt(text: &str, raw_terms: &[String]) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    let mut first_idx = None;
    for term in raw_terms {
        if term.trim().is_empty() {
            continue;
        }
        let pattern = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
            .ok()?;
        if let Some(m) = pattern.find(text) {
            first_idx = Some(m.start());
            break;
        }
    }
    let (mut start, mut end) = match first_idx {
        Some(idx) => (idx.saturating_sub(40), (idx + 120).min(text.len())),
        None => (0, text.len().min(120)),
    };
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    while !text.is_char_boundary(end) {
        end += 1;
    }
    let window = text[start..end]
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    Some(window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_dataset_keeps_only_txt_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "kucing makan").unwrap();
        fs::write(dir.path().join("b.pdf"), "binary junk").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/c.txt"), "anjing minum").unwrap();

        let corpus = load_dataset(dir.path()).unwrap();
        let ids: Vec<&str> = corpus.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["a.txt", "nested/c.txt"]);
        assert_eq!(corpus[0].1, "kucing makan");
    }

    #[test]
    fn load_dataset_rejects_non_directory() {
        assert!(load_dataset(Path::new("/no/such/dataset")).is_err());
    }

    #[test]
    fn excerpt_centers_on_first_case_insensitive_hit() {
        let text = "x ".repeat(50) + "Kucing makan ikan segar di pasar";
        let terms = vec!["KUCING".to_string()];
        let snippet = excerpt(&text, &terms).unwrap();
        assert!(snippet.contains("Kucing makan"));
    }

    #[test]
    fn excerpt_falls_back_to_document_head() {
        let terms = vec!["zzz".to_string()];
        let snippet = excerpt("burung   tidur\ndi rumah", &terms).unwrap();
        assert_eq!(snippet, "burung tidur di rumah");
    }

    #[test]
    fn excerpt_of_blank_text_is_none() {
        assert_eq!(excerpt("   ", &["kucing".to_string()]), None);
    }
}
