use tracing::info;

use crate::config::Config;
use crate::corpus::load_corpus;
use crate::embeddings::OllamaClient;
use crate::report::{print_neighbor_report, print_search_results};
use crate::similarity::{cosine_similarity, rank_neighbors, similarity_matrix};
use crate::store;
use crate::{Result, SimError};

/// Sentences embedded by the `check` command.
const CHECK_SENTENCES: [&str; 3] = [
    "Hello world",
    "This is a test sentence for embeddings.",
    "How similar is this to hello world?",
];

/// Build the similarity report for the corpus and persist its artifacts
#[inline]
pub fn run_report(config: &Config) -> Result<()> {
    let documents = load_corpus(&config.corpus)?;

    let client = OllamaClient::new(&config.ollama)?;
    client.health_check()?;

    let texts: Vec<String> = documents.iter().map(|d| d.text.clone()).collect();
    let embeddings = client.embed_batch(&texts)?;
    let dimension = embeddings.first().map_or(0, Vec::len);

    let similarities = similarity_matrix(&embeddings);
    let neighbors = rank_neighbors(&similarities, config.report.top_k);

    print_neighbor_report(&documents, &neighbors, dimension);

    let names: Vec<String> = documents.into_iter().map(|d| d.name).collect();
    store::save(&names, &embeddings, &config.output)?;

    println!(
        "Saved embeddings -> {}",
        config.output.embeddings_path.display()
    );
    println!(
        "Saved manifest -> {}",
        config.output.manifest_path.display()
    );

    Ok(())
}

/// Rank every stored document against an ad-hoc query string.
///
/// Uses the same embedder configuration that built the store; model identity
/// is not verified, only the vector width.
#[inline]
pub fn run_search(config: &Config, query: &str) -> Result<()> {
    let entries = store::load(&config.output)?;

    let client = OllamaClient::new(&config.ollama)?;
    client.health_check()?;

    let query_vector = client.embed_one(query)?;
    let stored_width = entries.first().map_or(0, |e| e.vector.len());
    if query_vector.len() != stored_width {
        return Err(SimError::Embedding(format!(
            "query embedding is {}-dimensional but the store holds {}-dimensional vectors; \
             rebuild the store with `corpus-sim report` using the current model",
            query_vector.len(),
            stored_width
        )));
    }

    info!("Scoring query against {} stored documents", entries.len());

    let mut results: Vec<(f32, String)> = entries
        .into_iter()
        .map(|entry| {
            (
                cosine_similarity(&query_vector, &entry.vector),
                entry.name,
            )
        })
        .collect();
    results.sort_by(|a, b| b.0.total_cmp(&a.0));

    print_search_results(&results);

    Ok(())
}

/// Smoke-test the embedder wiring with a few built-in sentences
#[inline]
pub fn run_check(config: &Config) -> Result<()> {
    let client = OllamaClient::new(&config.ollama)?;
    client.health_check()?;

    let texts: Vec<String> = CHECK_SENTENCES.iter().map(|s| (*s).to_string()).collect();
    let embeddings = client.embed_batch(&texts)?;
    let dimension = embeddings.first().map_or(0, Vec::len);

    println!("Embeddings shape: ({}, {})", embeddings.len(), dimension);
    if let Some(first) = embeddings.first() {
        let head: Vec<f32> = first.iter().copied().take(10).collect();
        println!("First embedding (first 10 values): {:?}", head);
    }

    Ok(())
}
