#[cfg(test)]
mod tests;

use console::style;

use crate::corpus::Document;
use crate::similarity::Neighbor;

/// Number of characters of document text shown per report entry.
pub const SNIPPET_CHARS: usize = 200;

/// First [`SNIPPET_CHARS`] characters of a text, newlines flattened to spaces
#[inline]
pub fn snippet(text: &str) -> String {
    text.chars()
        .take(SNIPPET_CHARS)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

/// Print the per-document neighbor report
#[inline]
pub fn print_neighbor_report(
    documents: &[Document],
    neighbors: &[Vec<Neighbor>],
    dimension: usize,
) {
    println!("Embeddings shape: ({}, {})", documents.len(), dimension);
    println!();

    for (document, ranked) in documents.iter().zip(neighbors) {
        println!("=== Query: {} ===", style(&document.name).bold());
        for (rank, neighbor) in ranked.iter().enumerate() {
            let other = &documents[neighbor.index];
            println!(
                "  Rank {}: {}  (score={:.4})",
                rank + 1,
                other.name,
                neighbor.score
            );
            println!("    Snippet: {}", snippet(&other.text));
        }
        println!();
    }
}

/// Print every stored document ranked against the query, best match first
#[inline]
pub fn print_search_results(results: &[(f32, String)]) {
    for (score, name) in results {
        println!("{:.4}  {}", score, name);
    }
}
