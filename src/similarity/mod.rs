
use tracing::debug;

/// Norm at which a row is considered zero and clamped before dividing.
///
/// A zero-length vector has no direction; clamping keeps the normalization
/// finite instead of producing NaN rows. Only exact zeros are clamped.
pub const ZERO_NORM_EPSILON: f32 = 1e-9;

/// A ranked neighbor of a document: its row index and cosine score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub score: f32,
}

/// L2-normalize every row, clamping zero norms to [`ZERO_NORM_EPSILON`]
#[inline]
pub fn l2_normalize_rows(rows: &[Vec<f32>]) -> Vec<Vec<f32>> {
    rows.iter()
        .map(|row| {
            let norm = clamped_norm(row);
            row.iter().map(|x| x / norm).collect()
        })
        .collect()
}

/// Full pairwise cosine-similarity matrix.
///
/// Rows are L2-normalized first, so cosine similarity reduces to the dot
/// product and the matrix is the normalized matrix times its own transpose.
#[inline]
pub fn similarity_matrix(rows: &[Vec<f32>]) -> Vec<Vec<f32>> {
    let normalized = l2_normalize_rows(rows);
    debug!("Computing {0}x{0} similarity matrix", normalized.len());
    normalized
        .iter()
        .map(|a| normalized.iter().map(|b| dot(a, b)).collect())
        .collect()
}

/// Rank, for each row of a similarity matrix, the other rows by descending score.
///
/// Row i never appears among its own neighbors, regardless of score. Each list
/// holds at most `top_k` entries; fewer when the matrix has fewer other rows.
/// Order among exact ties is unspecified.
#[inline]
pub fn rank_neighbors(similarities: &[Vec<f32>], top_k: usize) -> Vec<Vec<Neighbor>> {
    similarities
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut ranked: Vec<Neighbor> = row
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(j, &score)| Neighbor { index: j, score })
                .collect();
            ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
            ranked.truncate(top_k);
            ranked
        })
        .collect()
}

/// Per-pair cosine similarity: dot product over the product of clamped norms.
///
/// Used by the query path, which scores one vector against stored rows
/// individually instead of normalizing a whole matrix.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    dot(a, b) / (clamped_norm(a) * clamped_norm(b))
}

fn clamped_norm(v: &[f32]) -> f32 {
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm == 0.0 { ZERO_NORM_EPSILON } else { norm }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
