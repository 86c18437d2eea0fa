
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::{debug, info};

use crate::config::OutputConfig;
use crate::{Result, SimError};

/// A persisted document vector paired with the name it belongs to.
///
/// The pairing happens at load time, so the positional contract between the
/// two files ("row i belongs to name i") cannot silently drift once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredEntry {
    pub name: String,
    pub vector: Vec<f32>,
}

/// Manifest sidecar: the ordered document-name list wrapped in an object.
///
/// `{"names": [...]}` is the canonical wire format; a bare list is rejected.
#[derive(Debug, Serialize, Deserialize)]
struct Manifest {
    names: Vec<String>,
}

/// Persist the embedding matrix and the name manifest, overwriting both files.
///
/// The matrix is written as a raw row-major little-endian f32 dump with no
/// header; its shape is only recoverable through the manifest.
#[inline]
pub fn save(names: &[String], embeddings: &[Vec<f32>], output: &OutputConfig) -> Result<()> {
    if names.len() != embeddings.len() {
        return Err(SimError::Store(format!(
            "refusing to save {} names against {} embedding rows",
            names.len(),
            embeddings.len()
        )));
    }

    let dimension = embeddings.first().map_or(0, Vec::len);
    let mut raw = Vec::with_capacity(embeddings.len() * dimension * size_of::<f32>());
    for row in embeddings {
        if row.len() != dimension {
            return Err(SimError::Store(format!(
                "ragged embedding matrix: found a row of width {} in a {}-wide matrix",
                row.len(),
                dimension
            )));
        }
        for value in row {
            raw.extend_from_slice(&value.to_le_bytes());
        }
    }
    fs::write(&output.embeddings_path, raw)?;

    let manifest = Manifest {
        names: names.to_vec(),
    };
    fs::write(
        &output.manifest_path,
        serde_json::to_string_pretty(&manifest)?,
    )?;

    info!(
        "Saved {} vectors ({} dimensions) to {} and manifest to {}",
        embeddings.len(),
        dimension,
        output.embeddings_path.display(),
        output.manifest_path.display()
    );
    Ok(())
}

/// Load the persisted matrix and manifest back as paired records.
///
/// The vector width is recovered from the float count and the manifest
/// length; any misalignment between the two files is an error.
#[inline]
pub fn load(output: &OutputConfig) -> Result<Vec<StoredEntry>> {
    let manifest_json = fs::read_to_string(&output.manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_json)?;
    if manifest.names.is_empty() {
        return Err(SimError::Store(format!(
            "manifest {} lists no documents",
            output.manifest_path.display()
        )));
    }

    let raw = fs::read(&output.embeddings_path)?;
    if raw.len() % size_of::<f32>() != 0 {
        return Err(SimError::Store(format!(
            "embeddings file {} is truncated ({} bytes is not a whole number of floats)",
            output.embeddings_path.display(),
            raw.len()
        )));
    }

    let floats: Vec<f32> = raw
        .chunks_exact(size_of::<f32>())
        .map(|bytes| f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
        .collect();

    if floats.is_empty() || floats.len() % manifest.names.len() != 0 {
        return Err(SimError::Store(format!(
            "{} floats in {} cannot be split evenly across the {} documents in {}; \
             the two files were not written together",
            floats.len(),
            output.embeddings_path.display(),
            manifest.names.len(),
            output.manifest_path.display()
        )));
    }

    let dimension = floats.len() / manifest.names.len();
    debug!(
        "Loaded {} vectors ({} dimensions) from {}",
        manifest.names.len(),
        dimension,
        output.embeddings_path.display()
    );

    Ok(manifest
        .names
        .into_iter()
        .zip(floats.chunks(dimension))
        .map(|(name, vector)| StoredEntry {
            name,
            vector: vector.to_vec(),
        })
        .collect())
}
