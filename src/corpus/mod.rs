
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::config::CorpusConfig;
use crate::{Result, SimError};

/// A corpus document, identified by its source filename.
///
/// Order is significant: the loader's output order fixes the row order of the
/// embedding matrix for the rest of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub name: String,
    pub text: String,
}

/// Load all matching documents from the corpus directory, sorted by filename.
///
/// A filename matches when it starts with the configured prefix
/// (case-insensitive) and carries the configured extension. Text content is
/// trimmed of surrounding whitespace on load.
#[inline]
pub fn load_corpus(config: &CorpusConfig) -> Result<Vec<Document>> {
    let dir = config.dir.as_path();
    if !dir.is_dir() {
        return Err(SimError::MissingDirectory(dir.to_path_buf()));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            debug!("Skipping non-UTF-8 filename in {}", dir.display());
            continue;
        };
        if matches_pattern(&name, &config.file_prefix, &config.file_extension) {
            names.push(name);
        }
    }

    if names.is_empty() {
        return Err(SimError::EmptyCorpus(dir.to_path_buf()));
    }

    names.sort();

    let mut documents = Vec::with_capacity(names.len());
    for name in names {
        let text = fs::read_to_string(dir.join(&name))?;
        documents.push(Document {
            name,
            text: text.trim().to_string(),
        });
    }

    info!(
        "Loaded {} documents from {}",
        documents.len(),
        dir.display()
    );
    Ok(documents)
}

fn matches_pattern(name: &str, prefix: &str, extension: &str) -> bool {
    name.to_lowercase().starts_with(&prefix.to_lowercase())
        && Path::new(name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
