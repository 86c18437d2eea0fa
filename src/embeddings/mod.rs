// Embeddings module
// Maps batches of text to fixed-width vectors through a local Ollama server

pub mod ollama;

pub use ollama::{DEFAULT_EMBEDDING_DIMENSION, OllamaClient};
