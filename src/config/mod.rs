// Configuration management module
// Lifts the pipeline's tunable constants into a validated, TOML-backed structure

pub mod settings;

pub use settings::{Config, ConfigError, CorpusConfig, OllamaConfig, OutputConfig, ReportConfig};

use console::style;

/// Print the active configuration values
#[inline]
pub fn show_config(config: &Config) {
    println!("{}", style("Current Configuration").bold().cyan());
    println!();

    println!("{}", style("Corpus Settings:").bold().yellow());
    println!("  Directory: {}", style(config.corpus.dir.display()).cyan());
    println!(
        "  File Pattern: {}*.{}",
        style(&config.corpus.file_prefix).cyan(),
        style(&config.corpus.file_extension).cyan()
    );

    println!();
    println!("{}", style("Ollama Settings:").bold().yellow());
    println!("  Host: {}", style(&config.ollama.host).cyan());
    println!("  Port: {}", style(config.ollama.port).cyan());
    println!("  Model: {}", style(&config.ollama.model).cyan());
    println!("  Batch Size: {}", style(config.ollama.batch_size).cyan());
    println!(
        "  Embedding Dimension: {}",
        style(config.ollama.embedding_dimension).cyan()
    );

    println!();
    println!("{}", style("Report Settings:").bold().yellow());
    println!("  Top K Neighbors: {}", style(config.report.top_k).cyan());

    println!();
    println!("{}", style("Output Files:").bold().yellow());
    println!(
        "  Embeddings: {}",
        style(config.output.embeddings_path.display()).cyan()
    );
    println!(
        "  Manifest: {}",
        style(config.output.manifest_path.display()).cyan()
    );

    if let Ok(config_path) = Config::config_file_path() {
        println!();
        println!("Config file: {}", style(config_path.display()).dim());
    }
}
