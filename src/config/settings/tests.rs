use super::*;

#[test]
fn default_config_is_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
}

#[test]
fn default_values() {
    let config = Config::default();

    assert_eq!(config.corpus.dir, PathBuf::from("corpus"));
    assert_eq!(config.corpus.file_prefix, "speech");
    assert_eq!(config.corpus.file_extension, "txt");
    assert_eq!(config.ollama.host, "localhost");
    assert_eq!(config.ollama.port, 11434);
    assert_eq!(config.ollama.model, "all-minilm:latest");
    assert_eq!(config.ollama.batch_size, 32);
    assert_eq!(config.ollama.embedding_dimension, 384);
    assert_eq!(config.report.top_k, 3);
    assert_eq!(config.output.embeddings_path, PathBuf::from("embeddings.bin"));
    assert_eq!(config.output.manifest_path, PathBuf::from("manifest.json"));
}

#[test]
fn rejects_zero_port() {
    let config = Config {
        ollama: OllamaConfig {
            port: 0,
            ..OllamaConfig::default()
        },
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidPort(0))
    ));
}

#[test]
fn rejects_empty_model() {
    let config = Config {
        ollama: OllamaConfig {
            model: "  ".to_string(),
            ..OllamaConfig::default()
        },
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidModel(_))
    ));
}

#[test]
fn rejects_batch_size_out_of_bounds() {
    for batch_size in [0, 1001] {
        let config = Config {
            ollama: OllamaConfig {
                batch_size,
                ..OllamaConfig::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBatchSize(_))
        ));
    }
}

#[test]
fn rejects_embedding_dimension_out_of_bounds() {
    for embedding_dimension in [0, 63, 4097] {
        let config = Config {
            ollama: OllamaConfig {
                embedding_dimension,
                ..OllamaConfig::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEmbeddingDimension(_))
        ));
    }
}

#[test]
fn rejects_zero_top_k() {
    let config = Config {
        report: ReportConfig { top_k: 0 },
        ..Config::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidTopK(0))));
}

#[test]
fn rejects_empty_file_prefix() {
    let config = Config {
        corpus: CorpusConfig {
            file_prefix: String::new(),
            ..CorpusConfig::default()
        },
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidFilePrefix)
    ));
}

#[test]
fn toml_round_trip() {
    let config = Config::default();
    let serialized = toml::to_string_pretty(&config).expect("can serialize config");
    let deserialized: Config = toml::from_str(&serialized).expect("can parse config");
    assert_eq!(config, deserialized);
}

#[test]
fn partial_toml_uses_defaults() {
    let config: Config = toml::from_str("[report]\ntop_k = 5\n").expect("can parse config");

    assert_eq!(config.report.top_k, 5);
    assert_eq!(config.ollama, OllamaConfig::default());
    assert_eq!(config.corpus, CorpusConfig::default());
    assert_eq!(config.output, OutputConfig::default());
}

#[test]
fn ollama_url_from_defaults() {
    let config = Config::default();
    let url = config.ollama_url().expect("can build url");
    assert_eq!(url.as_str(), "http://localhost:11434/");
}
