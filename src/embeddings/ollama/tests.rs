use super::*;
use crate::config::OllamaConfig;

#[test]
fn client_configuration() {
    let config = OllamaConfig {
        host: "test-host".to_string(),
        port: 1234,
        model: "test-model".to_string(),
        batch_size: 128,
        embedding_dimension: 512,
    };
    let client = OllamaClient::new(&config).expect("can create client");

    assert_eq!(client.model, "test-model");
    assert_eq!(client.batch_size, 128);
    assert_eq!(client.dimension, 512);
    assert_eq!(client.base_url.host_str(), Some("test-host"));
    assert_eq!(client.base_url.port(), Some(1234));
}

#[test]
fn embed_request_wire_format() {
    let request = EmbedRequest {
        model: "all-minilm:latest".to_string(),
        inputs: vec!["one".to_string(), "two".to_string()],
    };

    let value = serde_json::to_value(&request).expect("can serialize request");
    assert_eq!(value["model"], "all-minilm:latest");
    assert_eq!(value["input"][0], "one");
    assert_eq!(value["input"][1], "two");
}

#[test]
fn embed_response_parsing() {
    let body = r#"{"model":"all-minilm:latest","embeddings":[[0.1,0.2],[0.3,0.4]]}"#;
    let response: EmbedResponse = serde_json::from_str(body).expect("can parse response");

    assert_eq!(response.embeddings.len(), 2);
    assert_eq!(response.embeddings[0], vec![0.1, 0.2]);
}

#[test]
fn endpoint_joins_paths() {
    let client = OllamaClient::new(&OllamaConfig::default()).expect("can create client");

    let url = client.endpoint("/api/embed").expect("can build url");
    assert_eq!(url.as_str(), "http://localhost:11434/api/embed");
}

#[test]
fn default_dimension_matches_default_model() {
    assert_eq!(DEFAULT_EMBEDDING_DIMENSION, 384);
}
