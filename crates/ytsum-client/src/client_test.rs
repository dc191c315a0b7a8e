use super::*;

fn test_client(base_url: &str) -> SummarizerClient {
    SummarizerClient::with_base_url(base_url, "ytsum-test/0.1")
        .expect("client construction should not fail")
}

#[test]
fn endpoint_appends_segments_to_root() {
    let client = test_client("http://localhost:8000");
    let url = client.endpoint(&["api", "summarize"]);
    assert_eq!(url.as_str(), "http://localhost:8000/api/summarize");
}

#[test]
fn endpoint_strips_trailing_slash() {
    let client = test_client("http://localhost:8000///");
    let url = client.endpoint(&["api", "history"]);
    assert_eq!(url.as_str(), "http://localhost:8000/api/history");
}

#[test]
fn endpoint_keeps_path_prefix() {
    let client = test_client("https://tools.example.com/summarizer/");
    let url = client.endpoint(&["api", "history", "abc123def45", "restore"]);
    assert_eq!(
        url.as_str(),
        "https://tools.example.com/summarizer/api/history/abc123def45/restore"
    );
}

#[test]
fn endpoint_encodes_video_id_as_one_segment() {
    let client = test_client("http://localhost:8000");
    let url = client.endpoint(&["api", "history", "a/b c"]);
    assert_eq!(url.as_str(), "http://localhost:8000/api/history/a%2Fb%20c");
}

#[test]
fn base_url_is_fixed_at_construction() {
    let client = test_client("http://127.0.0.1:9000");
    assert_eq!(client.base_url().as_str(), "http://127.0.0.1:9000/");
}

#[test]
fn new_uses_config_base_url() {
    let config = ClientConfig {
        api_base_url: "http://summarizer.internal:8080".to_string(),
        ..ClientConfig::default()
    };
    let client = SummarizerClient::new(&config).expect("valid config");
    assert_eq!(client.base_url().as_str(), "http://summarizer.internal:8080/");
}

#[test]
fn rejects_non_http_base_url() {
    let result = SummarizerClient::with_base_url("ftp://example.com", "ytsum-test/0.1");
    assert!(matches!(result, Err(ClientBuildError::InvalidBaseUrl { .. })));
}

#[test]
fn rejects_unparseable_base_url() {
    let result = SummarizerClient::with_base_url("not a url", "ytsum-test/0.1");
    assert!(matches!(result, Err(ClientBuildError::InvalidBaseUrl { .. })));
}
