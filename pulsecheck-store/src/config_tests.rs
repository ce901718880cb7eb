//! Configuration loading tests.
//!
//! Covers the accepted file shape and every fatal startup failure.

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::config::MonitorConfig;
use crate::error::StoreError;
use pulsecheck_core::Endpoint;

const SAMPLE: &str = r#"
- headers:
    user-agent: fetch-synthetic-monitor
  method: GET
  name: fetch index page
  url: https://fetch.com/
- headers:
    user-agent: fetch-synthetic-monitor
  method: GET
  name: fetch careers page
  url: https://fetch.com/careers
- body: '{"foo":"bar"}'
  headers:
    content-type: application/json
    user-agent: fetch-synthetic-monitor
  method: POST
  name: fetch some fake post endpoint
  url: https://fetch.com/some/post/endpoint
- name: fetch rewards index page
  url: https://www.fetchrewards.com/
"#;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// ============================================================================
// Valid Files
// ============================================================================

#[test]
fn test_load_sample_config() {
    let file = write_config(SAMPLE);
    let config = MonitorConfig::load_from(file.path()).unwrap();

    assert_eq!(config.len(), 4);
    assert_eq!(config.endpoints[0].name, "fetch index page");
    assert_eq!(config.endpoints[2].method, "POST");
    assert_eq!(config.endpoints[2].body.as_deref(), Some(r#"{"foo":"bar"}"#));
    assert_eq!(
        config.endpoints[3],
        Endpoint::new("https://www.fetchrewards.com/").with_name("fetch rewards index page")
    );
}

#[test]
fn test_loading_twice_is_identical() {
    let file = write_config(SAMPLE);
    let first = MonitorConfig::load_from(file.path()).unwrap();
    let second = MonitorConfig::load_from(file.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_list_is_accepted() {
    let config = MonitorConfig::from_yaml_str("[]").unwrap();
    assert!(config.is_empty());
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = MonitorConfig::from_yaml_str("- url: http://x/\n  owner: team-a\n").unwrap();
    assert_eq!(config.endpoints, vec![Endpoint::new("http://x/")]);
}

#[test]
fn test_numeric_scalars_read_as_strings() {
    let yaml = "- name: 123\n  url: http://x/\n  body: 42\n  headers:\n    x-api-version: 2\n";
    let config = MonitorConfig::from_yaml_str(yaml).unwrap();

    assert_eq!(
        config.endpoints,
        vec![
            Endpoint::new("http://x/")
                .with_name("123")
                .with_header("x-api-version", "2")
                .with_body("42")
        ]
    );
}

#[test]
fn test_numeric_header_loads_from_file() {
    let file = write_config("- url: http://x/\n  headers:\n    x-api-version: 2\n");
    let config = MonitorConfig::load_from(file.path()).unwrap();
    assert_eq!(config.endpoints[0].headers["x-api-version"], "2");
}

// ============================================================================
// Fatal Startup Errors
// ============================================================================

#[test]
fn test_mapping_at_top_level_is_rejected() {
    let err = MonitorConfig::from_yaml_str("name: A\nurl: http://x/\n").unwrap_err();
    assert!(matches!(err, StoreError::NotAList("a mapping")));
    assert!(err.to_string().contains("must be a list"));
}

#[test]
fn test_empty_document_is_rejected() {
    let err = MonitorConfig::from_yaml_str("").unwrap_err();
    assert!(matches!(err, StoreError::NotAList(_) | StoreError::Yaml(_)));
}

#[test]
fn test_scalar_at_top_level_is_rejected() {
    assert!(matches!(
        MonitorConfig::from_yaml_str("42").unwrap_err(),
        StoreError::NotAList("a number")
    ));
}

#[test]
fn test_malformed_yaml_is_rejected() {
    let err = MonitorConfig::from_yaml_str("- url: [unterminated\n").unwrap_err();
    assert!(matches!(err, StoreError::Yaml(_)));
}

#[test]
fn test_record_without_url_is_rejected() {
    let err = MonitorConfig::from_yaml_str("- name: no url\n").unwrap_err();
    assert!(matches!(err, StoreError::Yaml(_)));
}

#[test]
fn test_blank_url_reports_index() {
    let err = MonitorConfig::from_yaml_str("- url: http://x/\n- url: ''\n").unwrap_err();
    assert!(matches!(err, StoreError::InvalidEndpoint { index: 1, .. }));
}

#[test]
fn test_missing_file_is_rejected() {
    let path = Path::new("/nonexistent/path/endpoints.yaml");
    let err = MonitorConfig::load_from(path).unwrap_err();
    assert!(matches!(err, StoreError::Read { .. }));
    assert!(err.to_string().contains("/nonexistent/path/endpoints.yaml"));
}
