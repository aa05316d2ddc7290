#[path = "common/mod.rs"]
mod common;

use common::MarqueeTest;
use std::fs;

// ============================================================================
// Config command tests
// ============================================================================

#[test]
fn test_config_show_defaults() {
    let marquee = MarqueeTest::new();

    let output = marquee.run_success(&["config", "show"]);
    assert!(output.contains("Configuration"));
    assert!(output.contains("server_url"));
    assert!(output.contains("http://localhost:4000"));
    assert!(output.contains("request_timeout"));
    assert!(output.contains("debounce_ms"));
}

#[test]
fn test_config_show_json() {
    let marquee = MarqueeTest::new();

    let output = marquee.run_success(&["config", "show", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(parsed["server_url"], "http://localhost:4000");
    assert_eq!(parsed["request_timeout"], 10);
    assert_eq!(parsed["debounce_ms"], 300);
}

#[test]
fn test_config_set_server_url() {
    let marquee = MarqueeTest::new();

    marquee.run_success(&["config", "set", "server_url", "http://example.com:9000"]);
    let output = marquee.run_success(&["config", "get", "server_url"]);
    assert_eq!(output.trim(), "http://example.com:9000");
}

#[test]
fn test_config_set_rejects_malformed_url() {
    let marquee = MarqueeTest::new();

    let stderr = marquee.run_failure(&["config", "set", "server_url", "not a url"]);
    assert!(stderr.contains("invalid server_url"));
}

#[test]
fn test_config_set_debounce_ms() {
    let marquee = MarqueeTest::new();

    marquee.run_success(&["config", "set", "debounce_ms", "150"]);
    let output = marquee.run_success(&["config", "get", "debounce_ms"]);
    assert_eq!(output.trim(), "150");
}

#[test]
fn test_config_set_rejects_non_numeric_timeout() {
    let marquee = MarqueeTest::new();

    let stderr = marquee.run_failure(&["config", "set", "request_timeout", "soon"]);
    assert!(stderr.contains("must be a number"));
}

#[test]
fn test_config_set_unknown_key() {
    let marquee = MarqueeTest::new();

    let stderr = marquee.run_failure(&["config", "set", "colour_scheme", "dark"]);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_config_get_unknown_key() {
    let marquee = MarqueeTest::new();

    let stderr = marquee.run_failure(&["config", "get", "colour_scheme"]);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_config_file_created() {
    let marquee = MarqueeTest::new();

    marquee.run_success(&["config", "set", "debounce_ms", "200"]);

    let config_path = marquee.config_path();
    assert!(config_path.exists(), "Config file should be created");

    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("debounce_ms"));
    assert!(content.contains("200"));
}

#[test]
fn test_config_path_points_at_temp_dir() {
    let marquee = MarqueeTest::new();

    let output = marquee.run_success(&["config", "path"]);
    assert!(output.trim().ends_with("config.yaml"));
    assert!(output.contains(marquee.temp_dir.path().to_str().unwrap()));
}

#[test]
fn test_config_get_json() {
    let marquee = MarqueeTest::new();

    marquee.run_success(&["config", "set", "request_timeout", "25"]);
    let output = marquee.run_success(&["config", "get", "request_timeout", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(parsed["key"], "request_timeout");
    assert_eq!(parsed["value"], "25");
}
