use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.timeouts, Timeouts::default());
    assert_eq!(cfg.timeouts.request(), Duration::from_secs(30));
    assert_eq!(cfg.timeouts.connect(), Duration::from_secs(10));
}

#[test]
fn from_lookup_reads_all_values() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("YOGA_API_BASE_URL", "https://yoga.example.com/"),
        ("YOGA_REQUEST_TIMEOUT_SECS", "5"),
        ("YOGA_CONNECT_TIMEOUT_SECS", " 2 "),
    ]))
    .unwrap();
    assert_eq!(cfg.base_url, "https://yoga.example.com");
    assert_eq!(cfg.timeouts, Timeouts { request_secs: 5, connect_secs: 2 });
}

#[test]
fn from_lookup_empty_timeout_falls_back_to_default() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[("YOGA_REQUEST_TIMEOUT_SECS", "")])).unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
}

#[test]
fn from_lookup_rejects_non_numeric_timeout() {
    let err = ClientConfig::from_lookup(lookup_from(&[("YOGA_CONNECT_TIMEOUT_SECS", "soon")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { var: "YOGA_CONNECT_TIMEOUT_SECS", value: "soon".to_owned() });
}

#[test]
fn from_lookup_rejects_url_without_scheme() {
    let err = ClientConfig::from_lookup(lookup_from(&[("YOGA_API_BASE_URL", "localhost:8080")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
}

#[test]
fn new_trims_trailing_slashes() {
    let cfg = ClientConfig::new("http://127.0.0.1:9000//").unwrap();
    assert_eq!(cfg.base_url, "http://127.0.0.1:9000");
}

#[test]
fn new_rejects_bare_scheme() {
    assert!(ClientConfig::new("http://").is_err());
}
