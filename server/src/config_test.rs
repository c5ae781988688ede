use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn from_lookup_defaults() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.host.to_string(), DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.content_path, None);
    assert_eq!(cfg.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = config_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", " 8080 "),
        ("CONTENT_PATH", "content/home.yaml"),
        ("ASSETS_DIR", "/srv/assets"),
    ])
    .unwrap();
    assert_eq!(cfg.host.to_string(), "127.0.0.1");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.content_path, Some(PathBuf::from("content/home.yaml")));
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/assets"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = config_from(&[("CONTENT_PATH", "   "), ("PORT", "")]).unwrap();
    assert_eq!(cfg.content_path, None);
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn bad_port_errors() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT: 'eighty'");
}

#[test]
fn out_of_range_port_errors() {
    assert!(config_from(&[("PORT", "70000")]).is_err());
}

#[test]
fn bad_host_errors() {
    let err = config_from(&[("HOST", "not-an-ip")]).unwrap_err();
    assert!(err.to_string().contains("HOST"));
}
