use std::{env, fs};

use museum_server::StorageBackend;
use museum_server::config::loader::load_config;

#[test]
fn config_parsing_and_env_overrides_and_validation() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("museum.toml");

    let toml_content = r#"
[server]
host = "127.0.0.1"
port = 8081
body_limit_bytes = 4096
cors_origin = "https://museums.example.org"

[storage]
backend = "postgres"

[storage.postgres]
host = "db"
port = 5433
database = "art"
user = "curator"
password = "secret"
pool_size = 4

[pagination]
max_limit = 50

[logging]
level = "debug"
"#;
    fs::write(&path, toml_content).expect("write toml");

    // 1) Valid config parses
    let cfg = load_config(path.to_str()).expect("should parse config");
    assert_eq!(cfg.server.port, 8081);
    assert_eq!(cfg.server.cors_origin, "https://museums.example.org");
    assert_eq!(cfg.storage.backend, StorageBackend::Postgres);
    let pg = cfg.storage.postgres.as_ref().expect("postgres section");
    assert_eq!(pg.connection_url(), "postgres://curator:secret@db:5433/art");
    assert_eq!(pg.pool_size, 4);
    assert_eq!(cfg.pagination.max_limit, 50);
    assert_eq!(cfg.logging.level, "debug");

    // 2) Env override should win over file
    unsafe {
        env::set_var("MUSEUM__PAGINATION__MAX_LIMIT", "25");
    }
    let cfg_env = load_config(path.to_str()).expect("should parse config with env overrides");
    assert_eq!(cfg_env.pagination.max_limit, 25);
    unsafe {
        env::remove_var("MUSEUM__PAGINATION__MAX_LIMIT");
    }

    // 3) Invalid config should error
    let invalid_path = dir.path().join("invalid.toml");
    let invalid_toml = r#"
[storage]
backend = "memory"

[pagination]
max_limit = 0
"#;
    fs::write(&invalid_path, invalid_toml).expect("write invalid toml");
    let err = load_config(invalid_path.to_str()).expect_err("expected validation error");
    assert!(err.contains("max_limit must be > 0"));

    // 4) A missing file falls back to defaults
    let missing = dir.path().join("absent.toml");
    let cfg = load_config(missing.to_str()).expect("defaults");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.server.cors_origin, "http://localhost:3000");
}
