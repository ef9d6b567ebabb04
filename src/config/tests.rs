use std::fs;

use serial_test::serial;
use tempfile::TempDir;

use super::{
    PartialBrokerSettings, PartialServerSettings, PartialSettings, Settings, load_config,
    load_config_from,
};

const ENV_KEYS: [&str; 5] = [
    "TOPICAST_SERVER__HOST",
    "TOPICAST_SERVER__PORT",
    "TOPICAST_BROKER__BUFFER_SIZE",
    "TOPICAST_BROKER__REPLY_TO_PING",
    "TOPICAST_LOGGING__LEVEL",
];

fn without_env<R, F: FnOnce() -> R>(f: F) -> R {
    temp_env::with_vars_unset(ENV_KEYS, f)
}

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 10001);
    assert_eq!(settings.broker.buffer_size, 32768);
    assert!(!settings.broker.reply_to_ping);
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn test_partial_merge_keeps_defaults_for_missing_fields() {
    let partial = PartialSettings {
        server: Some(PartialServerSettings {
            host: None,
            port: Some(7000),
        }),
        broker: Some(PartialBrokerSettings {
            buffer_size: None,
            reply_to_ping: Some(true),
        }),
        logging: None,
    };

    let settings = partial.merge(Settings::default());
    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 7000);
    assert_eq!(settings.broker.buffer_size, 32768);
    assert!(settings.broker.reply_to_ping);
    assert_eq!(settings.logging.level, "info");
}

#[test]
#[serial]
fn test_load_without_sources_yields_defaults() {
    let tmp = TempDir::new().expect("create tempdir");
    let stem = tmp.path().join("missing");

    without_env(|| {
        let cfg = load_config_from(stem.to_str().unwrap()).expect("load_config failed");
        assert_eq!(cfg, Settings::default());
    });
}

#[test]
#[serial]
fn test_load_from_file_overrides_defaults() {
    let tmp = TempDir::new().expect("create tempdir");
    let toml = r#"
        [server]
        host = "0.0.0.0"
        port = 9000

        [broker]
        buffer_size = 1024
    "#;
    fs::write(tmp.path().join("broker.toml"), toml).expect("write config file");
    let stem = tmp.path().join("broker");

    without_env(|| {
        let cfg = load_config_from(stem.to_str().unwrap()).expect("load_config failed");
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.broker.buffer_size, 1024);
        assert!(!cfg.broker.reply_to_ping);
    });
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let tmp = TempDir::new().expect("create tempdir");
    fs::write(
        tmp.path().join("broker.toml"),
        "[server]\nport = 9000\n[logging]\nlevel = \"warn\"\n",
    )
    .expect("write config file");
    let stem = tmp.path().join("broker");

    temp_env::with_vars(
        [
            ("TOPICAST_SERVER__HOST", None),
            ("TOPICAST_SERVER__PORT", Some("9100")),
            ("TOPICAST_BROKER__BUFFER_SIZE", None),
            ("TOPICAST_BROKER__REPLY_TO_PING", Some("true")),
            ("TOPICAST_LOGGING__LEVEL", None),
        ],
        || {
            let cfg = load_config_from(stem.to_str().unwrap()).expect("load_config failed");
            assert_eq!(cfg.server.port, 9100);
            assert!(cfg.broker.reply_to_ping);
            assert_eq!(cfg.logging.level, "warn");
        },
    );
}

#[test]
#[serial]
fn test_load_config_reads_working_directory() {
    let tmp = TempDir::new().expect("create tempdir");
    let orig = std::env::current_dir().expect("current_dir");
    fs::create_dir_all(tmp.path().join("config")).expect("create config dir");
    fs::write(
        tmp.path().join("config/default.toml"),
        "[server]\nhost = \"10.0.0.1\"\n",
    )
    .expect("write config file");

    std::env::set_current_dir(tmp.path()).expect("set current dir");
    let result = std::panic::catch_unwind(|| without_env(|| load_config().expect("load_config")));
    std::env::set_current_dir(orig).expect("restore cwd");

    let cfg = result.expect("load_config panicked");
    assert_eq!(cfg.server.host, "10.0.0.1");
    assert_eq!(cfg.server.port, 10001);
}
