use std::fs;
use std::path::PathBuf;

use merakictl_core::client::{API_BASE_URL_ENV, API_KEY_ENV, DEFAULT_BASE_URL};
use merakictl_core::config::{Config, ConfigError, Profile};
use tempfile::TempDir;

/// Returns true if running as root (euid == 0). Used to skip permission tests.
#[cfg(unix)]
fn is_root() -> bool {
    std::process::Command::new("id")
        .arg("-u")
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim() == "0")
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Missing and empty files
// ---------------------------------------------------------------------------

#[test]
fn load_from_nonexistent_path_returns_default_config() {
    let path = PathBuf::from("/tmp/merakictl-test-nonexistent/does/not/exist/config.toml");
    assert!(!path.exists());

    let config = Config::load_from_path(&path).expect("missing file should load as default");

    assert!(config.profiles.is_empty());
    assert!(config.default_profile.is_none());
}

#[test]
fn load_empty_config_file_returns_default_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "").unwrap();

    let config = Config::load_from_path(&config_path).expect("empty file should parse as default");

    assert_eq!(config, Config::default());
}

// ---------------------------------------------------------------------------
// Malformed content
// ---------------------------------------------------------------------------

#[test]
fn load_corrupt_toml_returns_parse_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[[[broken").unwrap();

    let err = Config::load_from_path(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)), "{err}");
}

#[test]
fn load_profile_without_api_key_returns_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
[profiles.broken]
organization_id = "549236"
"#,
    )
    .unwrap();

    assert!(Config::load_from_path(&config_path).is_err());
}

#[test]
fn load_config_with_unknown_fields_ignores_them() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
unknown_top_level_key = "hello"

[profiles.lab]
api_key = "abc"
totally_unknown_field = true
"#,
    )
    .unwrap();

    let config =
        Config::load_from_path(&config_path).expect("unknown fields should be silently ignored");

    let lab = config.profile("lab").unwrap();
    assert_eq!(lab.base_url, DEFAULT_BASE_URL);
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[test]
fn save_creates_parent_directories_and_round_trips() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("nested").join("merakictl").join("config.toml");

    let mut config = Config::default();
    let mut work = Profile::new("0123abcd");
    work.caller = Some("acme-noc".to_string());
    config.set_profile("work".to_string(), work);
    config.set_profile("lab".to_string(), Profile::new("keyring:lab"));
    config.default_profile = Some("work".to_string());

    config.save_to_path(&config_path).unwrap();
    let loaded = Config::load_from_path(&config_path).unwrap();

    assert_eq!(loaded, config);
    let names: Vec<_> = loaded.list_profiles().into_iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["lab", "work"]);
}

#[test]
#[serial_test::serial]
fn env_references_are_expanded_on_use() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
default_profile = "env"

[profiles.env]
api_key = "${MERAKICTL_EDGE_KEY}"
base_url = "${MERAKICTL_EDGE_URL:-https://api.meraki.in/api/v1}"
"#,
    )
    .unwrap();

    unsafe {
        std::env::set_var("MERAKICTL_EDGE_KEY", "from-environment");
        std::env::remove_var("MERAKICTL_EDGE_URL");
        std::env::remove_var(API_KEY_ENV);
        std::env::remove_var(API_BASE_URL_ENV);
    }

    let config = Config::load_from_path(&config_path).unwrap();
    let profile = config.profile("env").unwrap();
    assert_eq!(profile.api_key, "${MERAKICTL_EDGE_KEY}");
    assert_eq!(profile.resolve_api_key().unwrap(), "from-environment");
    assert_eq!(profile.resolve_base_url(), "https://api.meraki.in/api/v1");

    unsafe {
        std::env::remove_var("MERAKICTL_EDGE_KEY");
    }
}

#[test]
#[serial_test::serial]
fn saving_keeps_env_references_unexpanded() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
[profiles.work]
api_key = "${MERAKICTL_EDGE_SECRET}"
"#,
    )
    .unwrap();

    unsafe {
        std::env::set_var("MERAKICTL_EDGE_SECRET", "s3cr3t");
    }

    let mut config = Config::load_from_path(&config_path).unwrap();
    config.set_profile("lab".to_string(), Profile::new("lab-key"));
    config.save_to_path(&config_path).unwrap();

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("${MERAKICTL_EDGE_SECRET}"), "{saved}");
    assert!(!saved.contains("s3cr3t"), "{saved}");

    unsafe {
        std::env::remove_var("MERAKICTL_EDGE_SECRET");
    }
}

// ---------------------------------------------------------------------------
// Permission errors (unix only)
// ---------------------------------------------------------------------------

#[cfg(unix)]
#[test]
fn load_unreadable_file_returns_clear_error() {
    use std::os::unix::fs::PermissionsExt;

    if is_root() {
        eprintln!("skipping test: running as root");
        return;
    }

    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "# valid toml").unwrap();
    fs::set_permissions(&config_path, fs::Permissions::from_mode(0o000)).unwrap();

    let err = Config::load_from_path(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::LoadError { .. }), "{err}");

    fs::set_permissions(&config_path, fs::Permissions::from_mode(0o644)).unwrap();
}

#[cfg(unix)]
#[test]
fn save_to_readonly_directory_returns_clear_error() {
    use std::os::unix::fs::PermissionsExt;

    if is_root() {
        eprintln!("skipping test: running as root");
        return;
    }

    let dir = TempDir::new().unwrap();
    let readonly_dir = dir.path().join("readonly");
    fs::create_dir(&readonly_dir).unwrap();
    fs::set_permissions(&readonly_dir, fs::Permissions::from_mode(0o444)).unwrap();

    let err = Config::default()
        .save_to_path(&readonly_dir.join("config.toml"))
        .unwrap_err();
    assert!(err.to_string().contains("Failed to save config"), "{err}");

    fs::set_permissions(&readonly_dir, fs::Permissions::from_mode(0o755)).unwrap();
}
