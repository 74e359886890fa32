#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use gateway_interfaces::configs::Settings;
use router_env::config::LogFormat;

#[test]
fn loads_development_settings() {
    let settings = Settings::new().unwrap();

    assert_eq!(
        settings.connectors.paystation.base_url,
        "https://www.paystation.co.nz/direct/paystation.dll"
    );
    assert_eq!(settings.request_timeout, Some(30));
    assert!(settings.log.console.enabled);
    assert_eq!(settings.log.console.log_format, LogFormat::Default);
    assert!(!settings.log.file.enabled);
}

#[test]
fn missing_config_file_fails_validation() {
    let result = Settings::with_config_path(Some(PathBuf::from("config/does_not_exist.toml")));
    assert!(result.is_err());
}
