//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directories and env vars.

use cy_config::CyodaConfig;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_connection_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[connection]
api_url = "https://my-env.cyoda.net/api"
username = "demo.user"
password_env = "DEMO_USER_PASSWD"
password_file = "/home/demo/.cyoda/demo.passwd"
request_timeout_secs = 30
"#,
        )?;

        let config: CyodaConfig = Figment::from(Serialized::defaults(CyodaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.connection.base_url(), Some("https://my-env.cyoda.net/api"));
        assert_eq!(config.connection.username, "demo.user");
        assert_eq!(config.connection.password_env, "DEMO_USER_PASSWD");
        assert_eq!(
            config.connection.password_file.as_deref(),
            Some("/home/demo/.cyoda/demo.passwd")
        );
        assert_eq!(config.connection.request_timeout_secs, Some(30));
        Ok(())
    });
}

#[test]
fn loads_search_and_transfer_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[search]
timeout_secs = 60
interval_millis = 250
page_size = 500

[transfer]
folder = "/tmp/cyoda-backup"
"#,
        )?;

        let config: CyodaConfig = Figment::from(Serialized::defaults(CyodaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.search.timeout_secs, 60);
        assert_eq!(config.search.interval_millis, 250);
        assert_eq!(config.search.page_size, 500);
        assert_eq!(config.transfer.folder.as_deref(), Some("/tmp/cyoda-backup"));
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[connection]
username = "only.user"
"#,
        )?;

        let config: CyodaConfig = Figment::from(Serialized::defaults(CyodaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.connection.username, "only.user");
        assert_eq!(config.connection.api_url, None);
        assert_eq!(config.search.timeout_secs, 5);
        assert_eq!(config.search.interval_millis, 10);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".cyoda")?;
        jail.create_file(
            ".cyoda/config.toml",
            r#"
[connection]
api_url = "https://project.cyoda.net/api"
"#,
        )?;

        let config = CyodaConfig::load().expect("config loads");
        assert_eq!(config.connection.base_url(), Some("https://project.cyoda.net/api"));
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_values() {
    Jail::expect_with(|jail| {
        jail.create_dir(".cyoda")?;
        jail.create_file(
            ".cyoda/config.toml",
            r#"
[search]
page_size = 0
"#,
        )?;

        let err = CyodaConfig::load().unwrap_err();
        assert!(err.to_string().contains("search.page_size"));
        Ok(())
    });
}
