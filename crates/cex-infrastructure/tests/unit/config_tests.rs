//! Configuration Loader Tests
//!
//! Loader tests run inside `figment::Jail`, which serialises access to the
//! process environment and working directory.

use cex_infrastructure::config::{
    AppConfig, AuthConfig, ConfigBuilder, ConfigLoader, ExploreConfig, MoverSettings,
    ProvidersConfig,
};
use cex_infrastructure::constants::{
    DEFAULT_AUTHORIZER, DEFAULT_EMBEDDING_PROVIDER, DEFAULT_LOG_LEVEL, DEFAULT_MOVER_PROVIDER,
    DEFAULT_VECTOR_INDEX_PROVIDER,
};
use figment::Jail;
use std::time::Duration;
use tempfile::TempDir;

fn load(loader: &ConfigLoader) -> figment::error::Result<AppConfig> {
    loader.load().map_err(|e| e.to_string().into())
}

#[test]
fn test_defaults() {
    Jail::expect_with(|_jail| {
        let config = load(&ConfigLoader::new())?;

        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.auth.authorizer, DEFAULT_AUTHORIZER);
        assert_eq!(config.providers.embedding.provider, DEFAULT_EMBEDDING_PROVIDER);
        assert_eq!(config.providers.vector_index.provider, DEFAULT_VECTOR_INDEX_PROVIDER);
        assert_eq!(config.providers.mover.provider, DEFAULT_MOVER_PROVIDER);
        assert_eq!(config.explore.beacon_scheme, "weaviate");
        assert_eq!(config.explore.beacon_host, "localhost");
        assert!(config.explore.timeout().is_none());
        Ok(())
    });
}

#[test]
fn test_toml_file_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "cex.toml",
            r#"
            [auth]
            authorizer = "admin_list"
            admin_users = ["alice"]

            [providers.embedding]
            provider = "null"
            dimensions = 16

            [explore]
            beacon_host = "db.example"
            timeout_ms = 1500
            "#,
        )?;

        let config = load(&ConfigLoader::new())?;
        assert_eq!(config.auth.authorizer, "admin_list");
        assert_eq!(config.auth.admin_users, vec!["alice".to_string()]);
        assert_eq!(config.providers.embedding.dimensions, Some(16));
        assert_eq!(config.explore.beacon_host, "db.example");
        assert_eq!(config.explore.timeout(), Some(Duration::from_millis(1500)));
        // untouched sections keep their defaults
        assert_eq!(config.providers.mover.provider, DEFAULT_MOVER_PROVIDER);
        Ok(())
    });
}

#[test]
fn test_environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
            [explore]
            beacon_host = "from-file"
            "#,
        )?;
        jail.set_env("CEX__EXPLORE__BEACON_HOST", "from-env");
        jail.set_env("CEX__AUTH__ALLOW_ANONYMOUS", "true");
        jail.set_env("CEX__PROVIDERS__MOVER__MAX_FORCE", "2.0");

        let config = load(&ConfigLoader::new().with_config_path("custom.toml"))?;
        assert_eq!(config.explore.beacon_host, "from-env");
        assert!(config.auth.allow_anonymous);
        assert_eq!(config.providers.mover.max_force, Some(2.0));
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let loader = ConfigLoader::new().with_config_path("nowhere.toml");
        let config = load(&loader)?;
        assert_eq!(config, AppConfig::default());
        assert_eq!(
            loader.config_path().and_then(|p| p.to_str()),
            Some("nowhere.toml")
        );
        Ok(())
    });
}

#[test]
fn test_validation_rejects_bad_values() {
    let cases = [
        "[logging]\nlevel = \"chatty\"",
        "[auth]\nauthorizer = \"ldap\"",
        "[providers.embedding]\nprovider = \"\"",
        "[providers.embedding]\ndimensions = 0",
        "[providers.mover]\nmax_force = -1.0",
        "[explore]\ntimeout_ms = 0",
        "[explore]\nbeacon_scheme = \"\"",
    ];

    for case in cases {
        Jail::expect_with(|jail| {
            jail.create_file("cex.toml", case)?;
            assert!(ConfigLoader::new().load().is_err(), "{case:?} must be rejected");
            Ok(())
        });
    }
}

#[test]
fn test_validation_applies_to_environment() {
    Jail::expect_with(|jail| {
        jail.set_env("CEX__AUTH__AUTHORIZER", "ldap");
        let err = ConfigLoader::new().load().expect_err("unknown authorizer");
        assert!(err.to_string().contains("Unknown authorizer 'ldap'"));
        Ok(())
    });
}

#[test]
fn test_save_and_reload() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("saved.toml");

    let original = ConfigBuilder::new()
        .with_auth(AuthConfig {
            authorizer: "admin_list".to_string(),
            read_only_users: vec!["reader".to_string()],
            ..AuthConfig::default()
        })
        .with_providers(ProvidersConfig {
            mover: MoverSettings {
                max_force: Some(1.5),
                ..MoverSettings::default()
            },
            ..ProvidersConfig::default()
        })
        .with_explore(ExploreConfig {
            timeout_ms: Some(200),
            ..ExploreConfig::default()
        })
        .build();

    ConfigLoader::new()
        .save_to_file(&original, &config_path)
        .expect("save");

    Jail::expect_with(|_jail| {
        let loaded = load(&ConfigLoader::new().with_config_path(&config_path))?;
        assert_eq!(loaded, original);
        Ok(())
    });
}
