use crate::config::AppConfig;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

/// Provider credentials read from their conventional variable names.
const LLM_KEY_VARS: [&str; 2] = ["DEEPSEEK_API_KEY", "OPENROUTER_API_KEY"];

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads application configuration by merging defaults, TOML and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load() -> Result<AppConfig> {
        Ok(Self::figment(None).extract()?)
    }

    /// Loads application configuration with a specific profile.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load_with_profile(profile: &str) -> Result<AppConfig> {
        Ok(Self::figment(Some(profile)).extract()?)
    }

    /// Builds the layered figment. Later layers win.
    #[must_use]
    pub fn figment(profile: Option<&str>) -> Figment {
        tracing::debug!(?profile, "Building configuration layers");

        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("config/Config.toml"));

        if let Some(profile) = profile {
            figment = figment.merge(Toml::file(format!("config/Config.{profile}.toml")));
        }

        figment
            .merge(Env::prefixed("APP_").split("__"))
            .merge(
                Env::raw()
                    .only(&LLM_KEY_VARS)
                    .map(|key| format!("llm.{key}").into()),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_files() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let config: AppConfig = ConfigLoader::figment(None).extract()?;
            assert_eq!(config.dashboard.max_data_points, 50);
            assert!(config.llm.openrouter_api_key.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_toml_and_env_layers() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_dir("config")?;
            jail.create_file(
                "config/Config.toml",
                r#"
                [server]
                port = 9000

                [dashboard]
                max_data_points = 20
                "#,
            )?;
            jail.set_env("APP_DASHBOARD__BOT_NAME", "Night Shift");

            let config: AppConfig = ConfigLoader::figment(None).extract()?;
            assert_eq!(config.server.port, 9000);
            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.dashboard.max_data_points, 20);
            assert_eq!(config.dashboard.bot_name, "Night Shift");
            Ok(())
        });
    }

    #[test]
    fn test_profile_overrides_base_file() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file("config/Config.toml", "[server]\nport = 9000\n")?;
            jail.create_file("config/Config.prod.toml", "[server]\nport = 80\n")?;

            let config: AppConfig = ConfigLoader::figment(Some("prod")).extract()?;
            assert_eq!(config.server.port, 80);
            Ok(())
        });
    }

    #[test]
    fn test_provider_keys_from_raw_env() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("DEEPSEEK_API_KEY", "ds-key");
            jail.set_env("OPENROUTER_API_KEY", "or-key");

            let config: AppConfig = ConfigLoader::figment(None).extract()?;
            assert_eq!(config.llm.deepseek_api_key.as_deref(), Some("ds-key"));
            assert_eq!(config.llm.openrouter_api_key.as_deref(), Some("or-key"));
            Ok(())
        });
    }
}
