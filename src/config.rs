use std::collections::HashMap;
use std::fs::File;
use std::io::prelude::*;

use clap::ArgMatches;
use serde::Deserialize;

#[derive(Debug)]
pub struct Config {
    pub app_config: AppConfig,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub twitch: TwitchConfig,
    #[serde(default)]
    pub commands: CommandsConfig,
    /// Granted permissions keyed by user id
    #[serde(default)]
    pub permissions: HashMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct TwitchConfig {
    pub bot_name: String,
    pub channels: Vec<String>,
    pub client_secret: String,
    pub user_access_token: String,
    pub user_refresh_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CommandsConfig {
    /// Prepended to every built-in command alias
    pub prefix: String,
    /// Reply for users lacking a command's permission, no reply when absent
    pub missing_permissions_message: Option<String>,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            prefix: String::from("~"),
            missing_permissions_message: Option::None,
        }
    }
}

impl Config {
    pub fn from_args(args: &ArgMatches<'static>) -> anyhow::Result<Config> {
        let config_path = args.value_of("app-config").unwrap(); // Safe unwrap, because we provided the default value at arg def

        Config::from_file(config_path)
    }

    pub fn from_file(config_path: &str) -> anyhow::Result<Config> {
        let mut config_file = File::open(config_path)?;
        let mut config_contents = String::new();

        config_file.read_to_string(&mut config_contents)?;

        let app_config = AppConfig::parse(config_contents.as_str())?;

        Ok(Config { app_config })
    }
}

impl AppConfig {
    pub fn parse(contents: &str) -> anyhow::Result<AppConfig> {
        let app_config: AppConfig = toml::from_str(contents)?;

        if app_config.twitch.channels.is_empty() {
            anyhow::bail!("No channels to join, set twitch.channels");
        }

        Ok(app_config)
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, Config};

    const TWITCH: &str = r#"
        [twitch]
        bot_name = "develbot"
        channels = ["smertos"]
        client_secret = "secret"
        user_access_token = "access"
        user_refresh_token = "refresh"
    "#;

    #[test]
    fn optional_sections_fall_back_to_defaults() {
        let config = AppConfig::parse(TWITCH).unwrap();

        assert_eq!(config.twitch.bot_name, "develbot");
        assert_eq!(config.twitch.channels, vec!["smertos".to_string()]);
        assert_eq!(config.commands.prefix, "~");
        assert_eq!(config.commands.missing_permissions_message, Option::None);
        assert!(config.permissions.is_empty());
    }

    #[test]
    fn reads_commands_and_permissions() {
        let contents = format!(
            "{}\n{}",
            TWITCH,
            r#"
            [commands]
            prefix = "!"
            missing_permissions_message = "You are not allowed to use this command!"

            [permissions]
            "40286300" = ["admin", "permissions.*"]
            "#
        );

        let config = AppConfig::parse(contents.as_str()).unwrap();

        assert_eq!(config.commands.prefix, "!");
        assert_eq!(
            config.commands.missing_permissions_message.as_deref(),
            Option::Some("You are not allowed to use this command!")
        );
        assert_eq!(
            config.permissions.get("40286300"),
            Option::Some(&vec!["admin".to_string(), "permissions.*".to_string()])
        );
    }

    #[test]
    fn loads_config_from_file() {
        let path = std::env::temp_dir().join(format!("chatdispatch-config-{}.toml", std::process::id()));
        std::fs::write(&path, TWITCH).unwrap();

        let config = Config::from_file(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.unwrap().app_config.twitch.channels, vec!["smertos".to_string()]);
        assert!(Config::from_file("/nonexistent/chatdispatch.toml").is_err());
    }

    #[test]
    fn rejects_config_without_channels() {
        let contents = TWITCH.replace(r#"channels = ["smertos"]"#, "channels = []");

        assert!(AppConfig::parse(contents.as_str()).is_err());
    }
}
