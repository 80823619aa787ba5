use std::{path::PathBuf, str::FromStr};

use anyhow::{Context, Result};
use paygrid::Currency;
use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};
use strum::{Display, EnumString};

#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde_as(as = "DisplayFromStr")]
    pub display_currency: Currency,
    pub log_level: String,
    #[serde_as(as = "DisplayFromStr")]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum OutputFormat {
    #[strum(ascii_case_insensitive, serialize = "table")]
    Table,
    #[strum(ascii_case_insensitive, serialize = "json")]
    Json,
}

#[derive(Display, Debug, EnumString)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}

impl Environment {
    fn current() -> Result<Self> {
        let raw = std::env::var("PAYGRID_ENVIRONMENT").unwrap_or_else(|_| "local".into());
        Environment::from_str(&raw).with_context(|| format!("Invalid PAYGRID_ENVIRONMENT: {raw}"))
    }
}

/// `<config_dir>/paygrid/config.toml`, if the platform has a config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("paygrid").join("config.toml"))
}

/// Reads settings from, lowest precedence first: built-in defaults, the user
/// config file, `./paygrid.toml`, `./<environment>.toml` and `PAYGRID_*`
/// environment variables. Every file is optional.
pub fn read_config() -> Result<Settings> {
    let environment = Environment::current()?;

    let mut builder = config::Config::builder()
        .set_default("display_currency", Currency::default().to_string())?
        .set_default("log_level", "warn")?
        .set_default("output", OutputFormat::Table.to_string())?;

    if let Some(path) = user_config_path() {
        builder = builder.add_source(config::File::from(path).required(false));
    }

    let settings = builder
        .add_source(config::File::with_name("paygrid").required(false))
        .add_source(config::File::with_name(&environment.to_string()).required(false))
        .add_source(
            config::Environment::with_prefix("PAYGRID")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("Failed to load configuration")?;

    settings
        .try_deserialize::<Settings>()
        .context("Invalid configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_is_case_insensitive() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::Table.to_string(), "table");
    }

    #[test]
    fn environment_names() {
        assert!(matches!(
            Environment::from_str("Production").unwrap(),
            Environment::Production
        ));
        assert!(Environment::from_str("staging").is_err());
    }
}
