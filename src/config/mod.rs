//! Configuration layer: typed settings with layered precedence (file → env → CLI).

mod cli;

pub use cli::{
    CliArgs, Command, DEFAULT_RELATED_LIMIT, EnhanceArgs, GlobalOverrides, ListArgs, LocaleArgs,
    PostArgs, RelatedArgs, SlugArgs,
};

use std::{num::NonZeroU32, str::FromStr, time::Duration};

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::application::enhance::{
    DEFAULT_CURRENT_PATH_PREFIX, DEFAULT_ENHANCE_CACHE_CAPACITY, DEFAULT_LEGACY_DOMAIN,
    DEFAULT_LEGACY_PATH_PREFIX,
};
use crate::domain::locale::{DEFAULT_SOURCE_LOCALE, normalize_locale};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "folio";
const ENV_PREFIX: &str = "FOLIO";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 4;
const DEFAULT_DB_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub database: DatabaseSettings,
    pub content: ContentSettings,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    /// `None` runs static-only.
    pub url: Option<String>,
    pub max_connections: NonZeroU32,
    pub acquire_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ContentSettings {
    pub source_locale: String,
    /// Always contains `source_locale`, listed first.
    pub supported_locales: Vec<String>,
    pub enhance_cache_capacity: usize,
    pub legacy_path_prefix: String,
    pub current_path_prefix: String,
    pub legacy_domain: String,
}

impl ContentSettings {
    pub fn supports(&self, locale: &str) -> bool {
        self.supported_locales
            .iter()
            .any(|known| known.eq_ignore_ascii_case(locale))
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("content.supported_locales")
            .try_parsing(true),
    );

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_global_overrides(&cli.overrides);
    Settings::from_raw(raw)
}

/// Resolve configuration using the supplied CLI arguments, returning both for downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    logging: RawLoggingSettings,
    database: RawDatabaseSettings,
    content: RawContentSettings,
}

impl RawSettings {
    fn apply_global_overrides(&mut self, overrides: &GlobalOverrides) {
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
        if let Some(url) = overrides.database_url.as_ref() {
            self.database.url = Some(url.clone());
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            logging,
            database,
            content,
        } = raw;

        Ok(Self {
            logging: build_logging_settings(logging)?,
            database: build_database_settings(database)?,
            content: build_content_settings(content)?,
        })
    }
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_database_settings(database: RawDatabaseSettings) -> Result<DatabaseSettings, LoadError> {
    let url = database.url.and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    });

    let max_connections = non_zero_u32(
        database
            .max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
            .into(),
        "database.max_connections",
    )?;

    let timeout_secs = database
        .acquire_timeout_seconds
        .unwrap_or(DEFAULT_DB_ACQUIRE_TIMEOUT_SECS);
    if timeout_secs == 0 {
        return Err(LoadError::invalid(
            "database.acquire_timeout_seconds",
            "must be greater than zero",
        ));
    }

    Ok(DatabaseSettings {
        url,
        max_connections,
        acquire_timeout: Duration::from_secs(timeout_secs),
    })
}

fn build_content_settings(content: RawContentSettings) -> Result<ContentSettings, LoadError> {
    let source_locale = normalize_locale(
        content
            .source_locale
            .as_deref()
            .unwrap_or(DEFAULT_SOURCE_LOCALE),
    )
    .map_err(|err| LoadError::invalid("content.source_locale", err.to_string()))?;

    let mut supported_locales = vec![source_locale.clone()];
    let configured = content.supported_locales.unwrap_or_default();
    let mut source_listed = configured.is_empty();
    for code in configured {
        let locale = normalize_locale(&code)
            .map_err(|err| LoadError::invalid("content.supported_locales", err.to_string()))?;
        if locale == source_locale {
            source_listed = true;
        } else if !supported_locales.contains(&locale) {
            supported_locales.push(locale);
        }
    }
    if !source_listed {
        return Err(LoadError::invalid(
            "content.supported_locales",
            format!("must include the source locale `{source_locale}`"),
        ));
    }

    let legacy_path_prefix = path_prefix(
        content.legacy_path_prefix,
        DEFAULT_LEGACY_PATH_PREFIX,
        "content.legacy_path_prefix",
    )?;
    let current_path_prefix = path_prefix(
        content.current_path_prefix,
        DEFAULT_CURRENT_PATH_PREFIX,
        "content.current_path_prefix",
    )?;

    let legacy_domain = content
        .legacy_domain
        .map(|value| value.trim().trim_end_matches('/').to_ascii_lowercase())
        .unwrap_or_else(|| DEFAULT_LEGACY_DOMAIN.to_string());
    if legacy_domain.is_empty() || legacy_domain.contains('/') {
        return Err(LoadError::invalid(
            "content.legacy_domain",
            "must be a bare host name",
        ));
    }

    Ok(ContentSettings {
        source_locale,
        supported_locales,
        enhance_cache_capacity: content
            .enhance_cache_capacity
            .unwrap_or(DEFAULT_ENHANCE_CACHE_CAPACITY),
        legacy_path_prefix,
        current_path_prefix,
        legacy_domain,
    })
}

fn path_prefix(
    value: Option<String>,
    default: &str,
    key: &'static str,
) -> Result<String, LoadError> {
    let prefix = value
        .map(|value| value.trim().to_string())
        .unwrap_or_else(|| default.to_string());
    if prefix.len() < 2 || !prefix.starts_with('/') || !prefix.ends_with('/') {
        return Err(LoadError::invalid(
            key,
            "must start and end with `/`, e.g. `/blog/`",
        ));
    }
    Ok(prefix)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawDatabaseSettings {
    url: Option<String>,
    max_connections: Option<u32>,
    acquire_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawContentSettings {
    source_locale: Option<String>,
    supported_locales: Option<Vec<String>>,
    enhance_cache_capacity: Option<usize>,
    legacy_path_prefix: Option<String>,
    current_path_prefix: Option<String>,
    legacy_domain: Option<String>,
}

fn non_zero_u32(value: u64, key: &'static str) -> Result<NonZeroU32, LoadError> {
    if value == 0 {
        return Err(LoadError::invalid(key, "must be greater than zero"));
    }
    let value_u32: u32 = value
        .try_into()
        .map_err(|_| LoadError::invalid(key, "value exceeds supported range for u32"))?;
    NonZeroU32::new(value_u32).ok_or_else(|| LoadError::invalid(key, "must be greater than zero"))
}
