use std::path::PathBuf;

use folio_domain::i18n::{LocaleConfig, DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};

use super::LogLevel;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Placeholder signing key. Production deployments must set `SECRET_KEY`.
pub const DEFAULT_SECRET_KEY: &str = "dev-insecure-secret-key-change-me";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" => Some(Environment::Development),
            "production" | "prod" => Some(Environment::Production),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

/// Server configuration, read once at startup from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub secret_key: String,
    pub environment: Environment,

    /// README paths resolve against this directory
    pub data_dir: PathBuf,
    pub projects_file: PathBuf,
    pub translations_dir: PathBuf,
    pub static_dir: PathBuf,

    /// JSON file logging is enabled only when set
    pub log_dir: Option<PathBuf>,
    pub log_level: LogLevel,

    pub locale: LocaleConfig,

    // Problems found while reading variables; reported once logging is up
    warnings: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warnings.push(format!("Invalid PORT '{raw}', using {DEFAULT_PORT}"));
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let environment = match var("FOLIO_ENV") {
            Some(raw) => Environment::parse(&raw).unwrap_or_else(|| {
                warnings.push(format!("Unknown FOLIO_ENV '{raw}', using production"));
                Environment::Production
            }),
            None => Environment::Production,
        };

        let log_level = match var("FOLIO_LOG_LEVEL") {
            Some(raw) => raw.parse().unwrap_or_else(|err: String| {
                warnings.push(err);
                LogLevel::default()
            }),
            None if environment == Environment::Development => LogLevel::Debug,
            None => LogLevel::default(),
        };

        let secret_key = var("SECRET_KEY").unwrap_or_else(|| {
            warnings.push("SECRET_KEY is not set; using the insecure development key".to_string());
            DEFAULT_SECRET_KEY.to_string()
        });

        let data_dir = PathBuf::from(var("FOLIO_DATA_DIR").unwrap_or_else(|| "data".to_string()));
        let projects_file = var("FOLIO_PROJECTS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("projects.json"));

        let locale = Self::locale_from(var("FOLIO_LANGUAGES"), var("FOLIO_DEFAULT_LANGUAGE"), &mut warnings);

        Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            secret_key,
            environment,
            data_dir,
            projects_file,
            translations_dir: PathBuf::from(
                var("FOLIO_TRANSLATIONS_DIR").unwrap_or_else(|| "translations".to_string()),
            ),
            static_dir: PathBuf::from(var("FOLIO_STATIC_DIR").unwrap_or_else(|| "static".to_string())),
            log_dir: var("FOLIO_LOG_DIR").map(PathBuf::from),
            log_level,
            locale,
            warnings,
        }
    }

    fn locale_from(
        languages: Option<String>,
        default: Option<String>,
        warnings: &mut Vec<String>,
    ) -> LocaleConfig {
        let supported: Vec<String> = match languages {
            Some(raw) => raw.split(',').map(str::to_string).collect(),
            None => SUPPORTED_LANGUAGES.iter().map(|s| s.to_string()).collect(),
        };
        let default = default.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        match LocaleConfig::new(supported.clone(), default) {
            Ok(config) => config,
            Err(err) => {
                warnings.push(format!("{err}"));
                // Keep the configured set when only the default is wrong
                let first = supported
                    .iter()
                    .map(|code| code.trim())
                    .find(|code| !code.is_empty())
                    .map(str::to_string);
                first
                    .and_then(|first| LocaleConfig::new(supported, first).ok())
                    .unwrap_or_default()
            }
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
