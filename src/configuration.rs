use crate::errors::ConfigurationError;
use config::{Config, FileFormat};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use std::env::var;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use url::Url;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Settings {
    pub application: Application,
    pub backend: BackendSettings,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Application {
    pub host: String,
    pub port: u16,
}

#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct BackendSettings {
    #[serde_as(as = "DisplayFromStr")]
    pub mode: BackendMode,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendMode {
    Live,
    #[default]
    Mock,
}

impl Display for BackendMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendMode::Live => write!(f, "live"),
            BackendMode::Mock => write!(f, "mock"),
        }
    }
}

impl FromStr for BackendMode {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "live" => Ok(BackendMode::Live),
            "mock" => Ok(BackendMode::Mock),
            &_ => Err(ConfigurationError::UnknownBackendMode),
        }
    }
}

impl BackendSettings {
    pub fn check_if_valid(&self) -> Result<(), ConfigurationError> {
        match self.mode {
            BackendMode::Live => {
                if Url::parse(&self.base_url).is_err() {
                    return Err(ConfigurationError::InvalidBaseUrl(self.base_url.clone()));
                }
            }
            BackendMode::Mock => {}
        }
        Ok(())
    }

    /// Base URL with a trailing slash so relative joins keep the full path.
    pub fn base_url_unchecked(&self) -> Url {
        let mut url = Url::parse(&self.base_url).unwrap();
        if !url.path().ends_with('/') {
            url.set_path(&format!("{}/", url.path()));
        }
        url
    }
}

/// The possible runtime environment for our application.
#[derive(Debug, Eq, PartialEq)]
pub enum Environment {
    Dev,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Prod => "prod",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            other => Err(format!(
                "{other} is not a supported environment. Use either `dev` or `prod`."
            )),
        }
    }
}

pub fn get_env() -> Environment {
    let environment: Environment = var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "dev".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");
    environment
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let environment = get_env();
    let second_source = format!("configuration/{}", environment.as_str());
    let settings = Config::builder()
        .add_source(config::File::new("configuration/base", FileFormat::Yaml))
        .add_source(config::File::new(&second_source, FileFormat::Yaml))
        .build()?;
    settings.try_deserialize::<Settings>()
}
