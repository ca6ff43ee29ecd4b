use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("No provider API key configured (set provider.api_key or CALENDARIFIC_API_KEY)")]
    MissingApiKey,

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
