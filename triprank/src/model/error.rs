#[derive(thiserror::Error, Debug)]
pub enum ScoringError {
    #[error("unable to load file {0}: {1}")]
    AssetReadError(String, #[source] std::io::Error),
    #[error("failed to parse {0} as JSON: {1}")]
    AssetFormatError(String, #[source] serde_json::Error),
    #[error("invalid settings: {0}")]
    SettingsError(#[from] config::ConfigError),
    #[error("failure writing ranked output: {0}")]
    OutputError(#[from] csv::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
