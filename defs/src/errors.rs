use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to marshal manifest to YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Config does not match the resource model: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

#[derive(Error, Debug)]
pub enum StateError {
    #[error("Failed to access state file: {0}")]
    Io(#[from] std::io::Error),

    #[error("State file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("State file version {0} is not supported")]
    UnsupportedVersion(u32),
}
