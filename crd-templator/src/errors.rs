use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Failed to read {0}: {1}")]
    Io(String, #[source] std::io::Error),

    #[error("Failed to parse {0}: {1}")]
    Yaml(String, #[source] serde_yaml::Error),

    #[error("Failed to render template: {0}")]
    Template(#[from] tera::Error),

    #[error("CRD {0} version {1} has no openAPIV3Schema")]
    MissingSchema(String, String),

    #[error("CRD {0} has no version named {1}")]
    UnknownVersion(String, String),

    #[error("Attribute name '{0}' is produced by more than one property at {1}")]
    DuplicateAttribute(String, String),

    #[error("Invalid CRD: {0}")]
    InvalidCrd(String),
}
