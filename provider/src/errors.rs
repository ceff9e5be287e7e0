use crd_defs::StateError;
use crd_templator::GeneratorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Failed to load CRDs: {0}")]
    Crd(#[from] GeneratorError),

    #[error("State error: {0}")]
    State(#[from] StateError),

    #[error("Resource type {0} is not supported by this provider")]
    UnknownType(String),

    #[error("Resource {0} is declared more than once")]
    DuplicateAddress(String),
}
