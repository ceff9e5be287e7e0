mod dynamic;
mod errors;
pub mod generated;
mod host;
mod manifest;
mod provider;
mod resource;
mod state;
mod validate;

pub use dynamic::{render_manifest, DynamicManifestResource};
pub use errors::ProviderError;
pub use host::{apply, destroy, plan, Action, ApplyReport, PlannedChange};
pub use manifest::{render_typed, CrdManifest, ManifestResource};
pub use provider::Provider;
pub use resource::{
    CreateRequest, CreateResponse, DeleteRequest, DeleteResponse, ReadRequest, ReadResponse,
    Resource, UpdateRequest, UpdateResponse, YAML_ERROR_SUMMARY,
};
pub use state::StateStore;
pub use validate::{
    validate_config, INCORRECT_TYPE, INVALID_VALUE, MISSING_REQUIRED_ARGUMENT,
    UNCONFIGURABLE_ATTRIBUTE, UNSUPPORTED_ARGUMENT,
};

// Generated modules import the schema builders from the crate root.
pub use crd_defs::{
    id_attribute, metadata_attribute, object_of, yaml_attribute, Attribute, AttributeKind,
    ResourceSchema, Validator,
};
