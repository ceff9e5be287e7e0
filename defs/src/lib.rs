mod config;
mod diagnostics;
mod errors;
mod schema;
mod state;

pub use config::{HostConfig, ResourceConfig};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use errors::{ManifestError, StateError};
pub use schema::{
    id_attribute, metadata_attribute, object_of, yaml_attribute, Attribute, AttributeKind,
    Requirement, ResourceSchema, Validator, ID_DESCRIPTION, YAML_DESCRIPTION,
};
pub use state::{
    get_resource_address, ResourceState, StateEntry, StateFile, STATE_FORMAT_VERSION,
};
