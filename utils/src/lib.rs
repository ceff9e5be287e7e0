mod config;
mod logging;
mod string_utils;
mod time;
mod validators;
mod yaml;

pub use config::{ProviderConfig, DEFAULT_PROVIDER_NAME, DEFAULT_STATE_FILE};
pub use logging::{get_log_level, setup_logging, setup_logging_with_level};
pub use string_utils::{
    indent, sanitize_segment, to_field_ident, to_snake_case, to_type_ident,
};
pub use time::{epoch_nanos_to_timestamp, get_epoch_nanos, new_resource_id};
pub use validators::{
    validate_annotations, validate_label_value, validate_labels, validate_name,
    validate_namespace, validate_qualified_name,
};
pub use yaml::{join_documents, split_documents, to_yaml};
