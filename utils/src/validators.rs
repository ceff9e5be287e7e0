//! Kubernetes metadata rules, following the apimachinery validation helpers.

use regex::Regex;
use std::collections::BTreeMap;
use once_cell::sync::Lazy;

const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;
const DNS1123_LABEL_MAX_LENGTH: usize = 63;
const QUALIFIED_NAME_MAX_LENGTH: usize = 63;
const LABEL_VALUE_MAX_LENGTH: usize = 63;
const TOTAL_ANNOTATION_SIZE_LIMIT: usize = 256 * 1024;

static DNS1123_SUBDOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
        .expect("valid subdomain pattern")
});

static DNS1123_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").expect("valid label pattern")
});

static QUALIFIED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]$").expect("valid name pattern")
});

pub fn validate_name(name: &str) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    if name.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
        errors.push(format!(
            "must be no more than {} characters",
            DNS1123_SUBDOMAIN_MAX_LENGTH
        ));
    }
    if !DNS1123_SUBDOMAIN.is_match(name) {
        errors.push(
            "must consist of lower case alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character"
                .to_string(),
        );
    }
    into_result(errors)
}

pub fn validate_namespace(namespace: &str) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    if namespace.len() > DNS1123_LABEL_MAX_LENGTH {
        errors.push(format!(
            "must be no more than {} characters",
            DNS1123_LABEL_MAX_LENGTH
        ));
    }
    if !DNS1123_LABEL.is_match(namespace) {
        errors.push(
            "must consist of lower case alphanumeric characters or '-', and must start and end with an alphanumeric character"
                .to_string(),
        );
    }
    into_result(errors)
}

/// Validates a label or annotation key: an optional DNS subdomain prefix
/// followed by `/` and a name.
pub fn validate_qualified_name(key: &str) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let parts: Vec<&str> = key.split('/').collect();
    let name = match parts.as_slice() {
        [name] => *name,
        [prefix, name] => {
            if prefix.is_empty() {
                errors.push(format!("'{}': prefix part must be non-empty", key));
            } else if let Err(prefix_errors) = validate_name(prefix) {
                errors.extend(
                    prefix_errors
                        .into_iter()
                        .map(|e| format!("'{}': prefix part {}", key, e)),
                );
            }
            *name
        }
        _ => {
            errors.push(format!(
                "'{}': a qualified name must consist of an optional prefix and a name separated by a single '/'",
                key
            ));
            return into_result(errors);
        }
    };

    if name.is_empty() {
        errors.push(format!("'{}': name part must be non-empty", key));
    } else {
        if name.len() > QUALIFIED_NAME_MAX_LENGTH {
            errors.push(format!(
                "'{}': name part must be no more than {} characters",
                key, QUALIFIED_NAME_MAX_LENGTH
            ));
        }
        if !QUALIFIED_NAME.is_match(name) {
            errors.push(format!(
                "'{}': name part must consist of alphanumeric characters, '-', '_' or '.', and must start and end with an alphanumeric character",
                key
            ));
        }
    }
    into_result(errors)
}

pub fn validate_label_value(value: &str) -> Result<(), Vec<String>> {
    if value.is_empty() {
        return Ok(());
    }
    let mut errors = Vec::new();
    if value.len() > LABEL_VALUE_MAX_LENGTH {
        errors.push(format!(
            "'{}': must be no more than {} characters",
            value, LABEL_VALUE_MAX_LENGTH
        ));
    }
    if !QUALIFIED_NAME.is_match(value) {
        errors.push(format!(
            "'{}': must be empty or consist of alphanumeric characters, '-', '_' or '.', and must start and end with an alphanumeric character",
            value
        ));
    }
    into_result(errors)
}

pub fn validate_labels(labels: &BTreeMap<String, String>) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    for (key, value) in labels {
        if let Err(e) = validate_qualified_name(key) {
            errors.extend(e);
        }
        if let Err(e) = validate_label_value(value) {
            errors.extend(e);
        }
    }
    into_result(errors)
}

pub fn validate_annotations(annotations: &BTreeMap<String, String>) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut total_size = 0;
    for (key, value) in annotations {
        if let Err(e) = validate_qualified_name(&key.to_lowercase()) {
            errors.extend(e);
        }
        total_size += key.len() + value.len();
    }
    if total_size > TOTAL_ANNOTATION_SIZE_LIMIT {
        errors.push(format!(
            "annotations size {} must have at most {} bytes",
            total_size, TOTAL_ANNOTATION_SIZE_LIMIT
        ));
    }
    into_result(errors)
}

fn into_result(errors: Vec<String>) -> Result<(), Vec<String>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
