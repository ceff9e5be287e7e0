use crd_defs::{Attribute, AttributeKind, Diagnostics, ResourceSchema, Validator};
use crd_utils::{validate_annotations, validate_labels, validate_name, validate_namespace};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const UNSUPPORTED_ARGUMENT: &str = "Unsupported argument";
pub const MISSING_REQUIRED_ARGUMENT: &str = "Missing required argument";
pub const UNCONFIGURABLE_ATTRIBUTE: &str = "Value for unconfigurable attribute";
pub const INCORRECT_TYPE: &str = "Incorrect attribute value type";
pub const INVALID_VALUE: &str = "Invalid attribute value";

/// Checks a config against the schema before any lifecycle method sees it.
/// Every problem found is reported, not only the first one.
pub fn validate_config(schema: &ResourceSchema, config: &Value) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    match config.as_object() {
        Some(object) => validate_object(&schema.attributes, object, "", &mut diagnostics),
        None => diagnostics.add_error(
            INCORRECT_TYPE,
            &format!("The resource configuration must be an object, got {}.", type_of(config)),
        ),
    }
    diagnostics
}

fn validate_object(
    attributes: &[Attribute],
    object: &Map<String, Value>,
    path: &str,
    diagnostics: &mut Diagnostics,
) {
    for key in object.keys() {
        if !attributes.iter().any(|a| &a.name == key) {
            diagnostics.add_attribute_error(
                &join_path(path, key),
                UNSUPPORTED_ARGUMENT,
                &format!("An argument named \"{}\" is not expected here.", key),
            );
        }
    }

    for attribute in attributes {
        let attribute_path = join_path(path, &attribute.name);
        let value = object.get(&attribute.name).filter(|v| !v.is_null());
        match value {
            Some(_) if attribute.is_computed() => diagnostics.add_attribute_error(
                &attribute_path,
                UNCONFIGURABLE_ATTRIBUTE,
                &format!(
                    "Can't configure a value for \"{}\": its value will be decided automatically when the manifest is rendered.",
                    attribute_path
                ),
            ),
            Some(value) => {
                let before = diagnostics.len();
                validate_value(&attribute.kind, value, &attribute_path, diagnostics);
                if diagnostics.len() == before {
                    run_validators(&attribute.validators, value, &attribute_path, diagnostics);
                }
            }
            None if attribute.is_required() => diagnostics.add_attribute_error(
                &attribute_path,
                MISSING_REQUIRED_ARGUMENT,
                &format!(
                    "The argument \"{}\" is required, but no definition was found.",
                    attribute_path
                ),
            ),
            None => {}
        }
    }
}

fn validate_value(kind: &AttributeKind, value: &Value, path: &str, diagnostics: &mut Diagnostics) {
    let matches = match kind {
        AttributeKind::String => value.is_string(),
        AttributeKind::Int64 => value.is_i64(),
        AttributeKind::Float64 => value.is_number(),
        AttributeKind::Bool => value.is_boolean(),
        AttributeKind::Dynamic => true,
        AttributeKind::List(element) => match value.as_array() {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    validate_element(element, item, &format!("{}[{}]", path, i), diagnostics);
                }
                true
            }
            None => false,
        },
        AttributeKind::Map(element) => match value.as_object() {
            Some(object) => {
                for (key, item) in object {
                    validate_element(element, item, &format!("{}[{:?}]", path, key), diagnostics);
                }
                true
            }
            None => false,
        },
        AttributeKind::Object(attributes) => match value.as_object() {
            Some(object) => {
                validate_object(attributes, object, path, diagnostics);
                true
            }
            None => false,
        },
    };
    if !matches {
        diagnostics.add_attribute_error(
            path,
            INCORRECT_TYPE,
            &format!(
                "Inappropriate value for attribute \"{}\": {} required, got {}.",
                path,
                kind.type_label(),
                type_of(value)
            ),
        );
    }
}

fn validate_element(kind: &AttributeKind, value: &Value, path: &str, diagnostics: &mut Diagnostics) {
    if value.is_null() {
        diagnostics.add_attribute_error(
            path,
            INCORRECT_TYPE,
            "Null values are not allowed for list or map elements.",
        );
    } else {
        validate_value(kind, value, path, diagnostics);
    }
}

fn run_validators(validators: &[Validator], value: &Value, path: &str, diagnostics: &mut Diagnostics) {
    for validator in validators {
        let (summary, result) = match validator {
            Validator::KubernetesName => (
                "Invalid Kubernetes name",
                value.as_str().map(validate_name).unwrap_or(Ok(())),
            ),
            Validator::KubernetesNamespace => (
                "Invalid Kubernetes namespace",
                value.as_str().map(validate_namespace).unwrap_or(Ok(())),
            ),
            Validator::Labels => (
                "Invalid labels",
                string_map(value).map(|m| validate_labels(&m)).unwrap_or(Ok(())),
            ),
            Validator::Annotations => (
                "Invalid annotations",
                string_map(value)
                    .map(|m| validate_annotations(&m))
                    .unwrap_or(Ok(())),
            ),
        };
        if let Err(errors) = result {
            diagnostics.add_attribute_error(
                path,
                INVALID_VALUE,
                &format!("{}: {}", summary, errors.join("; ")),
            );
        }
    }
}

fn string_map(value: &Value) -> Option<BTreeMap<String, String>> {
    value
        .as_object()?
        .iter()
        .map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect()
}

fn type_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}
