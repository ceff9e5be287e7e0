use crate::resource::Resource;
use async_trait::async_trait;
use crd_defs::{Attribute, AttributeKind, ManifestError, ResourceSchema};
use crd_templator::{resource_schema, CrdVersionSpec, GeneratorError};
use crd_utils::to_yaml;
use serde_json::Value;
use serde_yaml::Mapping;

/// A manifest resource built at runtime from a CRD, without generated code.
#[derive(Debug, Clone)]
pub struct DynamicManifestResource {
    api_version: String,
    kind: String,
    type_name_suffix: String,
    schema: ResourceSchema,
}

impl DynamicManifestResource {
    pub fn from_spec(spec: &CrdVersionSpec) -> Result<Self, GeneratorError> {
        Ok(DynamicManifestResource {
            api_version: spec.api_version(),
            kind: spec.kind.clone(),
            type_name_suffix: spec.type_name_suffix(),
            schema: resource_schema(spec)?,
        })
    }
}

#[async_trait]
impl Resource for DynamicManifestResource {
    fn type_name_suffix(&self) -> String {
        self.type_name_suffix.clone()
    }

    fn schema(&self) -> ResourceSchema {
        self.schema.clone()
    }

    fn api_version(&self) -> String {
        self.api_version.clone()
    }

    fn kind(&self) -> String {
        self.kind.clone()
    }

    fn render(&self, config: &Value) -> Result<String, ManifestError> {
        let manifest = render_manifest(&self.api_version, &self.kind, &self.schema, config)?;
        Ok(to_yaml(&manifest)?)
    }
}

/// Builds the manifest document: `apiVersion`, `kind`, then every configured
/// attribute under its JSON name, in schema order. Nulls are omitted and
/// computed attributes are never part of the manifest.
pub fn render_manifest(
    api_version: &str,
    kind: &str,
    schema: &ResourceSchema,
    config: &Value,
) -> Result<serde_yaml::Value, ManifestError> {
    let mut manifest = Mapping::new();
    manifest.insert("apiVersion".into(), api_version.into());
    manifest.insert("kind".into(), kind.into());
    let config = config
        .as_object()
        .ok_or_else(|| ManifestError::InvalidConfig("expected an object".to_string()))?;
    for (key, value) in convert_attributes(&schema.attributes, config, "")? {
        manifest.insert(key, value);
    }
    Ok(serde_yaml::Value::Mapping(manifest))
}

fn convert_attributes(
    attributes: &[Attribute],
    object: &serde_json::Map<String, Value>,
    path: &str,
) -> Result<Mapping, ManifestError> {
    let mut mapping = Mapping::new();
    for attribute in attributes.iter().filter(|a| !a.is_computed()) {
        let value = match object.get(&attribute.name) {
            Some(value) if !value.is_null() => value,
            _ => continue,
        };
        let attribute_path = join_path(path, &attribute.name);
        mapping.insert(
            attribute.json_name.clone().into(),
            convert_value(&attribute.kind, value, &attribute_path)?,
        );
    }
    Ok(mapping)
}

fn convert_value(
    kind: &AttributeKind,
    value: &Value,
    path: &str,
) -> Result<serde_yaml::Value, ManifestError> {
    match kind {
        AttributeKind::Object(attributes) => {
            let object = value.as_object().ok_or_else(|| type_error(path, kind))?;
            Ok(serde_yaml::Value::Mapping(convert_attributes(
                attributes, object, path,
            )?))
        }
        AttributeKind::List(element) => {
            let items = value.as_array().ok_or_else(|| type_error(path, kind))?;
            let converted = items
                .iter()
                .enumerate()
                .map(|(i, item)| convert_value(element, item, &format!("{}[{}]", path, i)))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(serde_yaml::Value::Sequence(converted))
        }
        AttributeKind::Map(element) => {
            let object = value.as_object().ok_or_else(|| type_error(path, kind))?;
            let mut mapping = Mapping::new();
            for (key, item) in object {
                let item_path = format!("{}[{:?}]", path, key);
                mapping.insert(key.clone().into(), convert_value(element, item, &item_path)?);
            }
            Ok(serde_yaml::Value::Mapping(mapping))
        }
        AttributeKind::Float64 => {
            let number = value.as_f64().ok_or_else(|| type_error(path, kind))?;
            Ok(serde_yaml::to_value(number)?)
        }
        AttributeKind::String
        | AttributeKind::Int64
        | AttributeKind::Bool
        | AttributeKind::Dynamic => Ok(serde_yaml::to_value(value)?),
    }
}

fn type_error(path: &str, kind: &AttributeKind) -> ManifestError {
    ManifestError::InvalidConfig(format!("{} must be of type {}", path, kind.type_label()))
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crd_defs::{id_attribute, metadata_attribute, object_of, yaml_attribute};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn schema() -> ResourceSchema {
        ResourceSchema::new(
            "widget",
            vec![
                id_attribute(),
                yaml_attribute(),
                metadata_attribute(true),
                Attribute::object(
                    "spec",
                    vec![
                        Attribute::float64("ratio"),
                        Attribute::list(
                            "parts",
                            object_of(vec![Attribute::string("part_name").json_name("partName")]),
                        ),
                        Attribute::int64("size_limit").json_name("sizeLimit"),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn test_render_manifest_uses_json_names() {
        let config = json!({
            "metadata": {"name": "w", "namespace": "default", "labels": null},
            "spec": {
                "size_limit": 3,
                "ratio": 2,
                "parts": [{"part_name": "a"}]
            }
        });
        let manifest = render_manifest("example.com/v1", "Widget", &schema(), &config).unwrap();
        let expected = r#"apiVersion: example.com/v1
kind: Widget
metadata:
  name: w
  namespace: default
spec:
  ratio: 2.0
  parts:
    - partName: a
  sizeLimit: 3
"#;
        assert_eq!(to_yaml(&manifest).unwrap(), expected);
    }

    #[test]
    fn test_render_manifest_ignores_computed_values() {
        let config = json!({"id": "123", "yaml": "x", "metadata": {"name": "w"}});
        let manifest = render_manifest("example.com/v1", "Widget", &schema(), &config).unwrap();
        assert_eq!(
            to_yaml(&manifest).unwrap(),
            "apiVersion: example.com/v1\nkind: Widget\nmetadata:\n  name: w\n"
        );
    }

    #[test]
    fn test_render_manifest_rejects_non_objects() {
        let err = render_manifest("example.com/v1", "Widget", &schema(), &json!([])).unwrap_err();
        assert!(matches!(err, ManifestError::InvalidConfig(_)));

        let config = json!({"metadata": {"name": "w"}, "spec": {"parts": "nope"}});
        let err = render_manifest("example.com/v1", "Widget", &schema(), &config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid config: spec.parts must be of type list(object)"
        );
    }
}
