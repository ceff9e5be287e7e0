use crate::crd::CrdVersionSpec;
use crate::errors::GeneratorError;
use crd_defs::{
    id_attribute, metadata_attribute, yaml_attribute, Attribute, AttributeKind, Requirement,
    ResourceSchema,
};
use crd_utils::to_snake_case;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    JSONSchemaProps, JSONSchemaPropsOrArray, JSONSchemaPropsOrBool,
};
use std::collections::HashSet;

/// Root properties that are either stamped, handled by the shared metadata
/// attribute, or owned by the cluster.
const RESERVED_ROOT_PROPERTIES: &[&str] = &["apiVersion", "kind", "metadata", "status"];

/// The full resource schema: `id`, `yaml`, `metadata`, then the CRD's own
/// root properties.
pub fn resource_schema(spec: &CrdVersionSpec) -> Result<ResourceSchema, GeneratorError> {
    let mut attributes = vec![
        id_attribute(),
        yaml_attribute(),
        metadata_attribute(spec.namespaced),
    ];
    attributes.extend(crd_attributes(spec)?);
    ensure_unique_names(&attributes, &spec.kind)?;
    Ok(ResourceSchema::new(&spec.description(), attributes))
}

/// Attributes mapped from the CRD's root properties, without the shared ones.
pub fn crd_attributes(spec: &CrdVersionSpec) -> Result<Vec<Attribute>, GeneratorError> {
    let required = required_set(&spec.schema);
    let mut attributes = Vec::new();
    if let Some(properties) = &spec.schema.properties {
        for (json_name, property) in properties {
            if RESERVED_ROOT_PROPERTIES.contains(&json_name.as_str()) {
                continue;
            }
            attributes.push(map_property(
                json_name,
                property,
                required.contains(json_name.as_str()),
                json_name,
            )?);
        }
    }
    Ok(attributes)
}

fn map_property(
    json_name: &str,
    property: &JSONSchemaProps,
    required: bool,
    path: &str,
) -> Result<Attribute, GeneratorError> {
    let mut attribute = Attribute::new(&to_snake_case(json_name), map_kind(property, path)?)
        .json_name(json_name)
        .description(property.description.as_deref().unwrap_or("").trim());
    attribute.requirement = if required {
        Requirement::Required
    } else {
        Requirement::Optional
    };
    Ok(attribute)
}

pub fn map_kind(property: &JSONSchemaProps, path: &str) -> Result<AttributeKind, GeneratorError> {
    if property.x_kubernetes_int_or_string == Some(true) {
        return Ok(AttributeKind::String);
    }
    let kind = match property.type_.as_deref() {
        Some("string") => AttributeKind::String,
        Some("integer") => AttributeKind::Int64,
        Some("number") => AttributeKind::Float64,
        Some("boolean") => AttributeKind::Bool,
        Some("array") => {
            let element = match &property.items {
                Some(JSONSchemaPropsOrArray::Schema(items)) => map_kind(items, path)?,
                Some(JSONSchemaPropsOrArray::Schemas(items)) => match items.first() {
                    Some(first) => map_kind(first, path)?,
                    None => AttributeKind::Dynamic,
                },
                None => AttributeKind::Dynamic,
            };
            AttributeKind::List(Box::new(element))
        }
        Some("object") | None => map_object(property, path)?,
        Some(_) => AttributeKind::Dynamic,
    };
    Ok(kind)
}

/// Objects with declared properties become nested objects, even when they
/// also preserve unknown fields. Schema-typed `additionalProperties` become
/// maps, anything else is free-form.
fn map_object(property: &JSONSchemaProps, path: &str) -> Result<AttributeKind, GeneratorError> {
    if let Some(properties) = property.properties.as_ref().filter(|p| !p.is_empty()) {
        let required = required_set(property);
        let mut attributes = Vec::new();
        for (json_name, nested) in properties {
            let nested_path = format!("{}.{}", path, json_name);
            attributes.push(map_property(
                json_name,
                nested,
                required.contains(json_name.as_str()),
                &nested_path,
            )?);
        }
        ensure_unique_names(&attributes, path)?;
        return Ok(AttributeKind::Object(attributes));
    }
    if let Some(JSONSchemaPropsOrBool::Schema(element)) = &property.additional_properties {
        return Ok(AttributeKind::Map(Box::new(map_kind(element, path)?)));
    }
    Ok(AttributeKind::Dynamic)
}

fn required_set(property: &JSONSchemaProps) -> HashSet<&str> {
    property
        .required
        .as_ref()
        .map(|r| r.iter().map(|s| s.as_str()).collect())
        .unwrap_or_default()
}

fn ensure_unique_names(attributes: &[Attribute], path: &str) -> Result<(), GeneratorError> {
    let mut seen = HashSet::new();
    for attribute in attributes {
        if !seen.insert(attribute.name.as_str()) {
            return Err(GeneratorError::DuplicateAttribute(
                attribute.name.clone(),
                path.to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::served_versions;
    use crate::read::parse_crds;
    use pretty_assertions::assert_eq;

    fn spec_from(schema: &str, scope: &str) -> CrdVersionSpec {
        let crd = format!(
            r#"
apiVersion: apiextensions.k8s.io/v1
kind: CustomResourceDefinition
metadata:
  name: widgets.example.com
spec:
  group: example.com
  names:
    kind: Widget
    plural: widgets
  scope: {}
  versions:
    - name: v1
      served: true
      storage: true
      schema:
        openAPIV3Schema:
{}
"#,
            scope,
            schema
                .lines()
                .map(|line| format!("          {}", line))
                .collect::<Vec<_>>()
                .join("\n")
        );
        let crd = parse_crds(&crd, "inline").unwrap().remove(0);
        served_versions(&crd).unwrap().remove(0)
    }

    const WIDGET_SCHEMA: &str = r#"type: object
properties:
  apiVersion:
    type: string
  kind:
    type: string
  metadata:
    type: object
  status:
    type: object
  spec:
    type: object
    required:
      - size
    properties:
      size:
        type: integer
        description: Number of parts.
      ratio:
        type: number
      enabled:
        type: boolean
      port:
        x-kubernetes-int-or-string: true
      selector:
        type: object
        additionalProperties:
          type: string
      config:
        type: object
        x-kubernetes-preserve-unknown-fields: true
      parts:
        type: array
        items:
          type: object
          properties:
            partName:
              type: string
      template:
        type: object
        x-kubernetes-preserve-unknown-fields: true
        properties:
          image:
            type: string
required:
  - spec
"#;

    #[test]
    fn test_root_attributes() {
        let schema = resource_schema(&spec_from(WIDGET_SCHEMA, "Namespaced")).unwrap();
        let names: Vec<&str> = schema.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["id", "yaml", "metadata", "spec"]);
        assert!(schema.attribute("spec").unwrap().is_required());
        assert!(schema.attribute("id").unwrap().is_computed());
        assert!(schema.attribute_at("metadata.namespace").is_some());
    }

    #[test]
    fn test_type_mapping() {
        let schema = resource_schema(&spec_from(WIDGET_SCHEMA, "Cluster")).unwrap();
        let kind_of = |path: &str| schema.attribute_at(path).unwrap().kind.clone();
        assert_eq!(kind_of("spec.size"), AttributeKind::Int64);
        assert_eq!(kind_of("spec.ratio"), AttributeKind::Float64);
        assert_eq!(kind_of("spec.enabled"), AttributeKind::Bool);
        assert_eq!(kind_of("spec.port"), AttributeKind::String);
        assert_eq!(
            kind_of("spec.selector"),
            AttributeKind::Map(Box::new(AttributeKind::String))
        );
        assert_eq!(kind_of("spec.config"), AttributeKind::Dynamic);
        assert_eq!(kind_of("spec.template.image"), AttributeKind::String);
        assert_eq!(kind_of("spec.parts.part_name"), AttributeKind::String);
        assert!(schema.attribute_at("metadata.namespace").is_none());
    }

    #[test]
    fn test_names_and_requirements() {
        let schema = resource_schema(&spec_from(WIDGET_SCHEMA, "Namespaced")).unwrap();
        let size = schema.attribute_at("spec.size").unwrap();
        assert!(size.is_required());
        assert_eq!(size.description, "Number of parts.");
        let part_name = schema.attribute_at("spec.parts.part_name").unwrap();
        assert_eq!(part_name.json_name, "partName");
        assert_eq!(part_name.requirement, Requirement::Optional);
    }

    #[test]
    fn test_duplicate_attribute_names_are_rejected() {
        let schema = r#"type: object
properties:
  spec:
    type: object
    properties:
      fooBar:
        type: string
      foo_bar:
        type: string
"#;
        let err = resource_schema(&spec_from(schema, "Namespaced")).unwrap_err();
        assert!(matches!(err, GeneratorError::DuplicateAttribute(name, path) if name == "foo_bar" && path == "spec"));
    }
}
