use serde::{Deserialize, Serialize};

/// The value type of a resource attribute.
///
/// `Object` carries its nested attributes, so a list of objects is
/// `List(Box::new(Object(..)))` and a map of objects is `Map(Box::new(Object(..)))`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "element", rename_all = "snake_case")]
pub enum AttributeKind {
    String,
    Int64,
    Float64,
    Bool,
    Dynamic,
    List(Box<AttributeKind>),
    Map(Box<AttributeKind>),
    Object(Vec<Attribute>),
}

impl AttributeKind {
    pub fn type_label(&self) -> String {
        match self {
            AttributeKind::String => "string".to_string(),
            AttributeKind::Int64 => "int64".to_string(),
            AttributeKind::Float64 => "float64".to_string(),
            AttributeKind::Bool => "bool".to_string(),
            AttributeKind::Dynamic => "dynamic".to_string(),
            AttributeKind::List(elem) => format!("list({})", elem.type_label()),
            AttributeKind::Map(elem) => format!("map({})", elem.type_label()),
            AttributeKind::Object(_) => "object".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    Required,
    Optional,
    Computed,
}

/// Checks applied on top of the type system. Only the Kubernetes metadata
/// rules are expressed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validator {
    KubernetesName,
    KubernetesNamespace,
    Labels,
    Annotations,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    /// Key used in the rendered manifest.
    pub json_name: String,
    pub kind: AttributeKind,
    pub requirement: Requirement,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

impl Attribute {
    pub fn new(name: &str, kind: AttributeKind) -> Self {
        Attribute {
            name: name.to_string(),
            json_name: name.to_string(),
            kind,
            requirement: Requirement::Optional,
            description: String::new(),
            validators: vec![],
        }
    }

    pub fn string(name: &str) -> Self {
        Attribute::new(name, AttributeKind::String)
    }

    pub fn int64(name: &str) -> Self {
        Attribute::new(name, AttributeKind::Int64)
    }

    pub fn float64(name: &str) -> Self {
        Attribute::new(name, AttributeKind::Float64)
    }

    pub fn bool(name: &str) -> Self {
        Attribute::new(name, AttributeKind::Bool)
    }

    pub fn dynamic(name: &str) -> Self {
        Attribute::new(name, AttributeKind::Dynamic)
    }

    pub fn list(name: &str, element: AttributeKind) -> Self {
        Attribute::new(name, AttributeKind::List(Box::new(element)))
    }

    pub fn map(name: &str, element: AttributeKind) -> Self {
        Attribute::new(name, AttributeKind::Map(Box::new(element)))
    }

    pub fn object(name: &str, attributes: Vec<Attribute>) -> Self {
        Attribute::new(name, AttributeKind::Object(attributes))
    }

    pub fn required(mut self) -> Self {
        self.requirement = Requirement::Required;
        self
    }

    pub fn optional(mut self) -> Self {
        self.requirement = Requirement::Optional;
        self
    }

    pub fn computed(mut self) -> Self {
        self.requirement = Requirement::Computed;
        self
    }

    pub fn json_name(mut self, json_name: &str) -> Self {
        self.json_name = json_name.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn validate(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }

    pub fn is_computed(&self) -> bool {
        self.requirement == Requirement::Computed
    }
}

/// Element type of a `List`/`Map` of objects, built from nested attributes.
pub fn object_of(attributes: Vec<Attribute>) -> AttributeKind {
    AttributeKind::Object(attributes)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSchema {
    pub description: String,
    pub attributes: Vec<Attribute>,
}

impl ResourceSchema {
    pub fn new(description: &str, attributes: Vec<Attribute>) -> Self {
        ResourceSchema {
            description: description.to_string(),
            attributes,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Looks up a nested attribute by dotted path, descending through objects
    /// and through the element type of lists and maps.
    pub fn attribute_at(&self, path: &str) -> Option<&Attribute> {
        let mut parts = path.split('.');
        let mut current = self.attribute(parts.next()?)?;
        for part in parts {
            let nested = match &current.kind {
                AttributeKind::Object(attrs) => attrs,
                AttributeKind::List(elem) | AttributeKind::Map(elem) => match elem.as_ref() {
                    AttributeKind::Object(attrs) => attrs,
                    _ => return None,
                },
                _ => return None,
            };
            current = nested.iter().find(|a| a.name == part)?;
        }
        Some(current)
    }
}

pub const ID_DESCRIPTION: &str = "Timestamp-derived identifier of the rendered manifest. Changes every time the manifest is rendered.";
pub const YAML_DESCRIPTION: &str = "The generated manifest in YAML format.";

pub fn id_attribute() -> Attribute {
    Attribute::string("id").computed().description(ID_DESCRIPTION)
}

pub fn yaml_attribute() -> Attribute {
    Attribute::string("yaml").computed().description(YAML_DESCRIPTION)
}

/// Kubernetes object metadata. Cluster-scoped kinds have no `namespace`.
pub fn metadata_attribute(namespaced: bool) -> Attribute {
    let mut attributes = vec![Attribute::string("name")
        .required()
        .description("Unique identifier for this object, typically chosen by the user. Must follow the Kubernetes naming rules.")
        .validate(Validator::KubernetesName)];
    if namespaced {
        attributes.push(
            Attribute::string("namespace")
                .description("Namespace of this object. Must be a valid DNS label.")
                .validate(Validator::KubernetesNamespace),
        );
    }
    attributes.push(
        Attribute::map("labels", AttributeKind::String)
            .description("Keys and values that can be used to organize and categorize objects.")
            .validate(Validator::Labels),
    );
    attributes.push(
        Attribute::map("annotations", AttributeKind::String)
            .description("Unstructured key value map stored with the object that may be set by external tools.")
            .validate(Validator::Annotations),
    );
    Attribute::object("metadata", attributes)
        .required()
        .description("Data that helps uniquely identify the object.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_schema() -> ResourceSchema {
        ResourceSchema::new(
            "sample",
            vec![
                Attribute::string("id").computed(),
                Attribute::object(
                    "spec",
                    vec![
                        Attribute::string("topic_name").json_name("topicName"),
                        Attribute::list(
                            "tags",
                            object_of(vec![Attribute::string("key").required()]),
                        ),
                    ],
                )
                .required(),
            ],
        )
    }

    #[test]
    fn test_attribute_lookup_by_path() {
        let schema = sample_schema();
        assert_eq!(
            schema.attribute_at("spec.topic_name").unwrap().json_name,
            "topicName"
        );
        assert!(schema.attribute_at("spec.tags.key").unwrap().is_required());
        assert!(schema.attribute_at("spec.missing").is_none());
        assert!(schema.attribute_at("id.nested").is_none());
    }

    #[test]
    fn test_type_labels() {
        let kind = AttributeKind::Map(Box::new(AttributeKind::List(Box::new(
            AttributeKind::Int64,
        ))));
        assert_eq!(kind.type_label(), "map(list(int64))");
    }

    #[test]
    fn test_metadata_namespace_only_when_namespaced() {
        let namespaced = metadata_attribute(true);
        let cluster = metadata_attribute(false);
        let names = |attr: &Attribute| match &attr.kind {
            AttributeKind::Object(attrs) => attrs.iter().map(|a| a.name.clone()).collect::<Vec<_>>(),
            _ => vec![],
        };
        assert_eq!(names(&namespaced), vec!["name", "namespace", "labels", "annotations"]);
        assert_eq!(names(&cluster), vec!["name", "labels", "annotations"]);
        assert!(namespaced.is_required());
    }

    #[test]
    fn test_builder_defaults_to_optional() {
        let attr = Attribute::bool("enabled").description("Whether it is on");
        assert_eq!(attr.requirement, Requirement::Optional);
        assert_eq!(attr.json_name, "enabled");
        assert!(!attr.is_computed());
    }
}
