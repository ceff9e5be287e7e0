use crd_defs::{Attribute, AttributeKind, ResourceSchema};
use crd_utils::{to_field_ident, to_type_ident};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDef {
    pub ident: String,
    pub attribute_name: String,
    pub json_name: String,
    pub rust_type: String,
    pub required: bool,
    /// `#[serde(..)]` lines to put above the field.
    pub serde_attributes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructDef {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

/// Maps a resource schema to Rust structs, root first. Computed attributes
/// are not part of the model. Nested object types are named after their
/// parent type plus the property name.
pub fn struct_model(root_name: &str, schema: &ResourceSchema) -> Vec<StructDef> {
    let mut builder = StructBuilder {
        structs: Vec::new(),
        used_names: HashSet::new(),
    };
    builder.used_names.insert(root_name.to_string());
    builder.add_struct(root_name.to_string(), &schema.attributes);
    builder.structs
}

struct StructBuilder {
    structs: Vec<StructDef>,
    used_names: HashSet<String>,
}

impl StructBuilder {
    fn add_struct(&mut self, name: String, attributes: &[Attribute]) {
        let index = self.structs.len();
        self.structs.push(StructDef {
            name: name.clone(),
            fields: vec![],
        });
        let fields = attributes
            .iter()
            .filter(|a| !a.is_computed())
            .map(|a| self.field(&name, a))
            .collect();
        self.structs[index].fields = fields;
    }

    fn field(&mut self, parent: &str, attribute: &Attribute) -> FieldDef {
        let ident = to_field_ident(&attribute.name);
        let type_name = format!("{}{}", parent, to_type_ident(&attribute.json_name));
        let inner = self.rust_type(&type_name, &attribute.kind);
        let required = attribute.is_required();
        let rust_type = if required {
            inner
        } else {
            format!("Option<{}>", inner)
        };

        let mut serde_attributes = Vec::new();
        let mut renames = Vec::new();
        if attribute.json_name != attribute.name {
            renames.push(format!("serialize = {:?}", attribute.json_name));
        }
        if ident.trim_start_matches("r#") != attribute.name {
            renames.push(format!("deserialize = {:?}", attribute.name));
        }
        if !renames.is_empty() {
            serde_attributes.push(format!("#[serde(rename({}))]", renames.join(", ")));
        }
        if !required {
            serde_attributes
                .push("#[serde(default, skip_serializing_if = \"Option::is_none\")]".to_string());
        }

        FieldDef {
            ident,
            attribute_name: attribute.name.clone(),
            json_name: attribute.json_name.clone(),
            rust_type,
            required,
            serde_attributes,
        }
    }

    fn rust_type(&mut self, type_name: &str, kind: &AttributeKind) -> String {
        match kind {
            AttributeKind::String => "String".to_string(),
            AttributeKind::Int64 => "i64".to_string(),
            AttributeKind::Float64 => "f64".to_string(),
            AttributeKind::Bool => "bool".to_string(),
            AttributeKind::Dynamic => "serde_json::Value".to_string(),
            AttributeKind::List(element) => format!("Vec<{}>", self.rust_type(type_name, element)),
            AttributeKind::Map(element) => {
                format!("BTreeMap<String, {}>", self.rust_type(type_name, element))
            }
            AttributeKind::Object(attributes) => {
                let name = self.unique_name(type_name);
                self.add_struct(name.clone(), attributes);
                name
            }
        }
    }

    fn unique_name(&mut self, candidate: &str) -> String {
        let mut name = candidate.to_string();
        let mut counter = 2;
        while !self.used_names.insert(name.clone()) {
            name = format!("{}{}", candidate, counter);
            counter += 1;
        }
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crd_defs::{id_attribute, metadata_attribute, object_of, yaml_attribute};
    use pretty_assertions::assert_eq;

    fn schema() -> ResourceSchema {
        ResourceSchema::new(
            "widget",
            vec![
                id_attribute(),
                yaml_attribute(),
                metadata_attribute(false),
                Attribute::object(
                    "spec",
                    vec![
                        Attribute::int64("size").required(),
                        Attribute::string("type"),
                        Attribute::list(
                            "parts",
                            object_of(vec![Attribute::string("part_name").json_name("partName")]),
                        ),
                        Attribute::map("selector", AttributeKind::String),
                        Attribute::dynamic("config"),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn test_struct_names_and_order() {
        let structs = struct_model("WidgetV1Manifest", &schema());
        let names: Vec<&str> = structs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "WidgetV1Manifest",
                "WidgetV1ManifestMetadata",
                "WidgetV1ManifestSpec",
                "WidgetV1ManifestSpecParts"
            ]
        );
        let root_fields: Vec<&str> = structs[0].fields.iter().map(|f| f.ident.as_str()).collect();
        assert_eq!(root_fields, vec!["metadata", "spec"]);
    }

    #[test]
    fn test_field_types() {
        let structs = struct_model("WidgetV1Manifest", &schema());
        let spec = &structs[2];
        let types: Vec<(&str, &str)> = spec
            .fields
            .iter()
            .map(|f| (f.ident.as_str(), f.rust_type.as_str()))
            .collect();
        assert_eq!(
            types,
            vec![
                ("size", "i64"),
                ("r#type", "Option<String>"),
                ("parts", "Option<Vec<WidgetV1ManifestSpecParts>>"),
                ("selector", "Option<BTreeMap<String, String>>"),
                ("config", "Option<serde_json::Value>"),
            ]
        );
        assert_eq!(structs[0].fields[0].rust_type, "WidgetV1ManifestMetadata");
    }

    #[test]
    fn test_serde_attributes() {
        let structs = struct_model("WidgetV1Manifest", &schema());
        let part_name = &structs[3].fields[0];
        assert_eq!(
            part_name.serde_attributes,
            vec![
                "#[serde(rename(serialize = \"partName\"))]".to_string(),
                "#[serde(default, skip_serializing_if = \"Option::is_none\")]".to_string(),
            ]
        );
        let size = &structs[2].fields[0];
        assert!(size.serde_attributes.is_empty());
    }

    #[test]
    fn test_colliding_struct_names_get_suffix() {
        let schema = ResourceSchema::new(
            "collide",
            vec![
                Attribute::object("a_b", vec![Attribute::string("x")]).json_name("aB"),
                Attribute::object("ab", vec![Attribute::string("y")]).json_name("AB"),
            ],
        );
        let structs = struct_model("Root", &schema);
        let names: Vec<&str> = structs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Root", "RootAB", "RootAB2"]);
    }
}
