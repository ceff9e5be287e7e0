use crate::attributes::{crd_attributes, resource_schema};
use crate::crd::{served_versions, CrdVersionSpec};
use crate::errors::GeneratorError;
use crate::structs::struct_model;
use crd_defs::{Attribute, AttributeKind, Requirement};
use crd_utils::indent;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use log::{info, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};

const RESOURCE_TEMPLATE: &str = "resource.rs";
const MOD_TEMPLATE: &str = "mod.rs";

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Path of the crate that exports the runtime types, as seen from the
    /// generated code.
    pub crate_path: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            crate_path: "crate".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedModule {
    pub module_name: String,
    pub struct_name: String,
    pub type_name_suffix: String,
    pub source: String,
}

impl GeneratedModule {
    pub fn file_name(&self) -> String {
        format!("{}.rs", self.module_name)
    }
}

fn templates() -> Result<Tera, GeneratorError> {
    let mut tera = Tera::default();
    tera.add_raw_template(
        RESOURCE_TEMPLATE,
        include_str!("../templates/resource.rs.tera"),
    )?;
    tera.add_raw_template(MOD_TEMPLATE, include_str!("../templates/mod.rs.tera"))?;
    Ok(tera)
}

pub fn generate_resource_source(
    spec: &CrdVersionSpec,
    options: &GenerateOptions,
) -> Result<GeneratedModule, GeneratorError> {
    let tera = templates()?;
    let schema = resource_schema(spec)?;
    let root = spec.struct_name();
    let structs = struct_model(&root, &schema);
    let attributes_code = crd_attributes(spec)?
        .iter()
        .map(|a| format!("{},", render_attribute(a)))
        .collect::<Vec<String>>()
        .join("\n");

    let mut context = Context::new();
    context.insert("crd_name", &spec.crd_name);
    context.insert("crate_path", &options.crate_path);
    context.insert("structs", &structs);
    context.insert("root", &root);
    context.insert("api_version_literal", &format!("{:?}", spec.api_version()));
    context.insert("kind_literal", &format!("{:?}", spec.kind));
    context.insert(
        "type_suffix_literal",
        &format!("{:?}", spec.type_name_suffix()),
    );
    context.insert("description_literal", &format!("{:?}", schema.description));
    context.insert("namespaced", &spec.namespaced);
    context.insert("attributes_code", &indent(&attributes_code, 4));

    let source = tera.render(RESOURCE_TEMPLATE, &context)?;
    Ok(GeneratedModule {
        module_name: spec.module_name(),
        struct_name: root,
        type_name_suffix: spec.type_name_suffix(),
        source,
    })
}

pub fn generate_mod_source(
    modules: &[GeneratedModule],
    options: &GenerateOptions,
) -> Result<String, GeneratorError> {
    let tera = templates()?;
    let mut context = Context::new();
    context.insert("modules", modules);
    context.insert("crate_path", &options.crate_path);
    Ok(tera.render(MOD_TEMPLATE, &context)?)
}

/// Generates one module per served CRD version, sorted by module name. When
/// two CRDs produce the same module the later one wins.
pub fn generate_modules(
    crds: &[CustomResourceDefinition],
    options: &GenerateOptions,
) -> Result<Vec<GeneratedModule>, GeneratorError> {
    let mut modules = BTreeMap::new();
    for crd in crds {
        for spec in served_versions(crd)? {
            let module = generate_resource_source(&spec, options)?;
            if modules.contains_key(&module.module_name) {
                warn!(
                    "Module {} is generated more than once, keeping the last one",
                    module.module_name
                );
            }
            modules.insert(module.module_name.clone(), module);
        }
    }
    Ok(modules.into_values().collect())
}

/// Writes the generated modules plus `mod.rs` into `out_dir` and returns the
/// written paths.
pub async fn generate_to_dir(
    crds: &[CustomResourceDefinition],
    out_dir: &Path,
    options: &GenerateOptions,
) -> Result<Vec<PathBuf>, GeneratorError> {
    let modules = generate_modules(crds, options)?;
    let out = out_dir.display().to_string();
    tokio::fs::create_dir_all(out_dir)
        .await
        .map_err(|e| GeneratorError::Io(out.clone(), e))?;

    let mut written = Vec::new();
    for module in &modules {
        let path = out_dir.join(module.file_name());
        tokio::fs::write(&path, &module.source)
            .await
            .map_err(|e| GeneratorError::Io(path.display().to_string(), e))?;
        info!("Generated {} ({})", path.display(), module.type_name_suffix);
        written.push(path);
    }

    let mod_path = out_dir.join("mod.rs");
    tokio::fs::write(&mod_path, generate_mod_source(&modules, options)?)
        .await
        .map_err(|e| GeneratorError::Io(mod_path.display().to_string(), e))?;
    written.push(mod_path);
    Ok(written)
}

/// Renders an attribute as the builder expression that recreates it.
pub fn render_attribute(attribute: &Attribute) -> String {
    let name = &attribute.name;
    let mut code = match &attribute.kind {
        AttributeKind::String => format!("Attribute::string({:?})", name),
        AttributeKind::Int64 => format!("Attribute::int64({:?})", name),
        AttributeKind::Float64 => format!("Attribute::float64({:?})", name),
        AttributeKind::Bool => format!("Attribute::bool({:?})", name),
        AttributeKind::Dynamic => format!("Attribute::dynamic({:?})", name),
        AttributeKind::List(element) => {
            format!("Attribute::list({:?}, {})", name, render_kind(element))
        }
        AttributeKind::Map(element) => {
            format!("Attribute::map({:?}, {})", name, render_kind(element))
        }
        AttributeKind::Object(attributes) => format!(
            "Attribute::object(\n    {:?},\n    vec![\n{}\n    ],\n)",
            name,
            indent(&render_attributes(attributes), 2)
        ),
    };
    if attribute.json_name != attribute.name {
        code.push_str(&format!("\n    .json_name({:?})", attribute.json_name));
    }
    match attribute.requirement {
        Requirement::Required => code.push_str("\n    .required()"),
        Requirement::Computed => code.push_str("\n    .computed()"),
        Requirement::Optional => {}
    }
    if !attribute.description.is_empty() {
        code.push_str(&format!("\n    .description({:?})", attribute.description));
    }
    for validator in &attribute.validators {
        code.push_str(&format!("\n    .validate(Validator::{:?})", validator));
    }
    code
}

fn render_attributes(attributes: &[Attribute]) -> String {
    attributes
        .iter()
        .map(|a| format!("{},", render_attribute(a)))
        .collect::<Vec<String>>()
        .join("\n")
}

fn render_kind(kind: &AttributeKind) -> String {
    match kind {
        AttributeKind::String => "AttributeKind::String".to_string(),
        AttributeKind::Int64 => "AttributeKind::Int64".to_string(),
        AttributeKind::Float64 => "AttributeKind::Float64".to_string(),
        AttributeKind::Bool => "AttributeKind::Bool".to_string(),
        AttributeKind::Dynamic => "AttributeKind::Dynamic".to_string(),
        AttributeKind::List(element) => {
            format!("AttributeKind::List(Box::new({}))", render_kind(element))
        }
        AttributeKind::Map(element) => {
            format!("AttributeKind::Map(Box::new({}))", render_kind(element))
        }
        AttributeKind::Object(attributes) => format!(
            "object_of(vec![\n{}\n])",
            indent(&render_attributes(attributes), 1)
        ),
    }
}
