use crate::errors::GeneratorError;
use crate::naming::{module_name, struct_name, type_name_suffix};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceDefinition, CustomResourceDefinitionVersion, JSONSchemaProps,
};
use log::warn;

const NAMESPACED_SCOPE: &str = "Namespaced";

/// One served version of a CRD, the unit that becomes one resource type.
#[derive(Debug, Clone)]
pub struct CrdVersionSpec {
    pub crd_name: String,
    pub group: String,
    pub kind: String,
    pub version: String,
    pub namespaced: bool,
    pub deprecated: bool,
    pub schema: JSONSchemaProps,
}

impl CrdVersionSpec {
    pub fn from_crd(
        crd: &CustomResourceDefinition,
        version: &str,
    ) -> Result<CrdVersionSpec, GeneratorError> {
        let crd_name = get_crd_name(crd)?;
        let crd_version = crd
            .spec
            .versions
            .iter()
            .find(|v| v.name == version)
            .ok_or_else(|| GeneratorError::UnknownVersion(crd_name.clone(), version.to_string()))?;
        from_version(crd, &crd_name, crd_version)
    }

    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    pub fn type_name_suffix(&self) -> String {
        type_name_suffix(&self.group, &self.kind, &self.version)
    }

    pub fn struct_name(&self) -> String {
        struct_name(&self.type_name_suffix())
    }

    pub fn module_name(&self) -> String {
        module_name(&self.group, &self.kind, &self.version)
    }

    pub fn description(&self) -> String {
        match self.schema.description.as_deref() {
            Some(description) if !description.trim().is_empty() => description.to_string(),
            _ => format!("{} ({}) manifest", self.kind, self.api_version()),
        }
    }
}

/// Every served version of the CRD. Versions without a schema cannot be
/// mapped and are skipped.
pub fn served_versions(
    crd: &CustomResourceDefinition,
) -> Result<Vec<CrdVersionSpec>, GeneratorError> {
    let crd_name = get_crd_name(crd)?;
    let mut specs = Vec::new();
    for version in crd.spec.versions.iter().filter(|v| v.served) {
        match from_version(crd, &crd_name, version) {
            Ok(spec) => specs.push(spec),
            Err(GeneratorError::MissingSchema(name, version)) => {
                warn!(
                    "Skipping version {} of CRD {}: no openAPIV3Schema is defined",
                    version, name
                );
            }
            Err(e) => return Err(e),
        }
    }
    Ok(specs)
}

fn get_crd_name(crd: &CustomResourceDefinition) -> Result<String, GeneratorError> {
    if crd.spec.group.is_empty() {
        return Err(GeneratorError::InvalidCrd("spec.group is empty".to_string()));
    }
    if crd.spec.names.kind.is_empty() {
        return Err(GeneratorError::InvalidCrd(format!(
            "spec.names.kind is empty for group {}",
            crd.spec.group
        )));
    }
    Ok(crd
        .metadata
        .name
        .clone()
        .unwrap_or_else(|| format!("{}.{}", crd.spec.names.plural, crd.spec.group)))
}

fn from_version(
    crd: &CustomResourceDefinition,
    crd_name: &str,
    version: &CustomResourceDefinitionVersion,
) -> Result<CrdVersionSpec, GeneratorError> {
    let schema = version
        .schema
        .as_ref()
        .and_then(|s| s.open_api_v3_schema.clone())
        .ok_or_else(|| GeneratorError::MissingSchema(crd_name.to_string(), version.name.clone()))?;
    Ok(CrdVersionSpec {
        crd_name: crd_name.to_string(),
        group: crd.spec.group.clone(),
        kind: crd.spec.names.kind.clone(),
        version: version.name.clone(),
        namespaced: crd.spec.scope == NAMESPACED_SCOPE,
        deprecated: version.deprecated.unwrap_or(false),
        schema,
    })
}
