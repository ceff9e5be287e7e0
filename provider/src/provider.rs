use crate::dynamic::DynamicManifestResource;
use crate::errors::ProviderError;
use crate::generated;
use crate::resource::Resource;
use crate::validate::validate_config;
use crd_defs::{Diagnostics, ResourceSchema};
use crd_templator::{read_crds, served_versions};
use crd_utils::ProviderConfig;
use log::{info, warn};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Registry of manifest resource types, keyed by full type name.
pub struct Provider {
    name: String,
    resources: BTreeMap<String, Arc<dyn Resource>>,
}

impl Provider {
    pub fn new(name: &str) -> Self {
        Provider {
            name: name.to_string(),
            resources: BTreeMap::new(),
        }
    }

    /// Generated resources plus, when configured, the CRDs from `crd_dir`.
    pub async fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let mut provider = Provider::with_generated(&config.provider_name);
        if let Some(crd_dir) = &config.crd_dir {
            provider.load_crds(crd_dir).await?;
        }
        Ok(provider)
    }

    /// A provider with every checked-in generated resource registered.
    pub fn with_generated(name: &str) -> Self {
        let mut provider = Provider::new(name);
        generated::register_all(&mut provider);
        provider
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a resource. A resource with the same type name is replaced.
    pub fn register<R: Resource + 'static>(&mut self, resource: R) {
        let type_name = resource.type_name(&self.name);
        if self
            .resources
            .insert(type_name.clone(), Arc::new(resource))
            .is_some()
        {
            warn!("Resource type {} was registered twice, replacing it", type_name);
        }
    }

    /// Registers a dynamic resource for every served version of every CRD
    /// found at `path`. Returns the number of registered types.
    pub async fn load_crds(&mut self, path: &Path) -> Result<usize, ProviderError> {
        let crds = read_crds(path).await?;
        let mut count = 0;
        for crd in &crds {
            for spec in served_versions(crd)? {
                if spec.deprecated {
                    warn!("{} {} is deprecated", spec.kind, spec.api_version());
                }
                self.register(DynamicManifestResource::from_spec(&spec)?);
                count += 1;
            }
        }
        info!("Loaded {} resource types from {}", count, path.display());
        Ok(count)
    }

    pub fn get(&self, type_name: &str) -> Option<Arc<dyn Resource>> {
        self.resources.get(type_name).cloned()
    }

    pub fn type_names(&self) -> Vec<String> {
        self.resources.keys().cloned().collect()
    }

    pub fn schemas(&self) -> BTreeMap<String, ResourceSchema> {
        self.resources
            .iter()
            .map(|(name, resource)| (name.clone(), resource.schema()))
            .collect()
    }

    pub fn validate(&self, type_name: &str, config: &Value) -> Result<Diagnostics, ProviderError> {
        let resource = self
            .get(type_name)
            .ok_or_else(|| ProviderError::UnknownType(type_name.to_string()))?;
        Ok(validate_config(&resource.schema(), config))
    }
}
