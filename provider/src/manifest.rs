use crate::resource::Resource;
use async_trait::async_trait;
use crd_defs::{ManifestError, ResourceSchema};
use crd_utils::to_yaml;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;

/// Implemented by the generated CRD models. Fields deserialize from attribute
/// names and serialize to the CRD's JSON names.
pub trait CrdManifest: Serialize + DeserializeOwned + Send + Sync + 'static {
    const API_VERSION: &'static str;
    const KIND: &'static str;
    const TYPE_NAME_SUFFIX: &'static str;

    fn schema() -> ResourceSchema;
}

#[derive(Serialize)]
struct Stamped<'a, T: Serialize> {
    #[serde(rename = "apiVersion")]
    api_version: &'a str,
    kind: &'a str,
    #[serde(flatten)]
    manifest: &'a T,
}

/// Marshals a typed model with its `apiVersion`/`kind` in front.
pub fn render_typed<T: CrdManifest>(manifest: &T) -> Result<String, ManifestError> {
    Ok(to_yaml(&Stamped {
        api_version: T::API_VERSION,
        kind: T::KIND,
        manifest,
    })?)
}

pub struct ManifestResource<T> {
    _model: PhantomData<fn() -> T>,
}

impl<T: CrdManifest> ManifestResource<T> {
    pub fn new() -> Self {
        ManifestResource {
            _model: PhantomData,
        }
    }
}

impl<T: CrdManifest> Default for ManifestResource<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: CrdManifest> Resource for ManifestResource<T> {
    fn type_name_suffix(&self) -> String {
        T::TYPE_NAME_SUFFIX.to_string()
    }

    fn schema(&self) -> ResourceSchema {
        T::schema()
    }

    fn api_version(&self) -> String {
        T::API_VERSION.to_string()
    }

    fn kind(&self) -> String {
        T::KIND.to_string()
    }

    fn render(&self, config: &Value) -> Result<String, ManifestError> {
        let manifest: T = serde_json::from_value(config.clone())?;
        render_typed(&manifest)
    }
}
