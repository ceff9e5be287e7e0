use std::env;
use std::path::PathBuf;

pub const DEFAULT_PROVIDER_NAME: &str = "k8s";
pub const DEFAULT_STATE_FILE: &str = "crd-provider.tfstate.json";

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    /// Prefix of every resource type name, e.g. `k8s` in
    /// `k8s_kafka_strimzi_io_kafka_topic_v1beta2_manifest`.
    pub provider_name: String,
    pub crd_dir: Option<PathBuf>,
    pub state_path: PathBuf,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            provider_name: DEFAULT_PROVIDER_NAME.to_string(),
            crd_dir: None,
            state_path: PathBuf::from(DEFAULT_STATE_FILE),
        }
    }
}

impl ProviderConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ProviderConfig::default();
        ProviderConfig {
            provider_name: lookup("CRD_PROVIDER_NAME")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.provider_name),
            crd_dir: lookup("CRD_PROVIDER_CRD_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            state_path: lookup("CRD_PROVIDER_STATE")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.state_path),
        }
    }
}
