use serde::{Deserialize, Serialize};

/// One resource block of a host configuration file.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ResourceConfig {
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
    pub values: serde_json::Value,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct HostConfig {
    #[serde(default)]
    pub resources: Vec<ResourceConfig>,
}
