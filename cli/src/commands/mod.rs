pub mod apply;
pub mod destroy;
pub mod generate;
pub mod schema;
pub mod show;

use anyhow::Context;
use crd_defs::HostConfig;
use std::path::Path;

/// Reads a host configuration. YAML is accepted, and so is JSON.
pub async fn read_host_config(path: &Path) -> anyhow::Result<HostConfig> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: HostConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_read_yaml_host_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("main.yaml");
        std::fs::write(
            &path,
            r#"resources:
  - type: k8s_kafka_strimzi_io_kafka_topic_v1beta2_manifest
    name: orders
    values:
      metadata:
        name: orders
      spec:
        partitions: 3
"#,
        )
        .unwrap();
        let config = read_host_config(&path).await.unwrap();
        assert_eq!(config.resources.len(), 1);
        assert_eq!(config.resources[0].name, "orders");
        assert_eq!(
            config.resources[0].values,
            json!({"metadata": {"name": "orders"}, "spec": {"partitions": 3}})
        );
    }

    #[tokio::test]
    async fn test_missing_host_config() {
        let dir = tempdir().unwrap();
        let err = read_host_config(&dir.path().join("missing.yaml"))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}
