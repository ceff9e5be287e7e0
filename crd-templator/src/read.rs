use crate::errors::GeneratorError;
use crd_utils::split_documents;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use log::{debug, warn};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use walkdir::WalkDir;

const CRD_KIND: &str = "CustomResourceDefinition";

/// Reads every CRD from a file, or from all `.yaml`/`.yml` files below a
/// directory.
pub async fn read_crds(path: &Path) -> Result<Vec<CustomResourceDefinition>, GeneratorError> {
    if path.is_dir() {
        read_crds_from_dir(path).await
    } else {
        read_crds_from_file(path).await
    }
}

pub async fn read_crds_from_file(
    file_path: &Path,
) -> Result<Vec<CustomResourceDefinition>, GeneratorError> {
    let source = file_path.display().to_string();
    let mut file = File::open(file_path)
        .await
        .map_err(|e| GeneratorError::Io(source.clone(), e))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .await
        .map_err(|e| GeneratorError::Io(source.clone(), e))?;
    parse_crds(&contents, &source)
}

pub async fn read_crds_from_dir(dir: &Path) -> Result<Vec<CustomResourceDefinition>, GeneratorError> {
    let mut crds = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            GeneratorError::Io(dir.display().to_string(), std::io::Error::other(e))
        })?;
        let path = entry.path();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "yaml" || ext == "yml");
        if entry.file_type().is_file() && is_yaml {
            debug!("Reading CRDs from {}", path.display());
            crds.extend(read_crds_from_file(path).await?);
        }
    }
    Ok(crds)
}

/// Parses a multi-document YAML stream. Documents of another kind are skipped.
pub fn parse_crds(
    contents: &str,
    source: &str,
) -> Result<Vec<CustomResourceDefinition>, GeneratorError> {
    let mut crds = Vec::new();
    for document in split_documents(contents) {
        let value: serde_yaml::Value = serde_yaml::from_str(&document)
            .map_err(|e| GeneratorError::Yaml(source.to_string(), e))?;
        if value.is_null() {
            continue;
        }
        let kind = value.get("kind").and_then(|k| k.as_str()).unwrap_or("");
        if kind != CRD_KIND {
            warn!("Skipping document of kind '{}' in {}", kind, source);
            continue;
        }
        let crd: CustomResourceDefinition = serde_yaml::from_value(value)
            .map_err(|e| GeneratorError::Yaml(source.to_string(), e))?;
        crds.push(crd);
    }
    Ok(crds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const WIDGET_CRD: &str = r#"
apiVersion: apiextensions.k8s.io/v1
kind: CustomResourceDefinition
metadata:
  name: widgets.example.com
spec:
  group: example.com
  names:
    kind: Widget
    plural: widgets
  scope: Namespaced
  versions:
    - name: v1
      served: true
      storage: true
      schema:
        openAPIV3Schema:
          type: object
"#;

    #[test]
    fn test_parse_skips_other_kinds() {
        let contents = format!(
            "apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: x\n---{}---\n",
            WIDGET_CRD
        );
        let crds = parse_crds(&contents, "inline").unwrap();
        assert_eq!(crds.len(), 1);
        assert_eq!(crds[0].spec.names.kind, "Widget");
    }

    #[test]
    fn test_parse_skips_comment_only_header() {
        let contents = format!(
            "# Licensed under the Apache License, Version 2.0\n# Source: crds/widgets.yaml\n---{}",
            WIDGET_CRD
        );
        let crds = parse_crds(&contents, "header.yaml").unwrap();
        assert_eq!(crds.len(), 1);
        assert_eq!(crds[0].spec.names.kind, "Widget");
    }

    #[test]
    fn test_parse_reports_source_on_error() {
        let err = parse_crds("kind: [unclosed", "broken.yaml").unwrap_err();
        assert!(err.to_string().contains("broken.yaml"));
    }

    #[tokio::test]
    async fn test_read_crds_from_dir_only_reads_yaml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("widget.yaml"), WIDGET_CRD).unwrap();
        std::fs::write(dir.path().join("README.md"), "# not a crd").unwrap();
        let crds = read_crds(dir.path()).await.unwrap();
        assert_eq!(crds.len(), 1);
    }
}
