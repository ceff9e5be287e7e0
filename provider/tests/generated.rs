use crd_provider::generated::{
    ElasticacheServicesK8sAwsCacheSubnetGroupV1alpha1Manifest,
    KafkaStrimziIoKafkaTopicV1beta2Manifest,
};
use crd_provider::{
    id_attribute, metadata_attribute, render_typed, yaml_attribute, Attribute, AttributeKind,
    CrdManifest, DynamicManifestResource, ManifestResource, Provider, Resource, ResourceSchema,
};
use crd_templator::{
    generate_mod_source, generate_modules, parse_crds, read_crds, served_versions,
    GenerateOptions,
};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::path::PathBuf;

fn crd_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../crds")
}

async fn dynamic_provider() -> Provider {
    let mut provider = Provider::new("k8s");
    let count = provider.load_crds(&crd_dir()).await.unwrap();
    assert_eq!(count, 2);
    provider
}

#[tokio::test]
async fn test_generated_schemas_match_crds() {
    let typed = Provider::with_generated("k8s");
    let dynamic = dynamic_provider().await;
    assert_eq!(typed.type_names(), dynamic.type_names());
    for (type_name, schema) in typed.schemas() {
        assert_eq!(
            Some(&schema),
            dynamic.schemas().get(&type_name),
            "schema of {} differs",
            type_name
        );
    }
}

#[tokio::test]
async fn test_generated_modules_cover_every_served_version() {
    let crds = read_crds(&crd_dir()).await.unwrap();
    let modules = crd_templator::generate_modules(&crds, &GenerateOptions::default()).unwrap();
    let suffixes: Vec<&str> = modules.iter().map(|m| m.type_name_suffix.as_str()).collect();
    assert_eq!(
        suffixes,
        vec![
            ElasticacheServicesK8sAwsCacheSubnetGroupV1alpha1Manifest::TYPE_NAME_SUFFIX,
            KafkaStrimziIoKafkaTopicV1beta2Manifest::TYPE_NAME_SUFFIX,
        ]
    );
    for crd in &crds {
        for spec in served_versions(crd).unwrap() {
            assert!(modules.iter().any(|m| m.struct_name == spec.struct_name()));
        }
    }
}

#[tokio::test]
async fn test_checked_in_modules_match_generator_output() {
    let crds = read_crds(&crd_dir()).await.unwrap();
    let options = GenerateOptions::default();
    let modules = generate_modules(&crds, &options).unwrap();
    let generated_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/generated");
    for module in &modules {
        let checked_in = std::fs::read_to_string(generated_dir.join(module.file_name())).unwrap();
        assert_eq!(checked_in, module.source, "{} is stale", module.file_name());
    }
    let checked_in_mod = std::fs::read_to_string(generated_dir.join("mod.rs")).unwrap();
    assert_eq!(checked_in_mod, generate_mod_source(&modules, &options).unwrap());
}

#[tokio::test]
async fn test_typed_and_dynamic_yaml_match() {
    let typed = Provider::with_generated("k8s");
    let dynamic = dynamic_provider().await;
    let configs = [
        (
            "k8s_kafka_strimzi_io_kafka_topic_v1beta2_manifest",
            json!({
                "metadata": {
                    "name": "orders",
                    "namespace": "kafka",
                    "labels": {"app": "shop", "strimzi.io/cluster": "main"}
                },
                "spec": {
                    "partitions": 3,
                    "replicas": 2,
                    "topic_name": "orders.v1",
                    "config": {"cleanup.policy": "compact", "segment.bytes": 1073741824}
                }
            }),
        ),
        (
            "k8s_elasticache_services_k8s_aws_cache_subnet_group_v1alpha1_manifest",
            json!({
                "metadata": {"name": "cache-subnets"},
                "spec": {
                    "cache_subnet_group_name": "cache-subnets",
                    "cache_subnet_group_description": "Subnets for the cache",
                    "subnet_refs": [{"from": {"name": "private-a"}}, {"from": {"name": "private-b"}}],
                    "tags": [{"key": "team", "value": "payments"}]
                }
            }),
        ),
    ];
    for (type_name, config) in configs {
        let typed_yaml = typed.get(type_name).unwrap().render(&config).unwrap();
        let dynamic_yaml = dynamic.get(type_name).unwrap().render(&config).unwrap();
        assert_eq!(typed_yaml, dynamic_yaml);
    }
}

#[test]
fn test_render_typed_model() {
    let manifest: ElasticacheServicesK8sAwsCacheSubnetGroupV1alpha1Manifest =
        serde_json::from_value(json!({
            "metadata": {"name": "cache-subnets", "namespace": "ack-system"},
            "spec": {
                "cache_subnet_group_name": "cache-subnets",
                "cache_subnet_group_description": "Subnets for the cache",
                "tags": [{"key": "team", "value": "payments"}]
            }
        }))
        .unwrap();
    let expected = r#"apiVersion: elasticache.services.k8s.aws/v1alpha1
kind: CacheSubnetGroup
metadata:
  name: cache-subnets
  namespace: ack-system
spec:
  cacheSubnetGroupDescription: Subnets for the cache
  cacheSubnetGroupName: cache-subnets
  tags:
    - key: team
      value: payments
"#;
    assert_eq!(render_typed(&manifest).unwrap(), expected);
}

const GAUGE_CRD: &str = r#"
apiVersion: apiextensions.k8s.io/v1
kind: CustomResourceDefinition
metadata:
  name: gauges.example.com
spec:
  group: example.com
  names:
    kind: Gauge
    plural: gauges
  scope: Namespaced
  versions:
    - name: v1
      served: true
      storage: true
      schema:
        openAPIV3Schema:
          type: object
          properties:
            spec:
              type: object
              properties:
                threshold:
                  type: number
                ratios:
                  type: array
                  items:
                    type: number
"#;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct ExampleComGaugeV1Manifest {
    metadata: ExampleComGaugeV1ManifestMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    spec: Option<ExampleComGaugeV1ManifestSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct ExampleComGaugeV1ManifestMetadata {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    labels: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    annotations: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct ExampleComGaugeV1ManifestSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ratios: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    threshold: Option<f64>,
}

impl CrdManifest for ExampleComGaugeV1Manifest {
    const API_VERSION: &'static str = "example.com/v1";
    const KIND: &'static str = "Gauge";
    const TYPE_NAME_SUFFIX: &'static str = "example_com_gauge_v1_manifest";

    fn schema() -> ResourceSchema {
        ResourceSchema::new(
            "Gauge (example.com/v1) manifest",
            vec![
                id_attribute(),
                yaml_attribute(),
                metadata_attribute(true),
                Attribute::object(
                    "spec",
                    vec![
                        Attribute::list("ratios", AttributeKind::Float64),
                        Attribute::float64("threshold"),
                    ],
                ),
            ],
        )
    }
}

#[test]
fn test_typed_and_dynamic_floats_match() {
    let crds = parse_crds(GAUGE_CRD, "gauge.yaml").unwrap();
    let spec = served_versions(&crds[0]).unwrap().remove(0);
    let dynamic = DynamicManifestResource::from_spec(&spec).unwrap();
    let typed = ManifestResource::<ExampleComGaugeV1Manifest>::new();
    assert_eq!(typed.schema(), dynamic.schema());

    let config = json!({
        "metadata": {"name": "latency"},
        "spec": {"threshold": 2, "ratios": [1, 0.5]}
    });
    let typed_yaml = typed.render(&config).unwrap();
    assert_eq!(typed_yaml, dynamic.render(&config).unwrap());
    assert!(typed_yaml.contains("threshold: 2.0\n"));
}
