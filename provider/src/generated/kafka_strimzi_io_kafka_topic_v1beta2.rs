// Code generated by crd-templator from kafkatopics.kafka.strimzi.io. DO NOT EDIT.
#![allow(unused_imports)]

use crate::{
    id_attribute, metadata_attribute, object_of, yaml_attribute, Attribute, AttributeKind,
    CrdManifest, ResourceSchema, Validator,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KafkaStrimziIoKafkaTopicV1beta2Manifest {
    pub metadata: KafkaStrimziIoKafkaTopicV1beta2ManifestMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<KafkaStrimziIoKafkaTopicV1beta2ManifestSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KafkaStrimziIoKafkaTopicV1beta2ManifestMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KafkaStrimziIoKafkaTopicV1beta2ManifestSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partitions: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i64>,
    #[serde(rename(serialize = "topicName"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<String>,
}

impl CrdManifest for KafkaStrimziIoKafkaTopicV1beta2Manifest {
    const API_VERSION: &'static str = "kafka.strimzi.io/v1beta2";
    const KIND: &'static str = "KafkaTopic";
    const TYPE_NAME_SUFFIX: &'static str = "kafka_strimzi_io_kafka_topic_v1beta2_manifest";

    fn schema() -> ResourceSchema {
        ResourceSchema::new(
            "KafkaTopic (kafka.strimzi.io/v1beta2) manifest",
            vec![
                id_attribute(),
                yaml_attribute(),
                metadata_attribute(true),
                Attribute::object(
                    "spec",
                    vec![
                        Attribute::dynamic("config")
                            .description("The topic configuration."),
                        Attribute::int64("partitions")
                            .description("The number of partitions the topic should have. This cannot be decreased after topic creation. When absent this will default to the broker configuration for `num.partitions`."),
                        Attribute::int64("replicas")
                            .description("The number of replicas the topic should have. When absent this will default to the broker configuration for `default.replication.factor`."),
                        Attribute::string("topic_name")
                            .json_name("topicName")
                            .description("The name of the topic. When absent this will default to the metadata.name of the topic. It is recommended to not set this unless the topic name is not a valid Kubernetes resource name."),
                    ],
                )
                    .description("The specification of the topic."),
            ],
        )
    }
}
