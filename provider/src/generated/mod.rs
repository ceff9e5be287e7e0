// Code generated by crd-templator. DO NOT EDIT.

pub mod elasticache_services_k8s_aws_cache_subnet_group_v1alpha1;
pub mod kafka_strimzi_io_kafka_topic_v1beta2;

use crate::{ManifestResource, Provider};

pub use elasticache_services_k8s_aws_cache_subnet_group_v1alpha1::ElasticacheServicesK8sAwsCacheSubnetGroupV1alpha1Manifest;
pub use kafka_strimzi_io_kafka_topic_v1beta2::KafkaStrimziIoKafkaTopicV1beta2Manifest;

/// Registers every generated manifest resource with the provider.
pub fn register_all(provider: &mut Provider) {
    provider.register(ManifestResource::<ElasticacheServicesK8sAwsCacheSubnetGroupV1alpha1Manifest>::new());
    provider.register(ManifestResource::<KafkaStrimziIoKafkaTopicV1beta2Manifest>::new());
}
