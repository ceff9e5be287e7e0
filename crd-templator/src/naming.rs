use crd_utils::{sanitize_segment, to_snake_case, to_type_ident};

/// Type name without the provider prefix, e.g.
/// `kafka_strimzi_io_kafka_topic_v1beta2_manifest`.
pub fn type_name_suffix(group: &str, kind: &str, version: &str) -> String {
    format!("{}_manifest", module_name(group, kind, version))
}

pub fn module_name(group: &str, kind: &str, version: &str) -> String {
    let parts: Vec<String> = [
        sanitize_segment(group),
        sanitize_segment(&to_snake_case(kind)),
        sanitize_segment(version),
    ]
    .into_iter()
    .filter(|p| !p.is_empty())
    .collect();
    parts.join("_")
}

pub fn struct_name(type_name_suffix: &str) -> String {
    to_type_ident(type_name_suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_type_name_suffix() {
        assert_eq!(
            type_name_suffix("kafka.strimzi.io", "KafkaTopic", "v1beta2"),
            "kafka_strimzi_io_kafka_topic_v1beta2_manifest"
        );
        assert_eq!(
            type_name_suffix("elasticache.services.k8s.aws", "CacheSubnetGroup", "v1alpha1"),
            "elasticache_services_k8s_aws_cache_subnet_group_v1alpha1_manifest"
        );
    }

    #[test]
    fn test_core_group_is_omitted() {
        assert_eq!(module_name("", "ConfigMap", "v1"), "config_map_v1");
    }

    #[test]
    fn test_struct_name() {
        assert_eq!(
            struct_name("elasticache_services_k8s_aws_cache_subnet_group_v1alpha1_manifest"),
            "ElasticacheServicesK8sAwsCacheSubnetGroupV1alpha1Manifest"
        );
    }
}
