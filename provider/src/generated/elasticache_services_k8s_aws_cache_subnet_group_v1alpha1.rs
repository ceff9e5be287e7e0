// Code generated by crd-templator from cachesubnetgroups.elasticache.services.k8s.aws. DO NOT EDIT.
#![allow(unused_imports)]

use crate::{
    id_attribute, metadata_attribute, object_of, yaml_attribute, Attribute, AttributeKind,
    CrdManifest, ResourceSchema, Validator,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElasticacheServicesK8sAwsCacheSubnetGroupV1alpha1Manifest {
    pub metadata: ElasticacheServicesK8sAwsCacheSubnetGroupV1alpha1ManifestMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<ElasticacheServicesK8sAwsCacheSubnetGroupV1alpha1ManifestSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElasticacheServicesK8sAwsCacheSubnetGroupV1alpha1ManifestMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElasticacheServicesK8sAwsCacheSubnetGroupV1alpha1ManifestSpec {
    #[serde(rename(serialize = "cacheSubnetGroupDescription"))]
    pub cache_subnet_group_description: String,
    #[serde(rename(serialize = "cacheSubnetGroupName"))]
    pub cache_subnet_group_name: String,
    #[serde(rename(serialize = "subnetRefs"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_refs: Option<Vec<ElasticacheServicesK8sAwsCacheSubnetGroupV1alpha1ManifestSpecSubnetRefs>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ElasticacheServicesK8sAwsCacheSubnetGroupV1alpha1ManifestSpecTags>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElasticacheServicesK8sAwsCacheSubnetGroupV1alpha1ManifestSpecSubnetRefs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<ElasticacheServicesK8sAwsCacheSubnetGroupV1alpha1ManifestSpecSubnetRefsFrom>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElasticacheServicesK8sAwsCacheSubnetGroupV1alpha1ManifestSpecSubnetRefsFrom {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElasticacheServicesK8sAwsCacheSubnetGroupV1alpha1ManifestSpecTags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl CrdManifest for ElasticacheServicesK8sAwsCacheSubnetGroupV1alpha1Manifest {
    const API_VERSION: &'static str = "elasticache.services.k8s.aws/v1alpha1";
    const KIND: &'static str = "CacheSubnetGroup";
    const TYPE_NAME_SUFFIX: &'static str = "elasticache_services_k8s_aws_cache_subnet_group_v1alpha1_manifest";

    fn schema() -> ResourceSchema {
        ResourceSchema::new(
            "CacheSubnetGroup is the Schema for the CacheSubnetGroups API",
            vec![
                id_attribute(),
                yaml_attribute(),
                metadata_attribute(true),
                Attribute::object(
                    "spec",
                    vec![
                        Attribute::string("cache_subnet_group_description")
                            .json_name("cacheSubnetGroupDescription")
                            .required()
                            .description("A description for the cache subnet group."),
                        Attribute::string("cache_subnet_group_name")
                            .json_name("cacheSubnetGroupName")
                            .required()
                            .description("A name for the cache subnet group. This value is stored as a lowercase string."),
                        Attribute::list("subnet_refs", object_of(vec![
                            Attribute::object(
                                "from",
                                vec![
                                    Attribute::string("name"),
                                ],
                            )
                                .description("AWSResourceReference provides all the values necessary to reference another k8s resource for finding the identifier(Id/ARN/Name)"),
                        ]))
                            .json_name("subnetRefs"),
                        Attribute::list("tags", object_of(vec![
                            Attribute::string("key"),
                            Attribute::string("value"),
                        ]))
                            .description("A list of tags to be added to this resource. A tag is a key-value pair."),
                    ],
                )
                    .description("CacheSubnetGroupSpec defines the desired state of CacheSubnetGroup."),
            ],
        )
    }
}
