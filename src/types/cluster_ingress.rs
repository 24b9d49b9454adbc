// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::{CustomResource, ResourceExt};
use serde::{Deserialize, Serialize};

use crate::constants::default_certificate_secret_name;

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[kube(group = "ingress.openshift.io", version = "v1alpha1", kind = "ClusterIngress")]
#[kube(namespaced)]
#[kube(derive = "PartialEq")]
#[serde(rename_all = "camelCase")]
pub struct ClusterIngressSpec {
    /// Domain the router serves by default, also used as its canonical hostname
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_placement: Option<NodePlacement>,
    /// Secret holding the certificate served for routes without their own
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_certificate_secret: Option<String>,
    /// Restricts the namespaces whose routes this router admits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace_selector: Option<LabelSelector>,
    /// Restricts the routes this router admits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_selector: Option<LabelSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_availability: Option<ClusterIngressHighAvailability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsupported_extensions: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NodePlacement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<LabelSelector>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterIngressHighAvailability {
    #[serde(rename = "type")]
    pub ha_type: ClusterIngressHaType,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, schemars::JsonSchema)]
pub enum ClusterIngressHaType {
    /// Router is exposed through a cloud load balancer service
    Cloud,
    /// Exposure is left to the cluster administrator
    UserDefined,
}

impl ClusterIngress {
    /// Name of the certificate secret derived from the ClusterIngress name,
    /// regardless of any explicit override
    pub fn default_certificate_secret_name(&self) -> String {
        default_certificate_secret_name(&self.name_any())
    }

    /// Secret the router serves by default: the explicit override if set,
    /// otherwise the derived default name
    pub fn certificate_secret_name(&self) -> String {
        self.spec
            .default_certificate_secret
            .clone()
            .unwrap_or_else(|| self.default_certificate_secret_name())
    }

    /// Check if the router should be exposed through a cloud load balancer
    pub fn is_cloud_exposed(&self) -> bool {
        self.spec
            .high_availability
            .as_ref()
            .is_some_and(|ha| ha.ha_type == ClusterIngressHaType::Cloud)
    }
}
