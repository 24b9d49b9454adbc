// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Router manifest rendering: the factory, its templates and selector helpers.

mod assets;
pub mod factory;
pub mod selector;

pub use factory::Factory;

use crate::error::Result;
use k8s_openapi::api::apps::v1::DaemonSet;
use k8s_openapi::api::core::v1::{Namespace, Service, ServiceAccount};
use k8s_openapi::api::rbac::v1::{ClusterRole, ClusterRoleBinding};
use serde_json::{json, Value};

/// Every object rendered for one ClusterIngress, in apply order
#[derive(Debug, Clone, PartialEq)]
pub struct RouterManifests {
    pub namespace: Namespace,
    pub service_account: ServiceAccount,
    pub cluster_role: ClusterRole,
    pub cluster_role_binding: ClusterRoleBinding,
    pub daemon_set: DaemonSet,
    pub service_internal: Service,
    /// Only present when the ClusterIngress is exposed through a cloud load balancer
    pub service_cloud: Option<Service>,
}

impl RouterManifests {
    /// Objects as generic documents, carrying their apiVersion and kind
    pub fn documents(&self) -> Result<Vec<Value>> {
        let mut docs = vec![
            serde_json::to_value(&self.namespace)?,
            serde_json::to_value(&self.service_account)?,
            serde_json::to_value(&self.cluster_role)?,
            serde_json::to_value(&self.cluster_role_binding)?,
            serde_json::to_value(&self.daemon_set)?,
            serde_json::to_value(&self.service_internal)?,
        ];
        if let Some(svc) = &self.service_cloud {
            docs.push(serde_json::to_value(svc)?);
        }
        Ok(docs)
    }

    /// Multi-document YAML stream
    pub fn to_yaml(&self) -> Result<String> {
        let docs = self
            .documents()?
            .iter()
            .map(serde_yaml::to_string)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(docs.join("---\n"))
    }

    /// A `v1` List wrapping every object
    pub fn to_json(&self) -> Result<String> {
        let list = json!({
            "apiVersion": "v1",
            "kind": "List",
            "items": self.documents()?,
        });
        Ok(serde_json::to_string_pretty(&list)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::types::cluster_ingress::ClusterIngress;

    fn make_manifests(cloud: bool) -> RouterManifests {
        let factory = Factory::new(Config::new(
            "quay.io/openshift/router:latest",
            Some("apps.example.com".to_string()),
        ));
        let mut ci: ClusterIngress = factory.default_cluster_ingress().unwrap();
        if !cloud {
            ci.spec.high_availability = None;
        }
        factory.router_manifests(&ci).unwrap()
    }

    fn kinds(docs: &[Value]) -> Vec<&str> {
        docs.iter().filter_map(|d| d["kind"].as_str()).collect()
    }

    #[test]
    fn test_documents_in_apply_order() {
        let docs = make_manifests(true).documents().unwrap();
        assert_eq!(
            kinds(&docs),
            vec![
                "Namespace",
                "ServiceAccount",
                "ClusterRole",
                "ClusterRoleBinding",
                "DaemonSet",
                "Service",
                "Service"
            ]
        );
    }

    #[test]
    fn test_documents_without_cloud_service() {
        let docs = make_manifests(false).documents().unwrap();
        assert_eq!(docs.len(), 6);
        assert_eq!(docs[5]["metadata"]["name"], "router-internal-default");
    }

    #[test]
    fn test_to_yaml_separates_documents() {
        let yaml = make_manifests(true).to_yaml().unwrap();

        assert_eq!(yaml.matches("---\n").count(), 6);
        assert!(yaml.contains("kind: DaemonSet"));
        assert!(yaml.contains("image: quay.io/openshift/router:latest"));
        assert!(yaml.contains("type: LoadBalancer"));
    }

    #[test]
    fn test_to_json_is_list() {
        let json = make_manifests(false).to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["kind"], "List");
        assert_eq!(value["items"].as_array().map(Vec::len), Some(6));
    }
}
