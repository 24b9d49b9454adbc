// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Renders router objects from the embedded templates and a ClusterIngress

use crate::config::Config;
use crate::constants::{annotations, env, router_internal_name, router_name, ROUTER_LABEL};
use crate::error::Result;
use crate::manifests::assets::{self, Asset};
use crate::manifests::selector::{selector_as_map, selector_to_string};
use crate::manifests::RouterManifests;
use crate::types::cluster_ingress::ClusterIngress;
use k8s_openapi::api::apps::v1::DaemonSet;
use k8s_openapi::api::core::v1::{EnvVar, Namespace, Service, ServiceAccount};
use k8s_openapi::api::rbac::v1::{ClusterRole, ClusterRoleBinding};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::ResourceExt;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Builds router manifests for a fixed operator configuration.
///
/// Every producer parses its template afresh, so returned objects are owned
/// by the caller and calls never observe each other.
#[derive(Debug, Clone)]
pub struct Factory {
    config: Config,
}

impl Factory {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn router_namespace(&self) -> Result<Namespace> {
        assets::NAMESPACE.load()
    }

    pub fn router_service_account(&self) -> Result<ServiceAccount> {
        assets::SERVICE_ACCOUNT.load()
    }

    pub fn router_cluster_role(&self) -> Result<ClusterRole> {
        assets::CLUSTER_ROLE.load()
    }

    pub fn router_cluster_role_binding(&self) -> Result<ClusterRoleBinding> {
        assets::CLUSTER_ROLE_BINDING.load()
    }

    /// Render the router daemonset for a ClusterIngress
    #[instrument(skip(self, ci), fields(cluster_ingress = %ci.name_any()))]
    pub fn router_daemon_set(&self, ci: &ClusterIngress) -> Result<DaemonSet> {
        let asset = &assets::DAEMON_SET;
        let mut ds: DaemonSet = asset.load()?;
        let name = ci.name_any();
        let pod_labels = router_pod_labels(&name);

        ds.metadata.name = Some(router_name(&name));

        let spec = ds.spec.as_mut().ok_or_else(|| asset.missing("spec"))?;
        spec.selector = LabelSelector {
            match_labels: Some(pod_labels.clone()),
            match_expressions: None,
        };
        spec.template
            .metadata
            .get_or_insert_with(Default::default)
            .labels
            .get_or_insert_with(BTreeMap::new)
            .extend(pod_labels);

        let pod_spec = spec
            .template
            .spec
            .as_mut()
            .ok_or_else(|| asset.missing("pod spec"))?;

        let container = pod_spec
            .containers
            .first_mut()
            .ok_or_else(|| asset.missing("router container"))?;
        container.image = Some(self.config.router_image.clone());
        container
            .env
            .get_or_insert_with(Vec::new)
            .extend(self.router_env(ci)?);

        if let Some(node_selector) = node_selector(ci)? {
            pod_spec.node_selector = Some(node_selector);
        }

        let secret_name = ci.certificate_secret_name();
        let secret = pod_spec
            .volumes
            .iter_mut()
            .flatten()
            .find_map(|v| v.secret.as_mut())
            .ok_or_else(|| asset.missing("certificate secret volume"))?;
        secret.secret_name = Some(secret_name.clone());

        debug!(
            "Rendered router daemonset {} with certificate secret {}",
            router_name(&name),
            secret_name
        );
        Ok(ds)
    }

    /// Environment derived from the ClusterIngress, appended to the template's own
    fn router_env(&self, ci: &ClusterIngress) -> Result<Vec<EnvVar>> {
        let mut vars = vec![env_var(env::ROUTER_SERVICE_NAME, ci.name_any())];

        if let Some(domain) = &ci.spec.ingress_domain {
            vars.push(env_var(env::ROUTER_CANONICAL_HOSTNAME, domain.clone()));
        }

        let selectors = [
            (env::NAMESPACE_LABELS, ci.spec.namespace_selector.as_ref()),
            (env::ROUTE_LABELS, ci.spec.route_selector.as_ref()),
        ];
        for (key, selector) in selectors {
            let Some(selector) = selector else {
                continue;
            };
            let rendered = selector_to_string(selector)?;
            if !rendered.is_empty() {
                vars.push(env_var(key, rendered));
            }
        }

        Ok(vars)
    }

    /// Render the cluster-internal router service.
    ///
    /// The serving certificate annotation always names the default
    /// `router-certs-<name>` secret, even when the ClusterIngress overrides the
    /// certificate the router serves.
    #[instrument(skip(self, ci), fields(cluster_ingress = %ci.name_any()))]
    pub fn router_service_internal(&self, ci: &ClusterIngress) -> Result<Service> {
        let mut svc = router_service(&assets::SERVICE_INTERNAL, ci)?;
        svc.metadata.name = Some(router_internal_name(&ci.name_any()));
        svc.annotations_mut().insert(
            annotations::SERVING_CERT_SECRET.to_string(),
            ci.default_certificate_secret_name(),
        );

        debug!("Rendered internal router service {}", svc.name_any());
        Ok(svc)
    }

    /// Render the load balancer service exposing the router
    #[instrument(skip(self, ci), fields(cluster_ingress = %ci.name_any()))]
    pub fn router_service_cloud(&self, ci: &ClusterIngress) -> Result<Service> {
        let mut svc = router_service(&assets::SERVICE_CLOUD, ci)?;
        svc.metadata.name = Some(router_name(&ci.name_any()));

        debug!("Rendered cloud router service {}", svc.name_any());
        Ok(svc)
    }

    /// The ClusterIngress used when the cluster has none of its own
    pub fn default_cluster_ingress(&self) -> Result<ClusterIngress> {
        let mut ci: ClusterIngress = assets::DEFAULT_CLUSTER_INGRESS.load()?;
        ci.spec.ingress_domain = self.config.default_ingress_domain.clone();
        Ok(ci)
    }

    /// Render every object the router needs for a ClusterIngress
    #[instrument(skip(self, ci), fields(cluster_ingress = %ci.name_any()))]
    pub fn router_manifests(&self, ci: &ClusterIngress) -> Result<RouterManifests> {
        let service_cloud = if ci.is_cloud_exposed() {
            Some(self.router_service_cloud(ci)?)
        } else {
            debug!("ClusterIngress is not cloud exposed, skipping load balancer service");
            None
        };

        Ok(RouterManifests {
            namespace: self.router_namespace()?,
            service_account: self.router_service_account()?,
            cluster_role: self.router_cluster_role()?,
            cluster_role_binding: self.router_cluster_role_binding()?,
            daemon_set: self.router_daemon_set(ci)?,
            service_internal: self.router_service_internal(ci)?,
            service_cloud,
        })
    }
}

fn router_pod_labels(cluster_ingress_name: &str) -> BTreeMap<String, String> {
    BTreeMap::from([(ROUTER_LABEL.to_string(), router_name(cluster_ingress_name))])
}

fn env_var(name: &str, value: String) -> EnvVar {
    EnvVar {
        name: name.to_string(),
        value: Some(value),
        ..Default::default()
    }
}

/// Node selector requested by the ClusterIngress, if it names any labels
fn node_selector(ci: &ClusterIngress) -> Result<Option<BTreeMap<String, String>>> {
    let Some(selector) = ci
        .spec
        .node_placement
        .as_ref()
        .and_then(|p| p.node_selector.as_ref())
    else {
        return Ok(None);
    };

    let map = selector_as_map(selector)?;
    Ok((!map.is_empty()).then_some(map))
}

/// Load a service template and point it at the ClusterIngress's router pods
fn router_service(asset: &Asset, ci: &ClusterIngress) -> Result<Service> {
    let mut svc: Service = asset.load()?;
    let pod_labels = router_pod_labels(&ci.name_any());

    svc.labels_mut().extend(pod_labels.clone());
    svc.spec
        .as_mut()
        .ok_or_else(|| asset.missing("spec"))?
        .selector = Some(pod_labels);

    Ok(svc)
}
