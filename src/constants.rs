// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Namespace the router workload runs in
pub const ROUTER_NAMESPACE: &str = "openshift-ingress";

/// Namespace holding the operator's ClusterIngress resources
pub const OPERATOR_NAMESPACE: &str = "openshift-ingress-operator";

/// Name of the ClusterIngress created when none is supplied
pub const DEFAULT_CLUSTER_INGRESS_NAME: &str = "default";

/// Kubernetes annotation keys
pub mod annotations {
    /// Asks the service CA to issue a serving certificate into the named secret
    pub const SERVING_CERT_SECRET: &str = "service.alpha.openshift.io/serving-cert-secret-name";
}

/// Label key tying router pods to their ClusterIngress
pub const ROUTER_LABEL: &str = "router";

/// Environment variables set on the router container
pub mod env {
    pub const NAMESPACE_LABELS: &str = "NAMESPACE_LABELS";
    pub const ROUTE_LABELS: &str = "ROUTE_LABELS";
    pub const ROUTER_SERVICE_NAME: &str = "ROUTER_SERVICE_NAME";
    pub const ROUTER_CANONICAL_HOSTNAME: &str = "ROUTER_CANONICAL_HOSTNAME";
}

/// Name of the default certificate secret for a ClusterIngress
pub fn default_certificate_secret_name(cluster_ingress_name: &str) -> String {
    format!("router-certs-{}", cluster_ingress_name)
}

/// Name of the router daemonset and cloud service for a ClusterIngress
pub fn router_name(cluster_ingress_name: &str) -> String {
    format!("router-{}", cluster_ingress_name)
}

/// Name of the internal router service for a ClusterIngress
pub fn router_internal_name(cluster_ingress_name: &str) -> String {
    format!("router-internal-{}", cluster_ingress_name)
}
