// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Static object templates compiled into the binary

use crate::error::{ManifestError, Result};
use serde::de::DeserializeOwned;

/// An embedded YAML template and the name used to report parse failures
pub(crate) struct Asset {
    pub name: &'static str,
    pub source: &'static str,
}

pub(crate) const NAMESPACE: Asset = Asset {
    name: "router namespace",
    source: include_str!("../../assets/router/namespace.yaml"),
};

pub(crate) const SERVICE_ACCOUNT: Asset = Asset {
    name: "router service account",
    source: include_str!("../../assets/router/service-account.yaml"),
};

pub(crate) const CLUSTER_ROLE: Asset = Asset {
    name: "router cluster role",
    source: include_str!("../../assets/router/cluster-role.yaml"),
};

pub(crate) const CLUSTER_ROLE_BINDING: Asset = Asset {
    name: "router cluster role binding",
    source: include_str!("../../assets/router/cluster-role-binding.yaml"),
};

pub(crate) const DAEMON_SET: Asset = Asset {
    name: "router daemonset",
    source: include_str!("../../assets/router/daemonset.yaml"),
};

pub(crate) const SERVICE_INTERNAL: Asset = Asset {
    name: "router internal service",
    source: include_str!("../../assets/router/service-internal.yaml"),
};

pub(crate) const SERVICE_CLOUD: Asset = Asset {
    name: "router cloud service",
    source: include_str!("../../assets/router/service-cloud.yaml"),
};

pub(crate) const DEFAULT_CLUSTER_INGRESS: Asset = Asset {
    name: "default cluster ingress",
    source: include_str!("../../assets/router/cluster-ingress-default.yaml"),
};

impl Asset {
    /// Parse the template into a fresh object
    pub fn load<T: DeserializeOwned>(&self) -> Result<T> {
        parse(self.name, self.source)
    }

    pub fn missing(&self, field: &'static str) -> ManifestError {
        ManifestError::MissingField {
            template: self.name,
            field,
        }
    }
}

fn parse<T: DeserializeOwned>(template: &'static str, source: &str) -> Result<T> {
    serde_yaml::from_str(source).map_err(|source| ManifestError::Template { template, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::Namespace;

    #[test]
    fn test_malformed_template_reports_name() {
        let err = parse::<Namespace>("broken", "metadata: [unclosed").unwrap_err();

        assert!(matches!(err, ManifestError::Template { template: "broken", .. }));
        assert!(err.to_string().contains("broken template"));
    }

    #[test]
    fn test_missing_field_error() {
        let err = DAEMON_SET.missing("containers");
        assert_eq!(err.to_string(), "Template router daemonset is missing containers");
    }
}
