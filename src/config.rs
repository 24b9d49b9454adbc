// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Context, Result};
use std::env;

/// Manifest factory configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Container image used for the router daemonset
    pub router_image: String,
    /// Ingress domain applied to the default ClusterIngress
    pub default_ingress_domain: Option<String>,
}

impl Config {
    pub fn new(router_image: impl Into<String>, default_ingress_domain: Option<String>) -> Self {
        Config {
            router_image: router_image.into(),
            default_ingress_domain,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let router_image =
            lookup("ROUTER_IMAGE").context("ROUTER_IMAGE environment variable not set")?;
        if router_image.trim().is_empty() {
            bail!("ROUTER_IMAGE environment variable is empty");
        }
        let default_ingress_domain = lookup("DEFAULT_INGRESS_DOMAIN").filter(|d| !d.is_empty());

        Ok(Config {
            router_image,
            default_ingress_domain,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_with_all_vars() {
        let config = Config::from_lookup(lookup_from(&[
            ("ROUTER_IMAGE", "quay.io/openshift/router:latest"),
            ("DEFAULT_INGRESS_DOMAIN", "apps.example.com"),
        ]))
        .unwrap();

        assert_eq!(config.router_image, "quay.io/openshift/router:latest");
        assert_eq!(config.default_ingress_domain.as_deref(), Some("apps.example.com"));
    }

    #[test]
    fn test_from_lookup_without_domain() {
        let config =
            Config::from_lookup(lookup_from(&[("ROUTER_IMAGE", "router:latest")])).unwrap();
        assert_eq!(config.default_ingress_domain, None);
    }

    #[test]
    fn test_from_lookup_empty_domain_is_none() {
        let config = Config::from_lookup(lookup_from(&[
            ("ROUTER_IMAGE", "router:latest"),
            ("DEFAULT_INGRESS_DOMAIN", ""),
        ]))
        .unwrap();
        assert_eq!(config.default_ingress_domain, None);
    }

    #[test]
    fn test_from_lookup_missing_image() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("ROUTER_IMAGE"));
    }

    #[test]
    fn test_from_lookup_empty_image() {
        assert!(Config::from_lookup(lookup_from(&[("ROUTER_IMAGE", "  ")])).is_err());
    }
}
