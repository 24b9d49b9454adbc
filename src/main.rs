// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Context, Result};
use kube::ResourceExt;
use std::{env, fs};
use tracing::info;
use tracing_subscriber::EnvFilter;

use router_manifests::config::Config;
use router_manifests::manifests::Factory;
use router_manifests::types::cluster_ingress::ClusterIngress;

enum OutputFormat {
    Yaml,
    Json,
}

impl OutputFormat {
    fn from_env() -> Result<Self> {
        match env::var("OUTPUT_FORMAT").as_deref() {
            Err(_) | Ok("yaml") => Ok(OutputFormat::Yaml),
            Ok("json") => Ok(OutputFormat::Json),
            Ok(other) => bail!("Unsupported OUTPUT_FORMAT {}, expected yaml or json", other),
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries manifests
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: router_image={}, default_ingress_domain={:?}",
        config.router_image, config.default_ingress_domain
    );
    let format = OutputFormat::from_env()?;

    let factory = Factory::new(config);

    let ci = match env::var("CLUSTER_INGRESS_FILE") {
        Ok(path) => {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read ClusterIngress from {}", path))?;
            serde_yaml::from_str::<ClusterIngress>(&contents)
                .with_context(|| format!("Failed to parse ClusterIngress in {}", path))?
        }
        Err(_) => factory.default_cluster_ingress()?,
    };
    info!("Rendering router manifests for ClusterIngress {}", ci.name_any());

    let manifests = factory.router_manifests(&ci)?;
    let output = match format {
        OutputFormat::Yaml => manifests.to_yaml()?,
        OutputFormat::Json => manifests.to_json()?,
    };
    println!("{}", output);

    Ok(())
}
