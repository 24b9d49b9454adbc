// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to parse {template} template: {source}")]
    Template {
        template: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Template {template} is missing {field}")]
    MissingField {
        template: &'static str,
        field: &'static str,
    },

    #[error("Invalid label selector: {0}")]
    InvalidSelector(String),

    #[error("Failed to encode manifests as YAML: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("Failed to encode manifests as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ManifestError>;
