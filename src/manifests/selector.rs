// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Label selector conversions used when rendering router manifests

use crate::error::{ManifestError, Result};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, LabelSelectorRequirement};
use std::collections::BTreeMap;

/// Render a label selector in the `key=value,key in (a,b)` form understood by the router.
///
/// Requirements are sorted by key and joined with commas. An empty selector
/// renders as an empty string.
pub fn selector_to_string(selector: &LabelSelector) -> Result<String> {
    let mut requirements: Vec<(&str, String)> = Vec::new();

    if let Some(labels) = &selector.match_labels {
        for (key, value) in labels {
            requirements.push((key.as_str(), format!("{}={}", key, value)));
        }
    }

    for expr in selector.match_expressions.iter().flatten() {
        requirements.push((expr.key.as_str(), render_expression(expr)?));
    }

    // Stable sort keeps matchLabels ahead of expressions sharing a key
    requirements.sort_by(|a, b| a.0.cmp(b.0));

    Ok(requirements
        .into_iter()
        .map(|(_, rendered)| rendered)
        .collect::<Vec<_>>()
        .join(","))
}

fn render_expression(expr: &LabelSelectorRequirement) -> Result<String> {
    let mut values: Vec<&str> = expr
        .values
        .iter()
        .flatten()
        .map(String::as_str)
        .collect();
    values.sort_unstable();

    match expr.operator.as_str() {
        "In" | "NotIn" => {
            if values.is_empty() {
                return Err(ManifestError::InvalidSelector(format!(
                    "operator {} on key {} requires at least one value",
                    expr.operator, expr.key
                )));
            }
            let op = if expr.operator == "In" { "in" } else { "notin" };
            Ok(format!("{} {} ({})", expr.key, op, values.join(",")))
        }
        "Exists" | "DoesNotExist" => {
            if !values.is_empty() {
                return Err(ManifestError::InvalidSelector(format!(
                    "operator {} on key {} does not take values",
                    expr.operator, expr.key
                )));
            }
            if expr.operator == "Exists" {
                Ok(expr.key.clone())
            } else {
                Ok(format!("!{}", expr.key))
            }
        }
        other => Err(ManifestError::InvalidSelector(format!(
            "unsupported operator {} on key {}",
            other, expr.key
        ))),
    }
}

/// Flatten a label selector into an exact-match label map, as used for pod node selectors.
///
/// Only `matchLabels` and single-valued `In` expressions can be expressed this way.
pub fn selector_as_map(selector: &LabelSelector) -> Result<BTreeMap<String, String>> {
    let mut map = selector.match_labels.clone().unwrap_or_default();

    for expr in selector.match_expressions.iter().flatten() {
        match (expr.operator.as_str(), expr.values.as_deref()) {
            ("In", Some([value])) => {
                map.insert(expr.key.clone(), value.clone());
            }
            ("In", _) => {
                return Err(ManifestError::InvalidSelector(format!(
                    "operator In on key {} must have exactly one value to form a map",
                    expr.key
                )))
            }
            (other, _) => {
                return Err(ManifestError::InvalidSelector(format!(
                    "operator {} on key {} cannot be converted to a map",
                    other, expr.key
                )))
            }
        }
    }

    Ok(map)
}
