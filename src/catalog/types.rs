//! Static record types exposed by the showcase endpoints.

use serde::Serialize;
use utoipa::ToSchema;

/// Project metadata, fixed at process start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    /// Human readable project name.
    pub project_name: String,
    /// One-line project description.
    pub description: String,
    /// Deployed version.
    pub version: String,
    /// Project author.
    pub author: String,
    /// ISO-8601 timestamp of process start.
    pub deployment_date: String,
}

/// Technology used for each part of the pipeline.
///
/// Seven categories, one field each, so the serialized key set cannot change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechStack {
    pub cicd: String,
    pub containerization: String,
    pub orchestration: String,
    pub registry: String,
    pub load_balancer: String,
    pub iam: String,
    pub runtime: String,
}

/// Ordered feature descriptions, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FeatureList(pub Vec<String>);

impl FeatureList {
    /// Number of features.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate features in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
