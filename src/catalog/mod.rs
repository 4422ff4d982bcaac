//! Static showcase records: project metadata, tech stack and features.
//!
//! Everything here is built once at startup and shared read-only.

pub mod types;

pub use types::{FeatureList, ProjectInfo, TechStack};

use time::OffsetDateTime;

use crate::probe::iso_timestamp;

/// Service name reported by `/health`.
pub const SERVICE_NAME: &str = "CI/CD Pipeline Demo";

/// Description attached to the `/tech` payload.
pub const TECH_DESCRIPTION: &str = "Complete technology stack used in this CI/CD pipeline project";

const FEATURES: [&str; 6] = [
    "Fully automated CI/CD pipeline",
    "Containerized application deployment",
    "Zero-downtime deployments",
    "Auto-scaling with ECS Fargate",
    "Load balanced traffic distribution",
    "Secure image storage in ECR",
];

/// All static records served by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub project: ProjectInfo,
    pub tech: TechStack,
    pub features: FeatureList,
}

impl Catalog {
    /// Build the catalog, stamping `deployed_at` as the deployment date.
    pub fn new(deployed_at: OffsetDateTime) -> Self {
        Self {
            project: ProjectInfo {
                project_name: "CI/CD Pipeline to AWS ECS".to_string(),
                description: "Automated deployment pipeline using GitHub Actions".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                author: "DevOps Engineer".to_string(),
                deployment_date: iso_timestamp(deployed_at),
            },
            tech: TechStack {
                cicd: "GitHub Actions".to_string(),
                containerization: "Docker".to_string(),
                orchestration: "AWS ECS (Fargate)".to_string(),
                registry: "Amazon ECR".to_string(),
                load_balancer: "Application Load Balancer".to_string(),
                iam: "AWS IAM".to_string(),
                runtime: "Rust + Axum".to_string(),
            },
            features: FeatureList(FEATURES.iter().map(|f| f.to_string()).collect()),
        }
    }
}
