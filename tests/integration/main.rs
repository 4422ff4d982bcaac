//! End-to-end tests against a server bound on an ephemeral port.
//!
//! Run with: cargo test --test integration

use std::net::SocketAddr;

use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::Value;
use tokio::net::TcpListener;

use pipeline_showcase::api::{create_router, AppState};

/// Spawn the service on 127.0.0.1 with a random port.
async fn spawn_server(environment: &str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = create_router(AppState::new(environment));

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

async fn get_json(addr: SocketAddr, path: &str) -> (StatusCode, Value) {
    let response = reqwest::get(format!("http://{}{}", addr, path))
        .await
        .unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn test_landing_page() {
    let addr = spawn_server("production").await;

    let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.unwrap();
    assert!(body.contains("CI/CD Pipeline Success!"));
    assert!(body.contains("Secure image storage in ECR"));
}

#[tokio::test]
async fn test_health_uptime_never_decreases() {
    let addr = spawn_server("staging").await;

    let (status, first) = get_json(addr, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["status"], "healthy");
    assert_eq!(first["environment"], "staging");

    let (_, second) = get_json(addr, "/health").await;
    let first_uptime = first["uptime"].as_f64().unwrap();
    let second_uptime = second["uptime"].as_f64().unwrap();
    assert!(first_uptime >= 0.0);
    assert!(second_uptime >= first_uptime);
}

#[tokio::test]
async fn test_info_fields() {
    let addr = spawn_server("production").await;

    let (status, body) = get_json(addr, "/info").await;
    assert_eq!(status, StatusCode::OK);

    for field in [
        "projectName",
        "description",
        "version",
        "author",
        "deploymentDate",
        "uptime",
        "runtimeVersion",
        "platform",
        "memory",
    ] {
        assert!(body.get(field).is_some(), "missing field {}", field);
    }
    assert_eq!(body["description"], "Automated deployment pipeline using GitHub Actions");
}

#[tokio::test]
async fn test_tech_is_stable_across_calls() {
    let addr = spawn_server("production").await;

    let (_, first) = get_json(addr, "/tech").await;
    let (_, second) = get_json(addr, "/tech").await;

    assert_eq!(first["technologies"].as_object().unwrap().len(), 7);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_fresh_process_features() {
    let addr = spawn_server("production").await;

    let (status, body) = get_json(addr, "/features").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({
            "features": [
                "Fully automated CI/CD pipeline",
                "Containerized application deployment",
                "Zero-downtime deployments",
                "Auto-scaling with ECS Fargate",
                "Load balanced traffic distribution",
                "Secure image storage in ECR"
            ],
            "total": 6
        })
    );
}

#[tokio::test]
async fn test_unknown_route() {
    let addr = spawn_server("production").await;

    let (status, body) = get_json(addr, "/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    assert!(body["message"].as_str().unwrap().contains("/nonexistent"));
    assert_eq!(body["availableRoutes"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_non_get_method_is_not_found() {
    let addr = spawn_server("production").await;

    let response = reqwest::Client::new()
        .delete(format!("http://{}/features", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Route /features not found");
}
