#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use customer_api::database::MemoryCustomerGateway;
use customer_api::{app, AppState};

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Router backed by a fresh in-memory store
pub fn test_router() -> Router {
    let state = AppState::new(Arc::new(MemoryCustomerGateway::new()));
    app(state, Duration::from_secs(5))
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> Result<TestResponse> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::ORIGIN, "http://localhost:3000");

    let req = match body {
        Some(payload) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            builder.body(Body::from(serde_json::to_vec(&payload)?))?
        }
        None => builder.body(Body::empty())?,
    };

    send_request(router, req).await
}

pub async fn send_request(router: &Router, req: Request<Body>) -> Result<TestResponse> {
    let response = router.clone().oneshot(req).await.context("route request")?;
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .context("read response body")?;

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).context("parse response body")?
    };
    Ok(TestResponse { status, headers, body })
}

/// Create a customer and return its id
pub async fn create(router: &Router, customer: Value) -> Result<i64> {
    let res = send(router, Method::POST, "/api/newcustomer", Some(customer)).await?;
    anyhow::ensure!(res.status == StatusCode::OK, "create failed: {} {}", res.status, res.body);
    res.body["id"].as_i64().context("create response missing id")
}
