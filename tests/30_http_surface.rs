mod common;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::json;

#[tokio::test]
async fn malformed_json_is_bad_request() -> Result<()> {
    let router = common::test_router();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/newcustomer")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"first_name\": "))?;
    let res = common::send_request(&router, req).await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["code"], "INVALID_JSON");

    let req = Request::builder()
        .method(Method::PUT)
        .uri("/api/customer/1")
        .body(Body::from("not json"))?;
    let res = common::send_request(&router, req).await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn body_is_decoded_whatever_the_content_type() -> Result<()> {
    let router = common::test_router();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/newcustomer")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(r#"{"first_name":"Ada"}"#))?;
    let res = common::send_request(&router, req).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["id"], 1);

    Ok(())
}

#[tokio::test]
async fn responses_are_json_with_open_cors() -> Result<()> {
    let router = common::test_router();
    common::create(&router, json!({"first_name": "Ada"})).await?;

    for (method, uri) in [
        (Method::GET, "/api/customer"),
        (Method::GET, "/api/customer/1"),
        (Method::GET, "/api/customer/404"),
    ] {
        let res = common::send(&router, method, uri, None).await?;
        let content_type = res.headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok());
        assert_eq!(content_type, Some("application/json"), "{}", uri);
        let origin = res.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).and_then(|v| v.to_str().ok());
        assert_eq!(origin, Some("*"), "{}", uri);
    }

    Ok(())
}

#[tokio::test]
async fn options_short_circuits_every_route() -> Result<()> {
    let router = common::test_router();

    for uri in [
        "/api/customer",
        "/api/customer/1",
        "/api/newcustomer",
        "/api/deletecustomer/1",
        "/api/searchcustomer",
    ] {
        for with_preflight_headers in [true, false] {
            let mut builder = Request::builder()
                .method(Method::OPTIONS)
                .uri(uri)
                .header(header::ORIGIN, "http://localhost:3000");
            if with_preflight_headers {
                builder = builder.header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST");
            }
            let res = common::send_request(&router, builder.body(Body::empty())?).await?;
            assert_eq!(res.status, StatusCode::OK, "{} answered {}", uri, res.status);
            assert!(res.body.is_null(), "{} returned a body", uri);
            let origin = res.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).and_then(|v| v.to_str().ok());
            assert_eq!(origin, Some("*"), "{}", uri);
        }
    }

    // Preflight on the create route must not insert anything
    let res = common::send(&router, Method::GET, "/api/customer", None).await?;
    assert_eq!(res.body, json!([]));

    Ok(())
}

#[tokio::test]
async fn wrong_method_is_json_method_not_allowed() -> Result<()> {
    let router = common::test_router();

    for (method, uri) in [
        (Method::GET, "/api/newcustomer"),
        (Method::DELETE, "/api/customer/1"),
        (Method::GET, "/api/searchcustomer"),
    ] {
        let res = common::send(&router, method, uri, None).await?;
        assert_eq!(res.status, StatusCode::METHOD_NOT_ALLOWED, "{}", uri);
        assert_eq!(res.body["code"], "METHOD_NOT_ALLOWED", "{}", uri);
        let content_type = res.headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok());
        assert_eq!(content_type, Some("application/json"), "{}", uri);
    }

    Ok(())
}

#[tokio::test]
async fn unknown_route_is_json_not_found() -> Result<()> {
    let router = common::test_router();
    let res = common::send(&router, Method::GET, "/api/customers/everything", None).await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["error"], true);
    Ok(())
}

#[tokio::test]
async fn health_reports_ok_for_memory_store() -> Result<()> {
    let router = common::test_router();
    let res = common::send(&router, Method::GET, "/health", None).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "ok");
    Ok(())
}
