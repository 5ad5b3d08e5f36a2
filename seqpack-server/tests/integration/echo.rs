use seqpack_server::api::service;
use serde_json::json;
use test_case::test_case;
use warp::http::StatusCode;
use warp::test::request;

use crate::util::{context, json_body};

#[tokio::test]
async fn health_reports_ok() {
    let res = request()
        .method("GET")
        .path("/health")
        .reply(&service(context()))
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(&res), json!({ "message": "OK" }));
}

#[tokio::test]
async fn post_echoes_summary() {
    let res = request()
        .method("POST")
        .path("/test")
        .json(&json!({ "companySeqs": "companySeq=1&companySeq=2&companySeq=3" }))
        .reply(&service(context()))
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        json_body(&res),
        json!({
            "count": 3,
            "companySeqs": ["1", "2", "3"],
            "message": "The request was processed successfully.",
        })
    );
}

#[test_case(json!({ "companySeqs": "" }); "empty string")]
#[test_case(json!({}); "missing field")]
#[test_case(json!({ "companySeqs": "other=1&another=2" }); "no matching key")]
#[tokio::test]
async fn post_without_identifiers_is_still_ok(body: serde_json::Value) {
    let res = request()
        .method("POST")
        .path("/test")
        .json(&body)
        .reply(&service(context()))
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        json_body(&res),
        json!({ "message": "The companySeq parameter is missing." })
    );
}

#[tokio::test]
async fn malformed_body_is_a_json_bad_request() {
    let res = request()
        .method("POST")
        .path("/test")
        .header("content-type", "application/json")
        .body("{not json")
        .reply(&service(context()))
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(&res)["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid body"));
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let mut ctx = context();
    ctx.settings.server.body_limit_bytes = 16;

    let res = request()
        .method("POST")
        .path("/test")
        .json(&json!({ "companySeqs": "companySeq=1&companySeq=2&companySeq=3" }))
        .reply(&service(ctx))
        .await;

    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn unknown_path_is_a_json_not_found() {
    let res = request()
        .method("GET")
        .path("/nope")
        .reply(&service(context()))
        .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(&res), json!({ "message": "Resource not found" }));
}

#[tokio::test]
async fn get_echoes_every_value() {
    let query: String = (1..=15)
        .map(|i| format!("companySeq={i}"))
        .collect::<Vec<_>>()
        .join("&");

    let res = request()
        .method("GET")
        .path(&format!("/test?{query}"))
        .reply(&service(context()))
        .await;

    let body = json_body(&res);
    assert_eq!(body["count"], 15);
    assert_eq!(body["companySeqs"].as_array().unwrap().len(), 15);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let res = request()
        .method("GET")
        .path("/api-docs/openapi.json")
        .reply(&service(context()))
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(json_body(&res)["paths"]["/test"].is_object());
}
