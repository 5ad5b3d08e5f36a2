use seqpack_server::api::service;
use warp::http::StatusCode;
use warp::test::request;

use crate::util::context;

#[tokio::test]
async fn preflight_from_allowed_origin() {
    let res = request()
        .method("OPTIONS")
        .path("/test")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .reply(&service(context()))
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let headers = res.headers();
    assert_eq!(headers["access-control-allow-origin"], "http://localhost:5173");
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert_eq!(headers["access-control-max-age"], "86400");
}

#[tokio::test]
async fn simple_request_from_allowed_origin_gets_cors_headers() {
    let res = request()
        .method("GET")
        .path("/health")
        .header("origin", "http://localhost:3000")
        .reply(&service(context()))
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["access-control-allow-origin"], "http://localhost:3000");
}

#[tokio::test]
async fn request_from_other_origin_is_forbidden() {
    let res = request()
        .method("GET")
        .path("/health")
        .header("origin", "http://evil.test")
        .reply(&service(context()))
        .await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn request_without_origin_is_served() {
    let res = request()
        .method("GET")
        .path("/health")
        .reply(&service(context()))
        .await;

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn preflight_uses_configured_max_age() {
    let mut ctx = context();
    ctx.settings.cors.max_age_secs = 600;

    let res = request()
        .method("OPTIONS")
        .path("/test")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "GET")
        .reply(&service(ctx))
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["access-control-max-age"], "600");
}
