use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    response::IntoResponse,
    routing::options,
    Router,
};
use garden_api::{api::options_handler, Error};
use serde_json::Value;
use tower::ServiceExt as _;

fn router() -> Router {
    Router::new()
        .route("/", options(options_handler))
        .route("/*path", options(options_handler))
}

async fn send_options(uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn error_body(err: Error) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn options_returns_empty_ok_for_any_path() {
    for uri in ["/", "/discussions", "/users/5/ban?expand=all"] {
        let (status, body) = send_options(uri).await;
        assert_eq!(status, StatusCode::OK, "uri {uri}");
        assert!(body.is_empty(), "uri {uri}");
    }
}

#[tokio::test]
async fn permission_denied_maps_to_forbidden() {
    let (status, body) = error_body(Error::PermissionDenied {
        permissions: vec!["Garden.Settings.Manage".to_string()],
        resource_id: None,
    })
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["status"], 403);
    assert_eq!(
        body["message"],
        "Permission denied: requires Garden.Settings.Manage"
    );
}

#[tokio::test]
async fn invalid_argument_maps_to_bad_request() {
    let (status, body) =
        error_body(Error::InvalidArgument("'expand' must be an array of strings".to_string()))
            .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn internal_errors_are_masked() {
    let (status, body) = error_body(Error::Internal("connection string leaked".to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
}
