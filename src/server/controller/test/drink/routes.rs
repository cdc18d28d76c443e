use super::*;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD, ORIGIN,
};

fn assert_allow_headers(response: &TestResponse) {
    assert_eq!(
        response.headers[ACCESS_CONTROL_ALLOW_HEADERS],
        "Content-Type, Authorization, Data-Type"
    );
    assert_eq!(
        response.headers[ACCESS_CONTROL_ALLOW_METHODS],
        "GET, PUT, POST, DELETE, PATCH, OPTIONS"
    );
    assert_eq!(response.headers[ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

/// Tests the access control headers on a successful response.
///
/// Expected: all three headers present
#[tokio::test]
async fn success_carries_access_control_headers() {
    let test = TestBuilder::new().with_drink_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = send(db, empty_body(request(Method::GET, "/drinks"))).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_allow_headers(&response);
}

/// Tests the access control headers on error responses.
///
/// Expected: all three headers present on 401 and 404 alike
#[tokio::test]
async fn errors_carry_access_control_headers() {
    let test = TestBuilder::new().with_drink_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let unauthorized = send(db, empty_body(request(Method::GET, "/drinks-detail"))).await;
    let not_found = send(
        db,
        empty_body(with_permissions(
            request(Method::DELETE, "/drinks/1"),
            &["delete:drinks"],
        )),
    )
    .await;

    assert_eq!(unauthorized.status, StatusCode::UNAUTHORIZED);
    assert_allow_headers(&unauthorized);
    assert_eq!(not_found.status, StatusCode::NOT_FOUND);
    assert_allow_headers(&not_found);
}

/// Tests a browser preflight request.
///
/// Expected: 200 with the request origin mirrored back
#[tokio::test]
async fn answers_preflight() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = send(
        db,
        empty_body(
            request(Method::OPTIONS, "/drinks")
                .header(ORIGIN, "http://localhost:8100")
                .header(ACCESS_CONTROL_REQUEST_METHOD, "POST"),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers[ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:8100"
    );
    assert_eq!(response.headers[ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

/// Tests an unknown route.
///
/// Expected: 404 "Resource not found" with the access control headers
#[tokio::test]
async fn unknown_route_is_not_found() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = send(db, empty_body(request(Method::GET, "/cocktails"))).await;

    assert_error(&response, StatusCode::NOT_FOUND, json!(404), "Resource not found");
    assert_allow_headers(&response);
}

/// Tests the OpenAPI document route.
///
/// Expected: 200 with every drink path documented
#[tokio::test]
async fn serves_openapi_document() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = send(db, empty_body(request(Method::GET, "/api-docs/openapi.json"))).await;

    assert_eq!(response.status, StatusCode::OK);
    let paths = response.body["paths"].as_object().unwrap();
    assert!(paths.contains_key("/drinks"));
    assert!(paths.contains_key("/drinks-detail"));
    assert!(paths.contains_key("/drinks/{drink_id}"));
    assert!(response.body["paths"]["/drinks"]["post"].is_object());
    assert!(response.body["paths"]["/drinks/{drink_id}"]["delete"].is_object());
}
