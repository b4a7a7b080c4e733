use crate::common::TestApp;

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::spawn().await;
    let res = app.get("/health").await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["status"], "ok");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = TestApp::spawn().await;
    let res = app.get("/api-docs/openapi.json").await;

    assert_eq!(res.status, 200);
    assert!(res.body["paths"]["/api/arena/today"].is_object());
    assert!(res.body["paths"]["/api/upload/batch"].is_object());

    let scalar = app.get("/scalar").await;
    assert_eq!(scalar.status, 200);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = TestApp::spawn().await;
    let res = app
        .client
        .get(app.url("/api/arena/today"))
        .header("Origin", "http://frontend.example.com")
        .send()
        .await
        .expect("Failed to send GET request");

    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn cors_preflight_lists_methods() {
    let app = TestApp::spawn().await;
    let res = app
        .client
        .request(reqwest::Method::OPTIONS, app.url("/api/arena"))
        .header("Origin", "http://frontend.example.com")
        .header("Access-Control-Request-Method", "DELETE")
        .send()
        .await
        .expect("Failed to send OPTIONS request");

    assert_eq!(res.status(), 200);
    let methods = res
        .headers()
        .get("access-control-allow-methods")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(methods.contains("DELETE"));
    assert!(methods.contains("PUT"));
}
