//! HTTP-surface tests: the fully configured router called in process,
//! without the network stack, asserting the status codes, headers, and
//! JSON bodies clients actually see.

use std::net::SocketAddr;

use axum::body::{to_bytes, Body};
use axum::extract::connect_info::ConnectInfo;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::Utc;
use serde_json::{json, Value};
use tower::Service;
use uuid::Uuid;

use gerai_core::{Money, Product, SalesAdmin, WholesaleTier};
use gerai_db::repository::settings::SALES_ENABLED_KEY;
use gerai_db::{Database, DbConfig};
use gerai_sales_api::{routes, AppState, Config};

fn app_over(db: &Database, inquiry_rate_limit: i64) -> Router {
    let config = Config {
        http_port: 0,
        database_path: ":memory:".to_string(),
        inquiry_rate_limit,
        inquiry_rate_window_secs: 600,
    };
    routes::build_app(AppState::new(db.clone(), config))
}

/// Sends one request through the router as a tower Service. The
/// connect-info extension the real server installs is attached here so
/// handlers that read the client address keep working.
async fn send(app: &mut Router, mut request: Request<Body>) -> Response {
    let peer: SocketAddr = "127.0.0.1:4000".parse().unwrap();
    request.extensions_mut().insert(ConnectInfo(peer));
    app.call(request).await.unwrap()
}

async fn get(app: &mut Router, uri: &str) -> Response {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: &mut Router, uri: &str, body: Value) -> Response {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn product(name: &str, base: i64) -> Product {
    let now = Utc::now();
    Product {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        base_price_rupiah: base,
        discount_price_rupiah: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

fn admin(name: &str, usage: i64) -> SalesAdmin {
    let now = Utc::now();
    SalesAdmin {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        whatsapp_number: Some("+62 812-3456-7890".to_string()),
        shopee_link: None,
        tokopedia_link: None,
        is_active: true,
        usage_count: usage,
        last_selected_at: None,
        priority_order: 0,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn resolve_success_is_not_cacheable() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();

    let p = product("Benih Cabai Rawit 10g", 45_000);
    db.products()
        .insert(
            &p,
            &[WholesaleTier {
                minimum_quantity: 5,
                unit_price: Money::from_rupiah(40_000),
            }],
        )
        .await
        .unwrap();
    db.admins().insert(&admin("Ani", 3)).await.unwrap();
    db.admins().insert(&admin("Budi", 1)).await.unwrap();
    db.settings().set(SALES_ENABLED_KEY, "true").await.unwrap();

    let mut app = app_over(&db, 5);
    let response = get(
        &mut app,
        &format!("/api/sales/resolve?productId={}&channel=wa", p.id),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    // Rotation-sensitive: two identical requests may name different
    // admins, so caches must not store the response
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );

    let body = json_body(response).await;
    assert_eq!(body["channel"], "wa");
    assert_eq!(body["adminName"], "Budi");
    assert!(body["link"]
        .as_str()
        .unwrap()
        .starts_with("https://wa.me/6281234567890?text="));
    // Quantity-1 price: the 5+ tier does not qualify at lead time
    assert!(body["message"].as_str().unwrap().contains("Rp 45.000"));
}

#[tokio::test]
async fn resolve_rejects_malformed_requests() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();

    let p = product("Pupuk Urea 50kg", 380_000);
    db.products().insert(&p, &[]).await.unwrap();
    db.admins().insert(&admin("Ani", 0)).await.unwrap();
    db.settings().set(SALES_ENABLED_KEY, "true").await.unwrap();

    let mut app = app_over(&db, 5);

    // Missing productId
    let response = get(&mut app, "/api/sales/resolve?channel=wa").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "invalid_input");

    // Missing channel
    let response = get(&mut app, &format!("/api/sales/resolve?productId={}", p.id)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unsupported channel value
    let response = get(
        &mut app,
        &format!("/api/sales/resolve?productId={}&channel=instagram", p.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unknown product
    let response = get(&mut app, "/api/sales/resolve?productId=ghost&channel=wa").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "not_found");
}

#[tokio::test]
async fn resolve_answers_503_when_disabled_or_unstaffed() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();

    let p = product("Mulsa Plastik 1 Roll", 420_000);
    db.products().insert(&p, &[]).await.unwrap();
    db.admins().insert(&admin("Ani", 0)).await.unwrap();
    // Kill-switch never set: fail-closed

    let mut app = app_over(&db, 5);
    let uri = format!("/api/sales/resolve?productId={}&channel=wa", p.id);

    let response = get(&mut app, &uri).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json_body(response).await["error"], "feature_disabled");

    // Enabled but the only admin has no Shopee link: the advisory
    // fallback still selects them, payload construction then refuses
    db.settings().set(SALES_ENABLED_KEY, "true").await.unwrap();
    let response = get(
        &mut app,
        &format!("/api/sales/resolve?productId={}&channel=shopee", p.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json_body(response).await["error"], "channel_unavailable");
}

#[tokio::test]
async fn resolve_answers_503_on_empty_roster() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();

    let p = product("Pupuk NPK 16-16-16 50kg", 650_000);
    db.products().insert(&p, &[]).await.unwrap();
    db.settings().set(SALES_ENABLED_KEY, "true").await.unwrap();

    let mut app = app_over(&db, 5);
    let response = get(
        &mut app,
        &format!("/api/sales/resolve?productId={}&channel=wa", p.id),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json_body(response).await["error"], "no_admin_available");
}

#[tokio::test]
async fn price_quote_applies_tiers_per_quantity() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();

    let p = product("Benih Jagung Hibrida 1kg", 85_000);
    db.products()
        .insert(
            &p,
            &[WholesaleTier {
                minimum_quantity: 5,
                unit_price: Money::from_rupiah(80_000),
            }],
        )
        .await
        .unwrap();

    let mut app = app_over(&db, 5);

    // Default quantity is 1: base price
    let response = get(&mut app, &format!("/api/products/{}/price", p.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["quantity"], 1);
    assert_eq!(body["unitPrice"], 85_000);
    assert_eq!(body["formatted"], "Rp 85.000");

    // Tier threshold reached
    let response = get(&mut app, &format!("/api/products/{}/price?qty=5", p.id)).await;
    let body = json_body(response).await;
    assert_eq!(body["unitPrice"], 80_000);

    // Non-positive quantity
    let response = get(&mut app, &format!("/api/products/{}/price?qty=0", p.id)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unknown product
    let response = get(&mut app, "/api/products/ghost/price").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn inquiry_intake_enforces_the_rate_window() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();

    // Window of 2 inquiries per IP
    let mut app = app_over(&db, 2);
    let payload = json!({
        "name": "Budi",
        "phone": "+62 812-3456-7890",
        "message": "Apakah benih jagung masih tersedia?"
    });

    for _ in 0..2 {
        let response = post_json(&mut app, "/api/inquiries", payload.clone()).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        assert_eq!(body["status"], "received");
        assert!(body["id"].as_str().is_some());
    }

    // Third within the window: rejected, nothing written
    let response = post_json(&mut app, "/api/inquiries", payload).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json_body(response).await["error"], "rate_limited");

    let count = db
        .inquiries()
        .count_since("127.0.0.1", Utc::now() - chrono::Duration::hours(1))
        .await
        .unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn inquiry_intake_validates_its_fields() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let mut app = app_over(&db, 5);

    let response = post_json(
        &mut app,
        "/api/inquiries",
        json!({"name": "  ", "phone": "+62 812-3456-7890", "message": "Halo"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        &mut app,
        "/api/inquiries",
        json!({"name": "Budi", "phone": "bukan nomor", "message": "Halo"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "invalid_input");
}

#[tokio::test]
async fn health_reports_database_status() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let mut app = app_over(&db, 5);

    let response = get(&mut app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], true);
}
