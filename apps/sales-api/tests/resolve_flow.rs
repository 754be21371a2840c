//! End-to-end resolve flow against a real (in-memory) SQLite database:
//! real repositories, real resolver, real fire-and-forget write-back.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use gerai_core::pricing::resolve_price;
use gerai_core::{Money, Product, SalesAdmin, SalesChannel, WholesaleTier};
use gerai_db::repository::settings::SALES_ENABLED_KEY;
use gerai_db::{Database, DbConfig};
use gerai_sales_api::service::{ResolveError, SalesResolver};

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

fn admin(name: &str, usage: i64, shopee: Option<&str>) -> SalesAdmin {
    let now = Utc::now();
    SalesAdmin {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        whatsapp_number: Some("+62 812-3456-7890".to_string()),
        shopee_link: shopee.map(String::from),
        tokopedia_link: None,
        is_active: true,
        usage_count: usage,
        last_selected_at: None,
        priority_order: 0,
        created_at: now,
        updated_at: now,
    }
}

fn resolver_for(db: &Database) -> SalesResolver {
    SalesResolver::new(
        Arc::new(db.clone()),
        Arc::new(db.clone()),
        Arc::new(db.clone()),
    )
}

/// Polls until the admin's usage count reaches `expected`; the rotation
/// write-back is detached, so the test has to wait for it to land.
async fn wait_for_usage(db: &Database, admin_id: &str, expected: i64) {
    for _ in 0..200 {
        let current = db
            .admins()
            .get_by_id(admin_id)
            .await
            .unwrap()
            .unwrap()
            .usage_count;
        if current == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("usage count for {} never reached {}", admin_id, expected);
}

#[tokio::test]
async fn wa_resolve_selects_least_used_admin_and_records_it() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();

    let p1 = product("Benih Cabai Rawit 10g", 45_000);
    db.products()
        .insert(
            &p1,
            &[WholesaleTier {
                minimum_quantity: 5,
                unit_price: Money::from_rupiah(40_000),
            }],
        )
        .await
        .unwrap();

    let a = admin("A", 3, None);
    let b = admin("B", 1, None);
    db.admins().insert(&a).await.unwrap();
    db.admins().insert(&b).await.unwrap();
    db.settings().set(SALES_ENABLED_KEY, "true").await.unwrap();

    let resolution = resolver_for(&db)
        .resolve(&p1.id, "wa")
        .await
        .unwrap();

    // Least-used admin wins
    assert_eq!(resolution.admin_name, "B");
    // Lead price is the quantity-1 price: the 5+ tier does not qualify
    assert!(resolution.message_text.contains("Rp 45.000"));
    assert!(resolution.message_text.contains("Benih Cabai Rawit 10g"));
    assert!(resolution
        .target_link
        .starts_with("https://wa.me/6281234567890?text="));

    // The detached write-back lands: B goes from 1 to 2, A is untouched
    wait_for_usage(&db, &b.id, 2).await;
    let a_after = db.admins().get_by_id(&a.id).await.unwrap().unwrap();
    assert_eq!(a_after.usage_count, 3);
    assert!(a_after.last_selected_at.is_none());
}

#[tokio::test]
async fn missing_storefront_link_yields_channel_unavailable() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();

    let p1 = product("Pupuk Urea 50kg", 380_000);
    db.products().insert(&p1, &[]).await.unwrap();
    db.admins()
        .insert(&admin("Solo", 0, None))
        .await
        .unwrap();
    db.settings().set(SALES_ENABLED_KEY, "true").await.unwrap();

    let err = resolver_for(&db)
        .resolve(&p1.id, "shopee")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ResolveError::ChannelUnavailable(SalesChannel::Shopee)
    ));
}

#[tokio::test]
async fn kill_switch_disables_resolves_outright() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();

    let p1 = product("Mulsa Plastik 1 Roll", 420_000);
    db.products().insert(&p1, &[]).await.unwrap();
    db.admins().insert(&admin("Ani", 0, None)).await.unwrap();
    // sales_enabled never set: fail-closed

    let err = resolver_for(&db)
        .resolve(&p1.id, "wa")
        .await
        .unwrap_err();
    assert!(matches!(err, ResolveError::Disabled));

    // Explicitly off behaves the same
    db.settings().set(SALES_ENABLED_KEY, "false").await.unwrap();
    let err = resolver_for(&db)
        .resolve(&p1.id, "wa")
        .await
        .unwrap_err();
    assert!(matches!(err, ResolveError::Disabled));
}

#[tokio::test]
async fn storefront_resolve_uses_the_admins_link() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();

    let p1 = product("Benih Jagung Hibrida 1kg", 85_000);
    db.products().insert(&p1, &[]).await.unwrap();
    db.admins()
        .insert(&admin("Ani", 0, Some("https://shopee.co.id/geraitani")))
        .await
        .unwrap();
    db.settings().set(SALES_ENABLED_KEY, "true").await.unwrap();

    let resolution = resolver_for(&db)
        .resolve(&p1.id, "shopee")
        .await
        .unwrap();

    assert_eq!(resolution.target_link, "https://shopee.co.id/geraitani");
    assert_eq!(resolution.message_text, "");
    assert_eq!(resolution.admin_name, "Ani");
}

#[tokio::test]
async fn quote_path_applies_wholesale_tiers() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();

    let p1 = product("Benih Cabai Rawit 10g", 45_000);
    db.products()
        .insert(
            &p1,
            &[WholesaleTier {
                minimum_quantity: 5,
                unit_price: Money::from_rupiah(40_000),
            }],
        )
        .await
        .unwrap();

    let pricing = db.products().pricing(&p1.id).await.unwrap().unwrap();

    assert_eq!(resolve_price(&pricing.facts(1)).unwrap().rupiah(), 45_000);
    assert_eq!(resolve_price(&pricing.facts(5)).unwrap().rupiah(), 40_000);
}
