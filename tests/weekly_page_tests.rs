use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

mod common;
use common::{create_test_app, insert_main, insert_sub, setup_test_db};

async fn get_page(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.contains("text/html"),
        "weekly page should be HTML, got: {content_type}"
    );

    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body_bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_saturday_anchor_renders_next_five_business_days() {
    let pool = setup_test_db().await;
    // 2025-08-23 is a Saturday; the page should show Mon 25th - Fri 29th
    insert_main(&pool, "20250825", "중식", "A", "반찬", "제육볶음").await;

    let (status, body) = get_page(create_test_app(pool), "/?date=20250823").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("class=\"day").count(), 5);
    for display in ["08.25", "08.26", "08.27", "08.28", "08.29"] {
        assert!(body.contains(display), "page should contain {display}");
    }
    assert!(!body.contains("08.23"), "Saturday must not appear");
    assert!(!body.contains("08.24"), "Sunday must not appear");

    // Default language is the base language
    assert!(body.contains("lang=\"ko\""));
    assert!(body.contains("월요일"));
    assert!(body.contains("제육볶음"));
}

#[tokio::test]
async fn test_language_switch_translates_labels() {
    let pool = setup_test_db().await;
    insert_main(&pool, "20250825", "중식", "A", "반찬", "제육볶음").await;

    let (status, body) = get_page(create_test_app(pool), "/?date=20250825&lang=en").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("lang=\"en\""));
    assert!(body.contains("Weekly Cafeteria Menu"));
    assert!(body.contains("Lunch"));
    assert!(body.contains("Monday"));
    // Untranslated menu content falls back to the raw name
    assert!(body.contains("제육볶음"));
    // Language links keep the anchor date
    assert!(body.contains("/?lang=sv&amp;date=20250825") || body.contains("/?lang=sv&date=20250825"));
}

#[tokio::test]
async fn test_unsupported_language_falls_back_to_base() {
    let pool = setup_test_db().await;

    let (status, body) = get_page(create_test_app(pool), "/?lang=xx").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("lang=\"ko\""));
}

#[tokio::test]
async fn test_days_without_menu_show_placeholder() {
    let pool = setup_test_db().await;
    // Only Monday has rows; the other four days are empty placeholders
    insert_main(&pool, "20250825", "중식", "A", "반찬", "제육볶음").await;

    let (status, body) = get_page(create_test_app(pool), "/?date=20250825&lang=en").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("No menu for this day").count(), 4);
}

#[tokio::test]
async fn test_store_failure_degrades_to_empty_week() {
    let pool = setup_test_db().await;
    let dessert = insert_main(&pool, "20250825", "중식", "E", "후식", "과일").await;
    insert_sub(&pool, dessert, "사과").await;

    // Break the store underneath the app: every day lookup now fails and
    // must degrade to an empty placeholder instead of a 500.
    sqlx::query("DROP TABLE sub_menu")
        .execute(&pool)
        .await
        .unwrap();

    let (status, body) = get_page(create_test_app(pool), "/?date=20250825&lang=en").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("No menu for this day").count(), 5);
}
