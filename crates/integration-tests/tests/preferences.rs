//! Language and cookie decisions across requests.

use axum::http::StatusCode;
use farah_integration_tests::TestContext;

#[tokio::test]
async fn test_language_switch_sticks() {
    let ctx = TestContext::new();
    let mut visitor = ctx.browser();

    let page = visitor.get("/").await;
    assert!(page.body.contains("dir=\"ltr\""));

    let page = visitor
        .post_form("/preferences/language", &[("lang", "ar"), ("return_to", "/cart")])
        .await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);
    assert_eq!(page.location.as_deref(), Some("/cart"));

    let page = visitor.get("/").await;
    assert!(page.body.contains("lang=\"ar\""));
    assert!(page.body.contains("dir=\"rtl\""));

    // No value toggles back
    visitor.post_form("/preferences/language", &[]).await;
    let page = visitor.get("/").await;
    assert!(page.body.contains("dir=\"ltr\""));
}

#[tokio::test]
async fn test_return_to_cannot_leave_the_site() {
    let ctx = TestContext::new();
    let mut visitor = ctx.browser();

    let page = visitor
        .post_form(
            "/preferences/language",
            &[("lang", "en"), ("return_to", "//evil.example")],
        )
        .await;
    assert_eq!(page.location.as_deref(), Some("/"));
}

#[tokio::test]
async fn test_cookie_banner_hidden_after_decision() {
    let ctx = TestContext::new();
    let mut visitor = ctx.browser();

    assert!(visitor.get("/").await.body.contains("cookie-banner"));

    let page = visitor
        .post_form("/preferences/cookies", &[("decision", "dismissed")])
        .await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);
    assert!(!visitor.get("/").await.body.contains("cookie-banner"));

    let page = visitor
        .post_form("/preferences/cookies", &[("decision", "maybe")])
        .await;
    assert_eq!(page.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_dashboard_is_arabic_by_default() {
    let ctx = TestContext::new();
    let mut merchant = ctx.merchant();

    let page = merchant.get("/").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("dir=\"rtl\""));
}
