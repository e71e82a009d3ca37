use std::sync::Arc;

use axum::http::{StatusCode, header};
use portfolio_contact::Field;
use tower::ServiceExt;

mod helpers;

#[tokio::test]
pub async fn test_page_renders_profile_and_sets_session() -> anyhow::Result<()> {
    let app = helpers::setup_test_app()?;

    let response = app.get("/", None).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(helpers::session_cookie(&response).is_some());

    let body = helpers::body_string(response).await?;
    assert!(body.contains("Ruturaj Daphal"));
    assert!(body.contains("LLM Frameworks"));
    assert!(body.contains(r#"id="contact-form""#));
    assert!(body.contains("Send message"));

    Ok(())
}

#[tokio::test]
pub async fn test_valid_submission_is_relayed_and_form_reset() -> anyhow::Result<()> {
    let app = helpers::setup_test_app()?;

    let response = app.submit(&helpers::jane(), None, true).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = helpers::body_string(response).await?;
    assert!(body.contains("Message sent!"));
    assert!(body.contains("Thank you for reaching out."));
    assert!(!body.contains("Jane Doe"));

    let sent = app.relay.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].from_name, "Jane Doe");
    assert_eq!(sent[0].from_email, "jane@example.com");
    assert_eq!(sent[0].subject, "Hello");
    assert_eq!(sent[0].message, "Hi there");
    assert_eq!(sent[0].to_name, "Portfolio Owner");

    Ok(())
}

#[tokio::test]
pub async fn test_invalid_submission_shows_errors_without_sending() -> anyhow::Result<()> {
    let app = helpers::setup_test_app()?;

    let response = app
        .submit(
            &[
                ("name", ""),
                ("email", "not-an-email"),
                ("subject", "Hello"),
                ("message", "Hi there"),
            ],
            None,
            true,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = helpers::body_string(response).await?;
    assert!(body.contains("Name is required"));
    assert!(body.contains("Please enter a valid email address"));
    assert!(body.contains("not-an-email"));
    assert!(!body.contains("Message sent!"));
    assert!(!body.contains("Failed to send message"));
    assert!(app.relay.sent().is_empty());

    Ok(())
}

#[tokio::test]
pub async fn test_failed_send_keeps_fields_and_shows_fallback() -> anyhow::Result<()> {
    let app = helpers::setup_test_app()?;
    app.relay.set_failing(true);

    let page = app.get("/", None).await?;
    let cookie = helpers::session_cookie(&page).expect("session cookie");

    let response = app.submit(&helpers::jane(), Some(&cookie), true).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = helpers::body_string(response).await?;
    assert!(body.contains("Failed to send message"));
    assert!(body.contains(helpers::FALLBACK));
    assert!(body.contains(r#"value="Jane Doe""#));
    assert!(body.contains("Hi there"));

    // Retry from the same session once the relay recovers.
    app.relay.set_failing(false);
    let response = app.submit(&helpers::jane(), Some(&cookie), true).await?;
    let body = helpers::body_string(response).await?;
    assert!(body.contains("Message sent!"));
    assert!(!body.contains("Failed to send message"));
    assert_eq!(app.relay.sent().len(), 1);

    Ok(())
}

#[tokio::test]
pub async fn test_plain_form_post_redirects_and_page_shows_toast() -> anyhow::Result<()> {
    let app = helpers::setup_test_app()?;

    let response = app.submit(&helpers::jane(), None, false).await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/#contact");

    let cookie = helpers::session_cookie(&response).expect("session cookie");
    let page = app.get("/", Some(&cookie)).await?;
    let body = helpers::body_string(page).await?;
    assert!(body.contains("Message sent!"));

    // Notifications are shown once.
    let page = app.get("/", Some(&cookie)).await?;
    let body = helpers::body_string(page).await?;
    assert!(!body.contains("Message sent!"));

    Ok(())
}

#[tokio::test]
pub async fn test_session_survives_between_requests() -> anyhow::Result<()> {
    let app = helpers::setup_test_app()?;

    let page = app.get("/", None).await?;
    let cookie = helpers::session_cookie(&page).expect("session cookie");
    app.get("/", Some(&cookie)).await?;

    assert_eq!(app.state.sessions.len(), 1);

    Ok(())
}

#[tokio::test]
pub async fn test_second_post_while_sending_is_busy() -> anyhow::Result<()> {
    let app = helpers::setup_test_app_with(Arc::new(helpers::GatedRelay::default()))?;
    let page = app.get("/", None).await?;
    let cookie = helpers::session_cookie(&page).expect("session cookie");

    let first = tokio::spawn(app.router.clone().oneshot(helpers::submit_request(
        &helpers::jane(),
        Some(&cookie),
        true,
    )?));
    app.relay.entered.notified().await;

    let response = app
        .submit(
            &[
                ("name", "John Roe"),
                ("email", "john@example.com"),
                ("subject", "Again"),
                ("message", "Second message"),
            ],
            Some(&cookie),
            true,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = helpers::body_string(response).await?;
    assert!(body.contains("disabled"));
    assert!(body.contains("Sending..."));
    assert!(body.contains(r#"value="Jane Doe""#));
    assert!(!body.contains("John Roe"));
    assert!(!body.contains("Message sent!"));
    assert!(!body.contains("Failed to send message"));
    assert_eq!(app.relay.started(), 1);

    app.relay.release.notify_one();
    let response = first.await??;
    assert_eq!(response.status(), StatusCode::OK);

    let body = helpers::body_string(response).await?;
    assert!(body.contains("Message sent!"));
    assert!(!body.contains("disabled"));
    assert_eq!(app.relay.started(), 1);
    assert_eq!(app.relay.finished(), 1);

    Ok(())
}

#[tokio::test]
pub async fn test_dropped_request_still_completes_send() -> anyhow::Result<()> {
    let app = helpers::setup_test_app_with(Arc::new(helpers::GatedRelay::default()))?;
    let page = app.get("/", None).await?;
    let cookie = helpers::session_cookie(&page).expect("session cookie");

    let request = tokio::spawn(app.router.clone().oneshot(helpers::submit_request(
        &helpers::jane(),
        Some(&cookie),
        true,
    )?));
    app.relay.entered.notified().await;

    // The visitor goes away mid-send.
    request.abort();
    assert!(request.await.unwrap_err().is_cancelled());

    app.relay.release.notify_one();
    let session = app.session(&cookie).expect("session");
    helpers::wait_idle(&session).await?;

    assert_eq!(app.relay.started(), 1);
    assert_eq!(app.relay.finished(), 1);
    assert_eq!(session.controller.field(Field::Name), "");

    let toasts = session.toasts.drain();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, "Message sent!");

    Ok(())
}
