#![allow(dead_code)]

use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use portfolio::{AppState, Config, session::FormSession};
use portfolio_contact::{Relay, RelayMessage, SendError};
use portfolio_profile::Profile;
use tokio::sync::Notify;
use tower::ServiceExt;

pub const FALLBACK: &str = "owner@portfolio.localhost";

#[derive(Default)]
pub struct TestRelay {
    pub sent: Mutex<Vec<RelayMessage>>,
    pub fail: AtomicBool,
}

impl TestRelay {
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<RelayMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Relay for TestRelay {
    async fn send(&self, message: &RelayMessage) -> Result<(), SendError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(SendError::Rejected {
                status: 400,
                body: "The service ID is invalid".to_owned(),
            });
        }

        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "test"
    }
}

/// Holds every send until `release` is notified.
#[derive(Default)]
pub struct GatedRelay {
    pub started: AtomicUsize,
    pub finished: AtomicUsize,
    pub entered: Notify,
    pub release: Notify,
}

impl GatedRelay {
    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Relay for GatedRelay {
    async fn send(&self, _message: &RelayMessage) -> Result<(), SendError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();
        self.release.notified().await;
        self.finished.fetch_add(1, Ordering::SeqCst);

        Ok(())
    }

    fn name(&self) -> &'static str {
        "gated"
    }
}

pub fn config() -> anyhow::Result<Config> {
    let mut config = Config::load(None)?;
    config.contact.to_name = "Portfolio Owner".to_owned();
    config.contact.fallback_address = FALLBACK.to_owned();

    Ok(config)
}

pub struct TestApp<R = TestRelay> {
    pub router: Router,
    pub relay: Arc<R>,
    pub state: AppState,
}

pub fn setup_test_app() -> anyhow::Result<TestApp> {
    setup_test_app_with(Arc::new(TestRelay::default()))
}

pub fn setup_test_app_with<R: Relay + 'static>(relay: Arc<R>) -> anyhow::Result<TestApp<R>> {
    let state = AppState::new(config()?, Profile::default(), relay.clone());

    Ok(TestApp {
        router: portfolio::routes::router(state.clone()),
        relay,
        state,
    })
}

impl<R> TestApp<R> {
    pub async fn send(&self, request: Request<Body>) -> anyhow::Result<Response<Body>> {
        Ok(self.router.clone().oneshot(request).await?)
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> anyhow::Result<Response<Body>> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        self.send(builder.body(Body::empty())?).await
    }

    /// Posts the contact form the way the page script does.
    pub async fn submit(
        &self,
        fields: &[(&str, &str)],
        cookie: Option<&str>,
        fragment: bool,
    ) -> anyhow::Result<Response<Body>> {
        self.send(submit_request(fields, cookie, fragment)?).await
    }

    /// Session behind a `name=value` cookie pair.
    pub fn session(&self, cookie: &str) -> Option<Arc<FormSession>> {
        let (_, id) = cookie.split_once('=')?;
        Some(self.state.sessions.get_or_create(Some(id)))
    }
}

pub fn submit_request(
    fields: &[(&str, &str)],
    cookie: Option<&str>,
    fragment: bool,
) -> anyhow::Result<Request<Body>> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");

    if fragment {
        builder = builder.header("x-requested-with", "fetch");
    }

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let body = serde_urlencoded::to_string(fields)?;
    Ok(builder.body(Body::from(body))?)
}

/// Waits until the session's send has resolved.
pub async fn wait_idle(session: &FormSession) -> anyhow::Result<()> {
    tokio::time::timeout(Duration::from_secs(5), async {
        while session.controller.is_busy() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await?;

    Ok(())
}

/// `name=value` pair from the response's session cookie.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(portfolio::session::SESSION_COOKIE))
        .and_then(|v| v.split(';').next())
        .map(str::to_owned)
}

pub async fn body_string(response: Response<Body>) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(String::from_utf8(bytes.to_vec())?)
}

pub fn jane() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Jane Doe"),
        ("email", "jane@example.com"),
        ("subject", "Hello"),
        ("message", "Hi there"),
    ]
}
