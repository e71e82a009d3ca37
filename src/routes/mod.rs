use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use portfolio_contact::{Relay, Settings};
use portfolio_profile::Profile;

use crate::{
    session::{FormSessions, SESSION_COOKIE},
    template::{NotFoundTemplate, Template},
};

mod contact;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub profile: Arc<Profile>,
    pub sessions: Arc<FormSessions>,
}

impl AppState {
    pub fn new(config: crate::config::Config, profile: Profile, relay: Arc<dyn Relay>) -> Self {
        let settings = Settings {
            to_name: config.contact.to_name.clone(),
            fallback_address: config.contact.fallback_address.clone(),
        };
        let ttl = Duration::from_secs(config.contact.session_ttl_secs);

        Self {
            config,
            profile: Arc::new(profile),
            sessions: Arc::new(FormSessions::new(relay, settings, ttl)),
        }
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, template.render(NotFoundTemplate))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", post(contact::action))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}

/// Keeps the form session cookie on every page response.
pub fn with_session_cookie(jar: CookieJar, id: &str) -> CookieJar {
    jar.add(
        Cookie::build((SESSION_COOKIE, id.to_owned()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}
