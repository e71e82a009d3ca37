use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;
use portfolio_contact::Notification;
use portfolio_profile::Profile;
use time::OffsetDateTime;

use crate::{
    routes::{AppState, with_session_cookie},
    session::{FormSession, SESSION_COOKIE},
    template::{ContactFormView, Template},
};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub profile: &'a Profile,
    pub form: ContactFormView,
    pub toasts: Vec<Notification>,
    pub year: i32,
}

impl<'a> IndexTemplate<'a> {
    pub fn new(profile: &'a Profile, session: &FormSession) -> Self {
        Self {
            profile,
            form: ContactFormView::from_controller(&session.controller),
            toasts: session.toasts.drain(),
            year: OffsetDateTime::now_utc().year(),
        }
    }
}

pub async fn page(
    template: Template,
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    let session = app_state
        .sessions
        .get_or_create(jar.get(SESSION_COOKIE).map(|c| c.value()));

    let response = template.render(IndexTemplate::new(&app_state.profile, &session));

    (with_session_cookie(jar, &session.id), response)
}
