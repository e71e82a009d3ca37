use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use portfolio_contact::{ContactSubmission, Notification, SubmitOutcome};

use crate::{
    routes::{AppState, with_session_cookie},
    session::{FormSession, SESSION_COOKIE},
    template::{ContactFormView, Template},
};

#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate {
    pub form: ContactFormView,
    pub toasts: Vec<Notification>,
}

impl ContactFormTemplate {
    pub fn new(session: &FormSession) -> Self {
        Self {
            form: ContactFormView::from_controller(&session.controller),
            toasts: session.toasts.drain(),
        }
    }
}

/// POST /contact
///
/// The page script posts with the fragment header and swaps the returned
/// form in place; plain form posts are redirected back to the page, which
/// renders the queued notification.
pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<ContactSubmission>,
) -> impl IntoResponse {
    let session = app_state
        .sessions
        .get_or_create(jar.get(SESSION_COOKIE).map(|c| c.value()));

    // The attempt owns its task: a visitor leaving mid-send does not cancel it.
    let attempt = tokio::spawn({
        let session = session.clone();
        async move { session.controller.submit_with(input).await }
    });

    let status = match attempt.await {
        Ok(SubmitOutcome::Invalid(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        Ok(SubmitOutcome::Busy) => StatusCode::CONFLICT,
        Ok(SubmitOutcome::Completed(_)) => StatusCode::OK,
        Err(err) => {
            tracing::error!(session = %session.id, "contact submission task failed: {err}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let jar = with_session_cookie(jar, &session.id);

    if !template.fragment {
        return (jar, Redirect::to("/#contact")).into_response();
    }

    (
        status,
        jar,
        template.render(ContactFormTemplate::new(&session)),
    )
        .into_response()
}
