use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use portfolio_contact::{ContactFormController, Field, FieldErrors};
use std::{convert::Infallible, str::FromStr};

pub const FRAGMENT_HEADER: &str = "x-requested-with";
pub const FRAGMENT_VALUE: &str = "fetch";

/// Renders askama templates into responses.
///
/// `fragment` is set when the page script asked for a partial update instead
/// of a full document.
pub struct Template {
    pub fragment: bool,
}

impl Template {
    fn to_string<T: askama::Template>(&self, template: T) -> String {
        match template.render() {
            Ok(html) => html,
            Err(err) => format!("Failed to render template. Error: {err}"),
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("{err}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(self.to_string(ServerTemplate)),
                )
                    .into_response()
            }
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let fragment = parts
            .headers
            .get(FRAGMENT_HEADER)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.eq_ignore_ascii_case(FRAGMENT_VALUE));

        Ok(Template { fragment })
    }
}

/// Snapshot of one visitor's form, taken for rendering.
pub struct ContactFormView {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub errors: FieldErrors,
    pub busy: bool,
}

impl ContactFormView {
    pub fn from_controller(controller: &ContactFormController) -> Self {
        let fields = controller.fields();

        Self {
            name: fields.name,
            email: fields.email,
            subject: fields.subject,
            message: fields.message,
            errors: controller.errors(),
            busy: controller.is_busy(),
        }
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        let field = Field::from_str(field).ok()?;
        self.errors.get(&field).map(String::as_str)
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate;

