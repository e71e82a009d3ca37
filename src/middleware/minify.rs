//! Whitespace and comment stripping for rendered pages.

use axum::{
    body::Body,
    http::{HeaderMap, header},
    response::Response,
};

/// Upper bound on a page body read for minification.
#[cfg_attr(debug_assertions, allow(dead_code))]
const MAX_MINIFY_BYTES: usize = 2 * 1024 * 1024;

fn is_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/html"))
}

/// Minifies `text/html` responses in release builds; debug builds serve the
/// templates as written.
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    if !is_html(response.headers()) {
        return response;
    }

    cfg_if::cfg_if! {
        if #[cfg(debug_assertions)] {
            response
        } else {
            minify(response).await
        }
    }
}

#[cfg(not(debug_assertions))]
async fn minify(response: Response<Body>) -> Response<Body> {
    let (mut parts, body) = response.into_parts();

    let html = match axum::body::to_bytes(body, MAX_MINIFY_BYTES).await {
        Ok(html) => html,
        Err(err) => {
            tracing::error!("failed to read page body for minification: {err}");
            parts.status = axum::http::StatusCode::INTERNAL_SERVER_ERROR;
            return Response::from_parts(parts, Body::empty());
        }
    };

    let cfg = minify_html::Cfg {
        keep_closing_tags: true,
        keep_html_and_head_opening_tags: true,
        minify_css: true,
        minify_js: true,
        ..minify_html::Cfg::default()
    };

    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(minify_html::minify(&html, &cfg)))
}
