//! Route handlers.

use axum::extract::State;
use axum::http::{header::USER_AGENT, HeaderMap};
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::http::server::AppState;
use crate::types::RoutingDecision;

/// Mobile-only page.  The cursor toggle and social links live inside it as
/// inert client-side markup; the server never interprets them.
const MOBILE_PAGE: &str = include_str!("../../assets/mobile.html");

/// Landing page served at the redirect target.
const INDEX_PAGE: &str = include_str!("../../assets/index.html");

pub(crate) async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Gate for the mobile-only page: mobile visitors pass through, everyone
/// else is sent back to the root route.  A missing or non-UTF-8
/// `User-Agent` header classifies as non-mobile.
pub(crate) async fn mobile_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let ua = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let classification = state.classifier.classify(ua);
    tracing::debug!(
        is_mobile = classification.is_mobile,
        signal = classification.signal.unwrap_or("-"),
        "Classified user agent"
    );

    match state.classifier.decision(&classification) {
        RoutingDecision::Continue => Html(MOBILE_PAGE).into_response(),
        RoutingDecision::RedirectTo(target) => Redirect::temporary(target).into_response(),
    }
}
