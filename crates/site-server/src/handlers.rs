//! HTTP Handlers

use axum::{
    extract::{Form, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use site_core::contact::FormSubmission;
use site_core::Route;

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Form post as the browser sends it, honeypot included
#[derive(Debug, Deserialize)]
pub struct ContactPost {
    #[serde(flatten)]
    pub submission: FormSubmission,
    #[serde(rename = "bot-field", default)]
    pub bot_field: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// SPA shell for any page route; unknown pages keep the shell but answer 404
pub async fn spa(State(state): State<AppState>, uri: Uri) -> Response {
    let route = Route::resolve(uri.path());
    let status = if route.is_found() {
        StatusCode::OK
    } else {
        tracing::debug!(path = %uri.path(), "Unknown page route");
        StatusCode::NOT_FOUND
    };

    (status, Html(state.index_html.to_string())).into_response()
}

/// Contact form handler, mirroring the static host's form endpoint
pub async fn accept_form(
    State(state): State<AppState>,
    Form(post): Form<ContactPost>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    if !post.bot_field.is_empty() {
        // Bots get the same answer as people
        tracing::debug!("Honeypot filled, dropping submission");
        return Ok(StatusCode::OK);
    }

    let submission = post.submission;
    if submission.form_name != state.site.form_name {
        tracing::warn!(form = %submission.form_name, "Submission for unknown form");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Unknown form: {}", submission.form_name),
                code: "UNKNOWN_FORM".into(),
            }),
        ));
    }

    tracing::info!(
        name = %submission.name,
        email = %submission.email,
        services = ?submission.services(),
        has_message = !submission.message.is_empty(),
        "Contact form received"
    );

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request};
    use site_core::SiteConfig;
    use tower::ServiceExt;

    use super::*;
    use crate::router;

    fn app() -> axum::Router {
        router(
            AppState::new("<html>shell</html>", SiteConfig::default()),
            std::path::Path::new("does-not-exist"),
        )
    }

    fn form_post(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("healthy"));
    }

    #[tokio::test]
    async fn test_known_pages_serve_shell() {
        for path in ["/", "/contacts", "/privacy", "/cookie-policy", "/tools/ai-chat-bot"] {
            let response = app()
                .oneshot(Request::get(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", path);
            assert_eq!(body_text(response).await, "<html>shell</html>");
        }
    }

    #[tokio::test]
    async fn test_unknown_pages_are_404() {
        for path in ["/nope", "/tools/unknown-tool"] {
            let response = app()
                .oneshot(Request::get(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", path);
            assert_eq!(body_text(response).await, "<html>shell</html>");
        }
    }

    #[tokio::test]
    async fn test_accepts_contact_form() {
        let response = app()
            .oneshot(form_post(
                "form-name=contact&name=Ada&companyName=&email=ada%40example.com\
                 &phone=%2B49+123&message=&consent=true&selectedServices=aiChatBot%2C+counseling",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_accepts_native_post_with_partial_fields() {
        let response = app()
            .oneshot(form_post("form-name=contact&name=Ada&email=ada%40example.com&bot-field="))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_honeypot_dropped_silently() {
        let response = app()
            .oneshot(form_post("form-name=wrong&bot-field=spam"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_form_rejected() {
        let response = app()
            .oneshot(form_post("form-name=newsletter&name=Ada&email=ada%40example.com"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("UNKNOWN_FORM"));
    }
}
