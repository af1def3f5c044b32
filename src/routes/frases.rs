//! Welcome and random-quote endpoints

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Serialize;

use super::AppState;

/// Fixed welcome message served on the root route
pub const WELCOME: &str = "🌟 Bienvenido a la API de Frases Motivacionales 🌟";

/// Random quote response
#[derive(Debug, Clone, Serialize)]
pub struct FraseResponse {
    /// The selected quote
    pub frase: String,
}

/// Build the frases routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/frase", get(frase_handler))
}

/// GET / - Welcome message
///
/// Returns the fixed welcome string as plain text.
async fn welcome_handler() -> impl IntoResponse {
    (StatusCode::OK, WELCOME)
}

/// GET /frase - Random quote
///
/// Draws one quote uniformly at random from the loaded list. The list is
/// non-empty by construction, so this always succeeds.
async fn frase_handler(State(state): State<AppState>) -> impl IntoResponse {
    let frase = state.quotes.random().to_string();

    tracing::debug!(frase = %frase, "Frase seleccionada");

    (StatusCode::OK, Json(FraseResponse { frase }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::QuoteList;
    use axum::body::Body;
    use axum::http::{header, Request};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(Arc::new(
            QuoteList::from_vec(vec![
                "cree en ti".to_string(),
                "sigue adelante".to_string(),
                "nunca te rindas".to_string(),
            ])
            .unwrap(),
        ))
    }

    #[tokio::test]
    async fn test_welcome_returns_200() {
        let router = routes().with_state(create_test_state());

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_welcome_body_is_fixed_text() {
        let router = routes().with_state(create_test_state());

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/plain"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(std::str::from_utf8(&body).unwrap(), WELCOME);
    }

    #[tokio::test]
    async fn test_welcome_is_idempotent() {
        let router = routes().with_state(create_test_state());

        for _ in 0..10 {
            let response = router
                .clone()
                .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);

            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert_eq!(std::str::from_utf8(&body).unwrap(), WELCOME);
        }
    }

    #[tokio::test]
    async fn test_frase_returns_json_with_frase_key() {
        let router = routes().with_state(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/frase")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert!(json["frase"].is_string());
        assert_eq!(json.as_object().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_frase_returns_member_of_list() {
        let state = create_test_state();
        let router = routes().with_state(state.clone());

        for _ in 0..100 {
            let response = router
                .clone()
                .oneshot(
                    Request::builder()
                        .uri("/frase")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
            let frase = json["frase"].as_str().unwrap();

            assert!(state.quotes.contains(frase));
        }
    }

    #[tokio::test]
    async fn test_frase_ignores_query_string() {
        let router = routes().with_state(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/frase?page=2&limit=10")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
