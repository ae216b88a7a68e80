use crate::config::AppConfig;
use crate::error::ScrapeError;
use crate::pipelines::Scraper;
use crate::serialize::to_json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared across handlers; holds no per-request state
pub type AppState = Arc<Scraper>;

/// Body of `POST /new`. Unknown fields are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewRecipeRequest {
    #[serde(rename = "URL")]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/new", post(new_recipe))
        .with_state(state)
}

/// Scrape the URL in the request body and answer with the recipe as JSON.
pub async fn new_recipe(State(scraper): State<AppState>, body: Bytes) -> Response {
    let request: NewRecipeRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            let err = ScrapeError::Decode(e);
            warn!("Error decoding request body: {}", err);
            return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
        }
    };

    info!("Received recipe URL: {}", request.url);

    let result = scraper
        .build_recipe(&request.url)
        .await
        .and_then(|recipe| to_json(&recipe));

    match result {
        Ok(json) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            json,
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(err: ScrapeError) -> Response {
    let status = match &err {
        e if e.is_fetch_error() => StatusCode::BAD_GATEWAY,
        ScrapeError::Parse(_) => StatusCode::BAD_GATEWAY,
        ScrapeError::Decode(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!("Scrape failed with {}: {}", status, err);
    } else {
        warn!("Scrape rejected with {}: {}", status, err);
    }

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// Bind `listen_addr` and serve until the process is stopped.
pub async fn serve(config: &AppConfig) -> Result<(), ScrapeError> {
    let scraper = Scraper::from_config(config)?;
    let app = router(Arc::new(scraper));

    let listener = tokio::net::TcpListener::bind(config.listen_addr.as_str()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_rejects_unknown_fields() {
        let err = serde_json::from_str::<NewRecipeRequest>(r#"{"URL": "x", "extra": 1}"#)
            .unwrap_err();
        assert!(err.to_string().contains("extra"));
    }

    #[test]
    fn test_request_key_is_uppercase() {
        let request: NewRecipeRequest =
            serde_json::from_str(r#"{"URL": "https://example.com/r"}"#).unwrap();
        assert_eq!(request.url, "https://example.com/r");
        assert!(serde_json::from_str::<NewRecipeRequest>(r#"{"url": "x"}"#).is_err());
    }

    #[test]
    fn test_error_statuses() {
        let parse = error_response(ScrapeError::Parse("bad".to_string()));
        assert_eq!(parse.status(), StatusCode::BAD_GATEWAY);

        let status = error_response(ScrapeError::Status {
            url: "http://x".to_string(),
            status: StatusCode::NOT_FOUND,
        });
        assert_eq!(status.status(), StatusCode::BAD_GATEWAY);

        let internal = error_response(ScrapeError::Io(std::io::Error::other("boom")));
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
