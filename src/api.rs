// 🌐 Receipt API - Axum routes and handlers
// POST /receipts/process, GET /receipts/:id/points

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::scoring;
use crate::store::ScoreStore;
use crate::validation;
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Path, State},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ScoreStore>,
}

impl AppState {
    pub fn new(store: Arc<ScoreStore>) -> Self {
        Self { store }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(ScoreStore::new()))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /health - Health check
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// POST /receipts/process - Validate, score and store a receipt
async fn process_receipt(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProcessResponse>, ApiError> {
    // An unreadable body is judged like a missing document
    let document: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let receipt = validation::parse(&document).map_err(|result| {
        tracing::debug!(errors = ?result.errors, "rejected receipt");
        ApiError::validation(result.errors)
    })?;

    let points = scoring::score(&receipt);
    let record = state.store.insert_new(points);
    tracing::info!(id = %record.id, points, retailer = %receipt.retailer, "processed receipt");

    Ok(Json(ProcessResponse { id: record.id }))
}

/// GET /receipts/:id/points - Look up a stored score
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let record = Uuid::parse_str(&id)
        .ok()
        .and_then(|uuid| state.store.get(&uuid))
        .ok_or_else(|| ApiError::not_found(id))?;

    Ok(Json(PointsResponse {
        points: record.points,
    }))
}

// ============================================================================
// Router
// ============================================================================

pub fn build_app(state: AppState, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_check))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.max_body_size));

    if config.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use serde_json::json;
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, AppState) {
        let state = AppState::default();
        (build_app(state.clone(), &ServerConfig::default()), state)
    }

    fn target_receipt() -> Value {
        json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
                {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
                {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
                {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
                {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
            ],
            "total": "35.35"
        })
    }

    async fn post_raw(app: Router, body: impl Into<Body>) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri("/receipts/process")
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn post_receipt(app: Router, receipt: &Value) -> Response {
        post_raw(app, receipt.to_string()).await
    }

    async fn get_uri(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (app, _) = create_test_app();
        let response = get_uri(app, "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_process_then_get_points() {
        let (app, state) = create_test_app();

        let response = post_receipt(app.clone(), &target_receipt()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let id = body["id"].as_str().unwrap().to_string();
        assert!(Uuid::parse_str(&id).is_ok());
        assert_eq!(state.store.len(), 1);

        for _ in 0..2 {
            let response = get_uri(app.clone(), &format!("/receipts/{}/points", id)).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(body_json(response).await, json!({"points": 28}));
        }
    }

    #[tokio::test]
    async fn test_each_receipt_gets_a_new_id() {
        let (app, state) = create_test_app();

        let first = body_json(post_receipt(app.clone(), &target_receipt()).await).await;
        let second = body_json(post_receipt(app, &target_receipt()).await).await;

        assert_ne!(first["id"], second["id"]);
        assert_eq!(state.store.len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_receipt_is_rejected() {
        let (app, state) = create_test_app();
        let mut receipt = target_receipt();
        receipt["items"] = json!([]);
        receipt["purchaseTime"] = json!("25:00");

        let response = post_receipt(app, &receipt).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({
                "error": "The receipt is invalid",
                "messages": ["Invalid purchase time", "Invalid items"]
            })
        );
        assert!(state.store.is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_body_is_rejected() {
        let (app, _) = create_test_app();

        let response = post_raw(app, "{not json").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "The receipt is invalid");
        assert_eq!(body["messages"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let (app, _) = create_test_app();

        for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
            let response = get_uri(app.clone(), &format!("/receipts/{}/points", id)).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert_eq!(
                body_json(response).await,
                json!({"error": "No receipt found for that id"})
            );
        }
    }

    #[tokio::test]
    async fn test_zero_point_receipt_is_found() {
        let (app, _) = create_test_app();
        let receipt = json!({
            "retailer": "-",
            "purchaseDate": "2022-01-02",
            "purchaseTime": "09:00",
            "items": [{"shortDescription": "Pepsi", "price": "1.26"}],
            "total": "1.26"
        });

        let body = body_json(post_receipt(app.clone(), &receipt).await).await;
        let id = body["id"].as_str().unwrap();

        let response = get_uri(app, &format!("/receipts/{}/points", id)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"points": 0}));
    }

    #[tokio::test]
    async fn test_body_limit() {
        let config = ServerConfig {
            max_body_size: 16,
            ..ServerConfig::default()
        };
        let app = build_app(AppState::default(), &config);

        let response = post_receipt(app, &target_receipt()).await;
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
