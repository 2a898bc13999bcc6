use crate::handlers::{self, AppState};
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub struct ApiServer {
    state: AppState,
}

impl ApiServer {
    #[must_use]
    pub const fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/api/metrics", get(handlers::get_metrics))
            .route("/api/metric", get(handlers::get_metric))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Starts the web server listening on the specified address.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the address or serve requests.
    pub async fn serve(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Web API listening on {}", addr);

        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::tests::{record, state, StubStore};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_routes_serve_metrics() {
        let server = ApiServer::new(state(StubStore::Record(record(75, "Alpha"))));

        let (status, body) = get_json(server.router(), "/api/metrics").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["totalCount"], 75);
        assert_eq!(body["data"]["metrics"].as_array().unwrap().len(), 50);

        let (status, body) = get_json(server.router(), "/api/metric").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Metrics fetched successfully");
    }

    #[tokio::test]
    async fn test_failures_still_answer_ok() {
        let server = ApiServer::new(state(StubStore::Failing));

        let (status, body) = get_json(server.router(), "/api/metrics").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let server = ApiServer::new(state(StubStore::Missing));
        let response = server
            .router()
            .oneshot(Request::builder().uri("/api/bots").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
