//! # HTTP Server
//!
//! Combines the selection and observability routers behind one CORS layer.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{log_event_with_fields, Event};
use crate::service::SelectionService;

use super::config::HttpServerConfig;
use super::observability_routes::observability_routes;
use super::selection_routes::selection_routes;

/// HTTP server for the chat front end
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server around a selection service
    pub fn with_config(config: HttpServerConfig, service: Arc<SelectionService>) -> Self {
        let router = Self::build_router(&config, service);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, service: Arc<SelectionService>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let metrics = Arc::clone(service.metrics());

        Router::new()
            .merge(observability_routes(metrics))
            .nest("/api", selection_routes(service))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        log_event_with_fields(Event::ServerStart, &[("addr", addr.to_string().as_str())]);
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::pin::Pin;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::record::DatasetSummary;
    use crate::translate::{IntentTranslator, TranslateResult};

    const PROJECTS: &str = "ID,Gerencia,Aporte_Estrategico,Beneficios_Estimados\n\
                            7,Operaciones,Sistémico,\"$250,000\"\n\
                            8,Finanzas,Táctico,\"$90,000\"\n";

    struct EchoPlan(&'static str);

    impl IntentTranslator for EchoPlan {
        fn translate<'a>(
            &'a self,
            _prompt: &'a str,
            _summary: &'a DatasetSummary,
        ) -> Pin<Box<dyn Future<Output = TranslateResult<String>> + Send + 'a>> {
            Box::pin(async move { Ok(self.0.to_string()) })
        }
    }

    fn server(plan: &'static str) -> HttpServer {
        let service = Arc::new(SelectionService::new(Arc::new(EchoPlan(plan))));
        HttpServer::with_config(HttpServerConfig::default(), service)
    }

    async fn post_chat(router: Router, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_server_with_custom_port() {
        let mut server = server("{}");
        server.config = HttpServerConfig::with_port(8080);
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[tokio::test]
    async fn test_chat_returns_joined_ids() {
        let router = server(r#"{"operation": "exclude", "criteria": [{"column": "Gerencia", "comparison": "contains", "value": "finanzas"}]}"#)
            .router();
        let (status, body) =
            post_chat(router, json!({"prompt": "all but finance", "projects": PROJECTS})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"response": "7"}));
    }

    #[tokio::test]
    async fn test_chat_missing_fields() {
        let router = server("{}").router();
        let (status, body) = post_chat(router, json!({"prompt": "top 3"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "El prompt y la lista de proyectos son requeridos."
        );
    }

    #[tokio::test]
    async fn test_chat_bad_dataset() {
        let router = server(r#"{"operation": "include"}"#).router();
        let (status, body) =
            post_chat(router, json!({"prompt": "x", "projects": "Nombre\nfoo\n"})).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Error al ejecutar la selección de proyectos.");
    }

    #[tokio::test]
    async fn test_health_and_metrics() {
        let router = server("{}").router();

        let response = router
            .clone()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let metrics: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(metrics["requests_received"], 0);
    }
}
