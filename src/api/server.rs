use crate::api::server_config::*;
use axum::{http::StatusCode, routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::{limit::ConcurrencyLimitLayer, timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::api::handlers;
use crate::core::config::RegistryConfig;
use crate::core::errors::RegistryError;
use crate::storage::UserStore;
use axum::error_handling::HandleErrorLayer;
use tower::BoxError;

#[derive(Clone)]
pub struct RegistryServer {
    pub store: UserStore,
    pub host: String,
    pub port: u16,
    pub config: RegistryConfig,
}

impl RegistryServer {
    /// Build a server owning an empty store. The store lives for the
    /// lifetime of the server and is handed to handlers as shared state.
    pub fn new(host: String, port: u16, config: RegistryConfig) -> Self {
        Self {
            store: UserStore::new(),
            host,
            port,
            config,
        }
    }

    pub async fn create_router(self) -> Router {
        let state = Arc::new(self);

        let cors_origin = std::env::var("CORS_ALLOW_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        tracing::info!("CORS configured to allow origin: {}", cors_origin);

        Router::new()
            .route("/health", get(handlers::health_check))
            .route("/api/health", get(handlers::health_check))
            .route(
                "/api/users",
                get(handlers::list_users).post(handlers::create_user),
            )
            .route("/api/users/new", get(handlers::new_user))
            .route("/api/users/search", get(handlers::search_users))
            .route("/api/users/:id", get(handlers::get_user))
            .route(
                "/api/users/:id/edit",
                get(handlers::edit_user).post(handlers::update_user),
            )
            .route(
                "/api/users/:id/delete",
                get(handlers::confirm_delete_user).post(handlers::delete_user),
            )
            .route("/api/metrics", get(handlers::metrics))
            .layer(
                CorsLayer::new()
                    .allow_origin({
                        use tower_http::cors::AllowOrigin;
                        AllowOrigin::exact(
                            axum::http::HeaderValue::from_str(&cors_origin)
                                .expect("Invalid CORS_ALLOW_ORIGIN environment variable"),
                        )
                    })
                    .allow_methods([
                        axum::http::Method::GET,
                        axum::http::Method::POST,
                        axum::http::Method::OPTIONS,
                    ])
                    .allow_headers([
                        axum::http::header::CONTENT_TYPE,
                        axum::http::header::ACCEPT,
                        axum::http::header::ORIGIN,
                    ])
                    .max_age(CORS_MAX_AGE),
            )
            .layer(
                ServiceBuilder::new()
                    // Convert middleware errors (timeout/overload) into HTTP responses
                    .layer(HandleErrorLayer::new(|err: BoxError| async move {
                        if err.is::<tower::timeout::error::Elapsed>() {
                            (StatusCode::REQUEST_TIMEOUT, "request timed out")
                        } else {
                            (StatusCode::SERVICE_UNAVAILABLE, "service overloaded")
                        }
                    }))
                    .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENCY))
                    .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
                    .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
                    .layer(TraceLayer::new_for_http()),
            )
            .with_state(state)
    }

    pub async fn start(self) -> Result<(), RegistryError> {
        let addr = format!("{}:{}", self.host, self.port);
        let app = self.create_router().await;
        tracing::info!("Server listening on {}", addr);
        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}
