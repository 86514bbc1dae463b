use std::net::SocketAddr;

use axum::{Router, middleware, routing::get};
use bistro_db_memory::create_storage;
use bistro_graphql::{
    DirectorySchemaBuilder, GraphQLError, GraphQLState, graphql_handler, graphql_handler_get,
};
use bistro_storage::DynStorage;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::AppConfig, handlers, middleware as app_middleware};

pub struct BistroServer {
    addr: SocketAddr,
    app: Router,
}

/// Builds the HTTP router: the GraphQL endpoint at `cfg.graphql.path` plus `/healthz`.
///
/// Fails only when the GraphQL schema cannot be assembled.
pub fn build_app(cfg: &AppConfig, storage: DynStorage) -> Result<Router, GraphQLError> {
    let body_limit = cfg.server.body_limit_bytes;

    let schema = DirectorySchemaBuilder::new(cfg.graphql.to_schema_builder_config()).build()?;
    let state = GraphQLState::new(schema, storage, cfg.graphql.clone());

    let graphql_routes = Router::new()
        .route(
            &cfg.graphql.path,
            get(graphql_handler_get).post(graphql_handler),
        )
        .with_state(state);

    let app = Router::new()
        .route("/healthz", get(handlers::healthz))
        .merge(graphql_routes)
        // Middleware stack (outermost last: request id -> trace -> cors -> body limit)
        .layer(axum::extract::DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    use tracing::field::Empty;
                    let req_id = req
                        .extensions()
                        .get::<axum::http::HeaderValue>()
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("")
                        .to_string();
                    tracing::info_span!(
                        "http.request",
                        http.method = %req.method(),
                        http.target = %req.uri(),
                        http.status_code = Empty,
                        request_id = %req_id
                    )
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &tracing::Span| {
                        span.record(
                            "http.status_code",
                            tracing::field::display(res.status().as_u16()),
                        );
                        tracing::info!(
                            http.status = %res.status().as_u16(),
                            elapsed_ms = %latency.as_millis(),
                            "request handled"
                        );
                    },
                ),
        )
        .layer(middleware::from_fn(app_middleware::request_id));

    Ok(app)
}

pub struct ServerBuilder {
    addr: SocketAddr,
    config: AppConfig,
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerBuilder {
    pub fn new() -> Self {
        let cfg = AppConfig::default();
        Self {
            addr: cfg.addr(),
            config: cfg,
        }
    }

    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_config(mut self, cfg: AppConfig) -> Self {
        self.addr = cfg.addr();
        self.config = cfg;
        self
    }

    pub fn build(self) -> anyhow::Result<BistroServer> {
        let storage = create_storage(&self.config.storage_options());
        let app = build_app(&self.config, storage)?;

        Ok(BistroServer {
            addr: self.addr,
            app,
        })
    }
}

impl BistroServer {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        tracing::info!("Running GraphQL on Port: {}", self.addr.port());
        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    // Wait for Ctrl+C
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
