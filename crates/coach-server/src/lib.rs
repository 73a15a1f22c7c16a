//! Coach Web Server
//!
//! Axum-based REST API for the Coach personal finance analyzer.
//!
//! - `POST /api/analyze-finances` runs the analysis pipeline
//! - `GET /api/sample-transactions` returns demo data
//! - `GET /` and `/static/*` serve the web frontend when a static directory is set
//!
//! Malformed request bodies are rejected with 400 and never reach the
//! pipeline. A panic while handling a request becomes a 500 with a
//! diagnostic message instead of a dropped connection.

use std::any::Any;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::{error, info, warn};

use coach_core::RuleConfig;

mod handlers;

/// Server configuration
#[derive(Clone, Debug, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = any origin)
    pub allowed_origins: Vec<String>,
    /// Directory containing `index.html` and other frontend assets
    pub static_dir: Option<PathBuf>,
}

/// Shared application state
pub struct AppState {
    pub rules: RuleConfig,
}

/// Create the application router
pub fn create_router(rules: RuleConfig, config: ServerConfig) -> Router {
    let state = Arc::new(AppState { rules });

    let mut app = Router::new()
        .route("/api", get(handlers::api_root))
        .route("/api/", get(handlers::api_root))
        .route("/api/analyze-finances", post(handlers::analyze_finances))
        .route(
            "/api/sample-transactions",
            get(handlers::get_sample_transactions),
        )
        .route("/api/rules", get(handlers::get_rules))
        .with_state(state);

    // Serve the frontend if a directory was provided
    if let Some(dir) = config.static_dir.as_deref() {
        app = app
            .route_service("/", ServeFile::new(dir.join("index.html")))
            .nest_service("/static", ServeDir::new(dir));
    }

    apply_middleware(app, &config)
}

/// Wrap a router with tracing, CORS, security headers, and panic recovery
fn apply_middleware(app: Router, config: &ServerConfig) -> Router {
    app.layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origins))
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        cors.allow_origin(AnyOrigin)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        cors.allow_origin(origins)
    }
}

/// Turn a handler panic into a 500 response
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::internal(&format!("Analysis failed: {}", detail)).into_response()
}

/// Start the server
pub async fn serve_with_config(
    rules: RuleConfig,
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    if let Some(dir) = config.static_dir.as_deref() {
        check_static_dir(dir);
    }

    let app = create_router(rules, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Log whether the frontend entry point exists
fn check_static_dir(dir: &Path) {
    let index = dir.join("index.html");
    if index.exists() {
        info!(path = %dir.display(), "Serving frontend");
    } else {
        warn!(path = %index.display(), "Frontend index.html not found; / will return 404");
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.message, "Request failed");
        } else {
            warn!(status = %self.status, error = %self.message, "Rejected request");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}
