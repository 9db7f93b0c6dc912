//! HTTP pipeline setup and serve loop.
//!
//! # Responsibilities
//! - Build the axum Router with every synchronous unit in order
//! - Dispatch slot-routed requests to the installed handler
//! - Run the serve loop with graceful shutdown

use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceExt;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::dashboard;
use crate::pipeline::HandlerSlot;

/// Build the request pipeline.
///
/// Unit order is fixed: cross-origin policy, request id, trace, dashboard
/// mount, then the slot fallback. The slot is the only part that changes
/// after this function returns.
pub fn build_pipeline(config: &ServerConfig, slot: HandlerSlot) -> Router {
    let mut router = Router::new()
        .fallback(dispatch)
        .with_state(slot)
        .merge(dashboard::mount(&config.dashboard.static_dir))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    if config.cors.enabled {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router = router.layer(cors);
    }

    router
}

/// Route a request into the installed handler.
///
/// Until composition completes the slot is empty and the request gets the
/// same outcome as an unregistered route.
async fn dispatch(State(slot): State<HandlerSlot>, request: Request) -> Response {
    match slot.get() {
        Some(handler) => {
            let handler = (*handler).clone();
            match handler.oneshot(request).await {
                Ok(response) => response,
                Err(infallible) => match infallible {},
            }
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "not found" })),
        )
            .into_response(),
    }
}

/// Run the serve loop until the shutdown signal fires.
pub async fn serve(
    listener: TcpListener,
    pipeline: Router,
    mut shutdown: broadcast::Receiver<()>,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!(address = %addr, "HTTP server started");

    axum::serve(listener, pipeline)
        .with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
        })
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
