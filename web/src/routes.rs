//! Router configuration for the booking service.
//!
//! Builds the complete Axum router with all endpoints.

use crate::handlers::{bookings, health_check, root};
use crate::middleware::correlation_id_layer;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Build the complete Axum router.
///
/// Configures:
/// - `GET /` and `GET /health`
/// - the `/api/reserva` endpoints, with and without a trailing slash
/// - HTTP tracing and correlation IDs on every route
pub fn build_router(state: AppState) -> Router {
    let reserva = get(bookings::list_bookings).post(bookings::find_booking);

    let api_routes = Router::new()
        .route("/reserva", reserva.clone())
        .route("/reserva/", reserva)
        .route("/reserva/add", post(bookings::create_booking))
        .route("/reserva/remove", post(bookings::cancel_booking));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(correlation_id_layer())
        .with_state(state)
}
