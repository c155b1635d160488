//! Axum HTTP adapter for the room booking service.
//!
//! The booking rules live in `room-booking-core`; this crate only maps JSON
//! requests onto [`BookingService`](room_booking_core::BookingService) calls
//! and service results onto HTTP responses.
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Extract** the JSON body leniently ([`dto`])
//! 3. **Call** the booking service held in [`AppState`]
//! 4. **Map** the result to a response, or to an [`ApiError`]
//!
//! # Example
//!
//! ```no_run
//! use room_booking_web::{build_router, AppState, Config};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env();
//! let app = build_router(AppState::from_config(&config));
//! let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-export key types for convenience
pub use config::{Config, IdScheme};
pub use error::ApiError;
pub use extractors::ApiJson;
pub use middleware::{correlation_id_layer, CorrelationId, CORRELATION_ID_HEADER};
pub use routes::build_router;
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, ApiError>;
