//! HTTP API layer for the Benefit Simulation Engine.
//!
//! Exposes the three simulation endpoints and the shared history endpoints
//! over axum. The layer owns no calculation logic. It validates inputs,
//! delegates to [`crate::calculation`], and records results in the shared
//! [`crate::history::SimulationHistory`].

pub mod handlers;
pub mod request;
pub mod response;
pub mod state;

pub use handlers::create_router;
pub use request::{PensionRequest, RetirementRequest, SeveranceRequest};
pub use response::{ApiError, ApiErrorResponse, HistoryResponse};
pub use state::AppState;
