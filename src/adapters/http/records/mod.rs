//! HTTP adapter for burn record endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{BurnRecordResponse, CreateRecordRequest, SessionStatsResponse};
pub use handlers::RecordHandlers;
pub use routes::records_routes;
