//! HTTP adapters - REST API implementations.
//!
//! Each module has its own HTTP adapter for endpoint exposure; `router`
//! assembles them behind the shared middleware stack.

pub mod analysis;
pub mod assets;
pub mod error;
pub mod records;
mod router;

pub use error::{ApiError, ErrorResponse};
pub use router::{build_router, AppState};
