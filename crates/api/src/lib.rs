//! Boundary surface for the out-of-scope transport layer.
//!
//! Exposes the logical request/response contract: typed DTOs in, domain
//! results out, plus the status-code mapping a transport would use. No HTTP
//! framework lives here.

pub mod dto;
pub mod services;
pub mod status;

pub use services::AppServices;
