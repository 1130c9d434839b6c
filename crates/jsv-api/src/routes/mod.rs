//! # API Route Modules
//!
//! - [`validate`]: `POST /validate`
//! - [`status`]: `GET /metrics`

pub mod status;
pub mod validate;
