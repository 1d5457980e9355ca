//! Client for the RAWG game catalog.
//!
//! [`api::RawgApi`] performs the HTTP calls; [`models`] describes the upstream
//! wire format and [`reshape`] turns it into the normalized
//! [`gamevault_core::catalog`] types.

pub mod api;
pub mod models;
pub mod reshape;

pub use api::{RawgApi, RawgApiError};
