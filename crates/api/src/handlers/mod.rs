//! Request handlers.
//!
//! Handlers delegate to the upstream client in `gamevault_rawg` and map its
//! errors via [`crate::error::AppError`].

pub mod catalog;
