//! Domain logic for GameVault.
//!
//! This crate has no I/O: it defines the catalog data model shared by the
//! gateway and the browsing client, the query normalization rules, and the
//! browsing session state machine the client drives.

pub mod catalog;
pub mod debounce;
pub mod detail;
pub mod error;
pub mod offline;
pub mod query;
pub mod session;
pub mod types;
pub mod view;
