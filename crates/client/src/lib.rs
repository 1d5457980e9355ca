//! GameVault browsing client.
//!
//! [`controller::BrowseController`] drives a
//! [`gamevault_core::session::BrowseSession`] from UI events: it debounces
//! search input, runs at most one gateway fetch at a time and feeds results
//! back into the session. [`gateway::GatewayClient`] is the HTTP
//! implementation of the [`gateway::GameSource`] it fetches from.

pub mod controller;
pub mod events;
pub mod gateway;

pub use controller::BrowseController;
pub use events::UiEvent;
pub use gateway::{GameSource, GatewayClient, GatewayError};
