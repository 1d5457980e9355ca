//! Offline caching policy for the browser shell.
//!
//! Expressed as data so the worker script, and anything else that needs to
//! agree with it, can be generated from or checked against one place.

/// Name of the current cache generation.
pub const CACHE_NAME: &str = "rlc-gamevault-v1";

/// Shell assets stored on install.
pub const PRECACHE_ASSETS: &[&str] = &[
    "/",
    "/index.html",
    "/script.js",
    "/manifest.json",
    "/logo.png",
];

/// Paths with this prefix are API calls.
pub const API_PREFIX: &str = "/api/";

/// Body returned for API calls when the network is unavailable.
pub const OFFLINE_API_BODY: &str = r#"{"error":"Offline"}"#;

/// How a request is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStrategy {
    /// Always go to the network; on failure answer with a synthetic JSON body.
    NetworkFirst { fallback_body: &'static str },
    /// Answer from the cache when possible, otherwise go to the network.
    CacheFirst,
}

/// Pick the strategy for a request path.
pub fn strategy_for(path: &str) -> CacheStrategy {
    if path.starts_with(API_PREFIX) {
        CacheStrategy::NetworkFirst {
            fallback_body: OFFLINE_API_BODY,
        }
    } else {
        CacheStrategy::CacheFirst
    }
}

/// Caches left over from previous generations, to delete on activation.
pub fn stale_caches<'a, I>(cache_names: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    cache_names
        .into_iter()
        .filter(|name| *name != CACHE_NAME)
        .collect()
}
