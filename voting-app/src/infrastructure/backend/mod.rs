pub mod wire;

#[cfg(feature = "ssr")]
mod client;

#[cfg(feature = "ssr")]
pub use client::{BackendClient, DEFAULT_API_URL};
