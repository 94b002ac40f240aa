pub mod domain;
pub mod infrastructure;

#[cfg(feature = "ssr")]
pub mod application;

#[cfg(feature = "ssr")]
pub mod config;

#[cfg(feature = "ssr")]
mod app_context;

#[cfg(feature = "ssr")]
pub use app_context::AppContext;
