pub mod backend;

#[cfg(feature = "ssr")]
pub mod identity;

#[cfg(feature = "ssr")]
pub mod session;
