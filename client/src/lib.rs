//! # Volley Client
//! A peer in a volley session. Owns the message manager and identifier
//! allocator for one session and exposes them behind a single handle, in
//! local, host or client mode.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use volley_shared as shared;

mod client;
mod client_config;
mod error;

pub use client::{Client, HostBaseline};
pub use client_config::SessionConfig;
pub use error::ClientError;
