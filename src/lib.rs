//! Pet Store Service Library
//!
//! This library crate defines the modules behind the `petstore` binary (`main.rs`).
//!
//! ## Modules
//! - **`store`**: The in-memory pet collection. A single lock serializes every operation,
//!   and ids come from a counter that starts at 1000 and is never reused.
//! - **`api`**: The Axum HTTP layer. Validates requests, dispatches them to the store and
//!   encodes results and `{code, message}` errors as JSON.
//! - **`config`**: Command line configuration (listen host and port).

pub mod api;
pub mod config;
pub mod store;
