//! HTTP API Module
//!
//! Exposes the pet store over HTTP with Axum.
//!
//! ## Responsibilities
//! - **Dispatch**: Routes `GET/POST /pets` and `GET/DELETE /pets/:id` to the store.
//! - **Validation**: Rejects malformed bodies and parameters with `400` before the
//!   store is reached, so the store itself never has to validate anything.
//! - **Encoding**: Maps store results to status codes and JSON bodies, including the
//!   `{code, message}` error object.
//!
//! ## Submodules
//! - **`error`**: `ApiError` and its HTTP rendering.
//! - **`extract`**: Parameter and body validation.
//! - **`handlers`**: One Axum handler per store operation.
//! - **`protocol`**: Endpoint paths and wire DTOs.
//! - **`router`**: Assembles the `Router` around a shared `PetStore`.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod protocol;
pub mod router;
