//! Pet API Protocol
//!
//! Endpoint paths and the Data Transfer Objects that are not store types themselves.
//! `Pet` and `NewPet` go over the wire as-is.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Collection endpoint: `GET` lists pets, `POST` creates one.
pub const ENDPOINT_PETS: &str = "/pets";
/// Item endpoint: `GET` fetches a pet, `DELETE` removes it.
pub const ENDPOINT_PET_BY_ID: &str = "/pets/:id";

// --- Query Parameters ---

/// Repeated string parameter restricting the listing to these tags.
pub const PARAM_TAGS: &str = "tags";
/// Non-negative int32 capping the listing length.
pub const PARAM_LIMIT: &str = "limit";
pub const PARAM_ID: &str = "id";

// --- Data Transfer Objects ---

/// Body returned with every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Mirrors the HTTP status code.
    pub code: i32,
    pub message: String,
}
