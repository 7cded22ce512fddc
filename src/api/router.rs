use super::handlers::*;
use super::protocol::{ENDPOINT_PET_BY_ID, ENDPOINT_PETS};
use crate::store::memory::PetStore;

use axum::{Extension, Router, routing::get};
use std::sync::Arc;

/// Builds the HTTP router serving `store`.
pub fn router(store: Arc<PetStore>) -> Router {
    Router::new()
        .route(ENDPOINT_PETS, get(handle_find_pets).post(handle_add_pet))
        .route(
            ENDPOINT_PET_BY_ID,
            get(handle_find_pet_by_id).delete(handle_delete_pet),
        )
        .fallback(handle_unknown_route)
        .layer(Extension(store))
}
