use super::error::ApiError;
use super::extract;
use crate::store::memory::PetStore;
use crate::store::types::{NewPet, Pet};

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::http::{Method, StatusCode, Uri};
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_add_pet(
    Extension(store): Extension<Arc<PetStore>>,
    body: Result<Json<NewPet>, JsonRejection>,
) -> Result<(StatusCode, Json<Pet>), ApiError> {
    let new_pet = extract::new_pet(body)?;

    let pet = store.add(new_pet);
    tracing::info!("Created pet {} ({})", pet.id, pet.name);

    Ok((StatusCode::CREATED, Json(pet)))
}

pub async fn handle_find_pets(
    Extension(store): Extension<Arc<PetStore>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<(StatusCode, Json<Vec<Pet>>), ApiError> {
    let filter = extract::pet_filter(query)?;

    let pets = store.find_all(&filter);
    tracing::debug!(
        "Listed {} pets (tags: {:?}, limit: {:?})",
        pets.len(),
        filter.tags,
        filter.limit
    );

    Ok((StatusCode::OK, Json(pets)))
}

pub async fn handle_find_pet_by_id(
    Extension(store): Extension<Arc<PetStore>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Pet>), ApiError> {
    let id = extract::pet_id(&id)?;

    let pet = store.find_by_id(id)?;

    Ok((StatusCode::OK, Json(pet)))
}

pub async fn handle_delete_pet(
    Extension(store): Extension<Arc<PetStore>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = extract::pet_id(&id)?;

    store.delete(id)?;
    tracing::info!("Deleted pet {}", id);

    Ok(StatusCode::NO_CONTENT)
}

pub async fn handle_unknown_route(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {} {}", method, uri.path()))
}
