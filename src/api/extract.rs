//! Request Validation
//!
//! Turns raw request parts into the typed inputs of the store, rejecting anything
//! outside the API contract with `ApiError::BadRequest`.

use super::error::ApiError;
use super::protocol::{PARAM_ID, PARAM_LIMIT, PARAM_TAGS};
use crate::store::types::{NewPet, PetFilter, PetId};

use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::{JsonRejection, QueryRejection};

/// Validates a `NewPet` body: a JSON object with a string `name` and an optional string `tag`.
pub fn new_pet(body: Result<Json<NewPet>, JsonRejection>) -> Result<NewPet, ApiError> {
    match body {
        Ok(Json(new_pet)) => Ok(new_pet),
        Err(rejection) => Err(ApiError::BadRequest(format!(
            "Invalid JSON for new pet: {}",
            rejection.body_text()
        ))),
    }
}

/// Parses the `id` path segment as a 64-bit integer.
pub fn pet_id(raw: &str) -> Result<PetId, ApiError> {
    raw.parse::<PetId>().map_err(|e| {
        ApiError::BadRequest(format!("Invalid format for parameter {}: {}", PARAM_ID, e))
    })
}

/// Builds a `PetFilter` from the listing query string.
///
/// Every `tags` occurrence contributes one entry, in request order. `limit` must be a
/// non-negative int32 and may appear at most once. Other keys are ignored.
pub fn pet_filter(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<PetFilter, ApiError> {
    let Query(pairs) = query.map_err(|rejection| {
        ApiError::BadRequest(format!("Invalid query string: {}", rejection.body_text()))
    })?;
    filter_from_pairs(pairs)
}

pub fn filter_from_pairs(pairs: Vec<(String, String)>) -> Result<PetFilter, ApiError> {
    let mut filter = PetFilter::default();

    for (key, value) in pairs {
        match key.as_str() {
            PARAM_TAGS => filter.tags.get_or_insert_with(Vec::new).push(value),
            PARAM_LIMIT => {
                if filter.limit.is_some() {
                    return Err(ApiError::BadRequest(format!(
                        "Parameter {} must be given at most once",
                        PARAM_LIMIT
                    )));
                }
                filter.limit = Some(parse_limit(&value)?);
            }
            _ => {}
        }
    }

    Ok(filter)
}

fn parse_limit(raw: &str) -> Result<usize, ApiError> {
    let limit = raw.parse::<i32>().map_err(|e| {
        ApiError::BadRequest(format!("Invalid format for parameter {}: {}", PARAM_LIMIT, e))
    })?;

    usize::try_from(limit).map_err(|_| {
        ApiError::BadRequest(format!(
            "Invalid value for parameter {}: must be >= 0, got {}",
            PARAM_LIMIT, limit
        ))
    })
}
