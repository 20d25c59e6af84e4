use axum::{body::Bytes, extract::State, Json};
use serde_json::{Number, Value};
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    middleware::RequestId,
    models::{ErrorResponse, PlanetRecord, PlanetRequest},
    AppState,
};

/// Look up one planet by id
#[utoipa::path(
    post,
    path = "/planet",
    request_body = PlanetRequest,
    responses(
        (status = 200, description = "Planet record", body = PlanetRecord),
        (status = 400, description = "Missing or non-integer id", body = ErrorResponse),
        (status = 404, description = "No planet with that id", body = ErrorResponse),
        (status = 500, description = "Record store failure", body = ErrorResponse)
    ),
    tag = "planets"
)]
pub async fn get_planet(
    State(state): State<AppState>,
    RequestId(request_id): RequestId,
    body: Bytes,
) -> ApiResult<Json<PlanetRecord>> {
    let planet_id = planet_id_from_body(&body)?;

    info!(request_id = %request_id, "Fetching planet {}", planet_id);

    let planet = state.lookup.find_planet(planet_id).await?;
    Ok(Json(planet))
}

/// Pull `id` out of a JSON request body without coercion.
///
/// A body that is empty, not JSON, not an object, or has no (or a null)
/// `id` counts as missing. Any JSON number with a whole value is an id,
/// however it is written (`3`, `3.0`, `3e0`); one outside the `i64` range
/// can never be stored and is reported as not found. Anything else is
/// invalid.
pub fn planet_id_from_body(body: &[u8]) -> ApiResult<i64> {
    let payload: Value = serde_json::from_slice(body).map_err(|_| ApiError::MissingPlanetId)?;

    match payload.get("id") {
        None | Some(Value::Null) => Err(ApiError::MissingPlanetId),
        Some(Value::Number(number)) => whole_number_id(number),
        Some(_) => Err(ApiError::InvalidPlanetId),
    }
}

fn whole_number_id(number: &Number) -> ApiResult<i64> {
    if let Some(id) = number.as_i64() {
        return Ok(id);
    }
    // Integers above i64::MAX
    if number.is_u64() {
        return Err(ApiError::PlanetNotFound(number.to_string()));
    }

    match number.as_f64() {
        Some(value) if value.is_finite() && value.fract() == 0.0 => {
            // i64::MIN and i64::MAX + 1 are both exact powers of two as f64
            if value >= i64::MIN as f64 && value < i64::MAX as f64 {
                Ok(value as i64)
            } else {
                Err(ApiError::PlanetNotFound(number.to_string()))
            }
        }
        _ => Err(ApiError::InvalidPlanetId),
    }
}
