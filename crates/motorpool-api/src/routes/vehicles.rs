//! Vehicle routes
//!
//! Reads require any authenticated role; writes require an admin.

use axum::{
    Extension, Json, Router,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Path, Query, State},
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
};
use motorpool_auth::{AuthUser, require_admin, require_auth};
use motorpool_db::{NewVehicle, Vehicle, VehicleFilter};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

use super::types::{CreateVehicleRequest, DeleteVehicleResponse, VehicleQuery};
use super::validation::RequiredFields;

/// Drop blank query values so `?brand=` means "no brand filter"
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// GET /car (Authenticated)
async fn list_vehicles(
    Extension(user): Extension<AuthUser>,
    State(state): State<AppState>,
    query: Result<Query<VehicleQuery>, QueryRejection>,
) -> Result<Json<Vec<Vehicle>>, ApiError> {
    let Query(query) = query?;
    let filter = VehicleFilter {
        brand: non_blank(query.brand),
        model: non_blank(query.model),
    };

    debug!(
        "User {} listing vehicles (brand: {:?}, model: {:?})",
        user.username, filter.brand, filter.model
    );

    let vehicles = state.vehicles.list_vehicles(&filter).await?;
    Ok(Json(vehicles))
}

/// GET /car/{id} (Authenticated)
async fn get_vehicle(
    Extension(user): Extension<AuthUser>,
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vehicle>, ApiError> {
    let Path(id) = id?;
    debug!("User {} fetching vehicle {}", user.username, id);

    let vehicle = state
        .vehicles
        .find_vehicle(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Vehicle {} does not exist", id)))?;

    Ok(Json(vehicle))
}

/// POST /car (Admin only)
async fn create_vehicle(
    Extension(admin): Extension<AuthUser>,
    State(state): State<AppState>,
    payload: Result<Json<CreateVehicleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Vehicle>), ApiError> {
    let Json(request) = payload?;

    let mut fields = RequiredFields::default();
    let brand = fields.text("brand", request.brand);
    let model = fields.text("model", request.model);
    let year = fields.value("year", request.year);
    fields.finish()?;

    let vehicle = state
        .vehicles
        .insert_vehicle(NewVehicle { brand, model, year })
        .await?;

    metrics::counter!("motorpool_vehicles_created_total").increment(1);
    info!(
        "Vehicle {} ({} {} {}) created by {}",
        vehicle.id, vehicle.brand, vehicle.model, vehicle.year, admin.username
    );

    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// DELETE /car/{id} (Admin only)
async fn delete_vehicle(
    Extension(admin): Extension<AuthUser>,
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteVehicleResponse>, ApiError> {
    let Path(id) = id?;
    debug!("Deleting vehicle: {}", id);

    if !state.vehicles.delete_vehicle(id).await? {
        return Err(ApiError::NotFound(format!("Vehicle {} does not exist", id)));
    }

    metrics::counter!("motorpool_vehicles_deleted_total").increment(1);
    info!("Vehicle {} deleted by {}", id, admin.username);

    Ok(Json(DeleteVehicleResponse {
        message: format!("Vehicle {} deleted", id),
        id,
    }))
}

/// Create vehicle routes, each wrapped in its guard
pub fn routes(state: &AppState) -> Router<AppState> {
    let reads = Router::new()
        .route("/car", get(list_vehicles))
        .route("/car/{id}", get(get_vehicle))
        .route_layer(from_fn_with_state(state.tokens.clone(), require_auth));

    let writes = Router::new()
        .route("/car", post(create_vehicle))
        .route("/car/{id}", delete(delete_vehicle))
        .route_layer(from_fn_with_state(state.tokens.clone(), require_admin));

    reads.merge(writes)
}
