use crate::domain::CommandError;
use crate::interface_adapters::http::ErrorResponse;
use crate::interface_adapters::protocol::{
    DamageRequest, DamageResponse, GameStateDto, MapResponse, MoveToPointRequest,
    SetFacingRequest, StateQuery, TileMapDto,
};
use crate::interface_adapters::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use tracing::warn;

type ApiError = (StatusCode, Json<ErrorResponse>);

// Handler for the full object/unit snapshot, optionally filtered by owner.
pub async fn get_state(
    State(state): State<AppState>,
    Query(query): Query<StateQuery>,
) -> Json<GameStateDto> {
    Json(state.game.snapshot(query.owner_filter()).into())
}

// Handler for the immutable terrain grid.
pub async fn get_map(State(state): State<AppState>) -> Json<MapResponse> {
    Json(MapResponse {
        map: TileMapDto::from(state.game.state().grid()),
    })
}

pub async fn set_unit_facing(
    State(state): State<AppState>,
    Json(payload): Json<SetFacingRequest>,
) -> Result<StatusCode, ApiError> {
    require_finite(&[payload.facing])?;
    state
        .game
        .set_facing(payload.unit_id, payload.facing)
        .map_err(map_command_error)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn move_to_point(
    State(state): State<AppState>,
    Json(payload): Json<MoveToPointRequest>,
) -> Result<StatusCode, ApiError> {
    require_finite(&[payload.x, payload.y])?;
    state
        .game
        .move_to_point(payload.unit_id, payload.x, payload.y)
        .map_err(map_command_error)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn damage_unit(
    State(state): State<AppState>,
    Json(payload): Json<DamageRequest>,
) -> Result<Json<DamageResponse>, ApiError> {
    let outcome = state
        .game
        .damage(payload.source_id, payload.target_id)
        .map_err(map_command_error)?;
    Ok(Json(outcome.into()))
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

fn require_finite(values: &[f64]) -> Result<(), ApiError> {
    if values.iter().all(|v| v.is_finite()) {
        return Ok(());
    }
    Err(error_response(
        StatusCode::BAD_REQUEST,
        "numeric fields must be finite",
    ))
}

fn map_command_error(err: CommandError) -> ApiError {
    match err {
        CommandError::UnitNotFound(id) => {
            warn!(unit_id = %id, "command for unknown unit");
            error_response(StatusCode::NOT_FOUND, err.to_string())
        }
    }
}
