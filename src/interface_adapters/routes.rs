use crate::interface_adapters::handlers::{
    damage_unit, get_map, get_state, move_to_point, set_unit_facing,
};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/state", get(get_state))
        .route("/map", get(get_map))
        .route("/unit/facing", post(set_unit_facing))
        .route("/unit/move", post(move_to_point))
        .route("/unit/damage", post(damage_unit))
        .with_state(state)
}
