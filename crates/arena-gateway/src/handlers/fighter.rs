use crate::error::Result;
use crate::model::{ApiResponse, FighterPayload, FighterResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

type FighterJson = Json<ApiResponse<FighterResponse>>;

pub async fn list_fighters_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<FighterResponse>>>> {
    let fighters = state.repository().list().await?;
    let body: Vec<FighterResponse> = fighters.into_iter().map(FighterResponse::from).collect();
    Ok(Json(ApiResponse::ok(body)))
}

/// `name` arrives percent-decoded from the path segment.
pub async fn get_fighter_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<FighterJson> {
    let fighter = state.repository().find_by_name(&name).await?;
    Ok(Json(ApiResponse::ok(fighter.into())))
}

pub async fn create_fighter_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<FighterPayload>, JsonRejection>,
) -> Result<FighterJson> {
    let Json(payload) = payload?;
    let fighter = state
        .repository()
        .create(&payload.name, payload.skill)
        .await?;
    Ok(Json(ApiResponse::ok(fighter.into())))
}

pub async fn edit_fighter_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<FighterPayload>, JsonRejection>,
) -> Result<FighterJson> {
    let Json(payload) = payload?;
    let fighter = state
        .repository()
        .edit(&payload.name, payload.skill)
        .await?;
    Ok(Json(ApiResponse::ok(fighter.into())))
}

pub async fn delete_fighter_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<FighterJson> {
    let fighter = state.repository().delete(&name).await?;
    Ok(Json(ApiResponse::ok(fighter.into())))
}
