use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use medconnect_screens::admin::{AdminScreen, AdminView};
use medconnect_screens::surface::EffectLog;

use crate::error::ApiError;
use crate::routes::ScreenResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// `POST /admin/login`
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<ScreenResponse<AdminView>>, ApiError> {
    let Json(req) = payload?;

    let mut screen = AdminScreen::new();
    let log = EffectLog::new();
    screen.login(&req.password, state.catalog.as_ref(), &log).await;

    Ok(Json(ScreenResponse {
        view: screen.view(),
        effects: log.into_effects(),
    }))
}

/// `POST /admin/logout`
pub async fn logout() -> Json<ScreenResponse<AdminView>> {
    let screen = AdminScreen::new();
    let log = EffectLog::new();
    screen.logout(&log);

    Json(ScreenResponse {
        view: screen.view(),
        effects: log.into_effects(),
    })
}
