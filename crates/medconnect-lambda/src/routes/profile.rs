use std::collections::HashMap;

use axum::Json;
use axum::extract::{Query, State};

use medconnect_screens::navigation::NavigationContext;
use medconnect_screens::profile::{ProfileScreen, ProfileView};
use medconnect_screens::surface::EffectLog;

use crate::routes::ScreenResponse;
use crate::state::AppState;

async fn load(state: &AppState, params: HashMap<String, String>) -> ProfileScreen {
    let mut screen = ProfileScreen::new();
    screen
        .activate(&NavigationContext::from(params), state.catalog.as_ref())
        .await;
    screen
}

/// `GET /doctor?id=`
pub async fn get_profile(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<ProfileView> {
    Json(load(&state, params).await.view())
}

/// `POST /doctor/book?id=`
pub async fn book_from_profile(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<ScreenResponse<ProfileView>> {
    let screen = load(&state, params).await;
    let log = EffectLog::new();
    screen.book(&log, &log).await;

    Json(ScreenResponse {
        view: screen.view(),
        effects: log.into_effects(),
    })
}
