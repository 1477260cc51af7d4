use axum::Json;
use axum::extract::{Query, State};

use medconnect_core::directory::DoctorFilter;
use medconnect_screens::directory::{DirectoryScreen, DirectoryView};

use crate::state::AppState;

/// `GET /doctors?name=&specialization=&branch=`
pub async fn list_doctors(
    State(state): State<AppState>,
    Query(filter): Query<DoctorFilter>,
) -> Json<DirectoryView> {
    let mut screen = DirectoryScreen::new();
    screen.activate(state.catalog.as_ref()).await;
    screen.apply_filter(filter);
    Json(screen.view())
}
