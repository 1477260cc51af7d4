use std::collections::HashMap;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use medconnect_core::validation::{AppointmentForm, Field};
use medconnect_screens::appointment::{AppointmentScreen, AppointmentView, SubmitOutcome};
use medconnect_screens::navigation::NavigationContext;
use medconnect_screens::surface::{Effect, EffectLog};

use crate::error::ApiError;
use crate::state::AppState;

async fn load(state: &AppState, params: HashMap<String, String>) -> AppointmentScreen {
    let mut screen = AppointmentScreen::new(state.today());
    screen
        .activate(&NavigationContext::from(params), state.store.as_ref())
        .await;
    screen
}

/// `GET /appointment?doctorId=`
pub async fn get_form(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<AppointmentView> {
    Json(load(&state, params).await.view())
}

#[derive(Debug, Deserialize)]
pub struct BlurRequest {
    pub field: Field,
    #[serde(default)]
    pub values: AppointmentForm,
}

#[derive(Debug, Serialize)]
pub struct BlurResponse {
    pub field: Field,
    pub error: Option<String>,
}

/// `POST /appointment/validate`: the check run when a field loses focus.
pub async fn validate_field(
    State(state): State<AppState>,
    payload: Result<Json<BlurRequest>, JsonRejection>,
) -> Result<Json<BlurResponse>, ApiError> {
    let Json(req) = payload?;

    let mut screen = AppointmentScreen::new(state.today());
    screen.fill(req.values);
    let error = screen.blur(req.field).map(|e| e.to_string());

    Ok(Json(BlurResponse {
        field: req.field,
        error,
    }))
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub view: AppointmentView,
    pub effects: Vec<Effect>,
    /// Id of the stored appointment when the booking went through.
    pub appointment_id: Option<String>,
}

/// `POST /appointment?doctorId=`
pub async fn submit(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    payload: Result<Json<AppointmentForm>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let Json(form) = payload?;

    let mut screen = load(&state, params).await;
    screen.fill(form);

    let log = EffectLog::new();
    let outcome = screen.submit(state.store.as_ref(), &log, &log).await;
    let appointment_id = match outcome {
        SubmitOutcome::Booked(record) => Some(record.id.to_string()),
        SubmitOutcome::Invalid | SubmitOutcome::Failed | SubmitOutcome::Ignored => None,
    };

    Ok(Json(SubmitResponse {
        view: screen.view(),
        effects: log.into_effects(),
        appointment_id,
    }))
}
