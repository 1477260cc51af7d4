use medconnect_screens::surface::Effect;
use serde::Serialize;

pub mod admin;
pub mod appointment;
pub mod directory;
pub mod health;
pub mod profile;

/// A screen's view after an interaction, plus the dialogs and navigation it
/// produced, in order, for the browser to replay.
#[derive(Debug, Serialize)]
pub struct ScreenResponse<V> {
    pub view: V,
    pub effects: Vec<Effect>,
}
