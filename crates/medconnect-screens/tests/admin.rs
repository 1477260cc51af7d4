mod common;

use common::{FakeCatalog, doctor};
use medconnect_screens::admin::{ADMIN_PASSWORD, AdminScreen, PASSWORD_ERROR_MESSAGE};
use medconnect_screens::surface::{Effect, EffectLog};

fn seven_doctors() -> FakeCatalog {
    FakeCatalog::serving(
        (1..=7)
            .map(|i| doctor(&format!("d{i}"), &format!("Dr. {i}"), "General", "Main"))
            .collect(),
    )
}

#[tokio::test]
async fn wrong_password_keeps_panel_hidden() {
    let catalog = seven_doctors();
    let log = EffectLog::new();
    let mut screen = AdminScreen::new();

    assert!(!screen.login("hunter2", &catalog, &log).await);

    let view = screen.view();
    assert!(view.login_visible);
    assert!(!view.panel_visible);
    assert_eq!(view.password_error.as_deref(), Some(PASSWORD_ERROR_MESSAGE));
    assert_eq!(view.total_doctors, None);
    assert_eq!(catalog.fetch_count(), 0);
}

#[tokio::test]
async fn password_is_compared_verbatim() {
    let log = EffectLog::new();
    let mut screen = AdminScreen::new();
    assert!(!screen.login(" admin123", &seven_doctors(), &log).await);
    assert!(!screen.login("ADMIN123", &seven_doctors(), &log).await);
}

#[tokio::test]
async fn correct_password_reveals_panel_with_count() {
    let log = EffectLog::new();
    let mut screen = AdminScreen::new();

    assert!(screen.login(ADMIN_PASSWORD, &seven_doctors(), &log).await);

    let view = screen.view();
    assert!(!view.login_visible);
    assert!(view.panel_visible);
    assert_eq!(view.password_error, None);
    assert_eq!(view.total_doctors.as_deref(), Some("7"));
    assert!(log.snapshot().is_empty());
}

#[tokio::test]
async fn count_failure_shows_error_dialog_and_leaves_count_unset() {
    let log = EffectLog::new();
    let mut screen = AdminScreen::new();

    assert!(screen.login(ADMIN_PASSWORD, &FakeCatalog::failing(), &log).await);

    assert!(screen.view().panel_visible);
    assert_eq!(screen.total_doctors(), None);
    let effects = log.into_effects();
    let [Effect::Dialog(dialog)] = effects.as_slice() else {
        panic!("expected a single dialog, got {effects:?}");
    };
    assert_eq!(dialog.title, "Error");
    assert_eq!(dialog.text, "Failed to load doctor data");
}

#[tokio::test]
async fn logout_reloads() {
    let log = EffectLog::new();
    AdminScreen::new().logout(&log);
    assert_eq!(log.snapshot(), vec![Effect::Reload]);
}
