mod common;

use common::{FakeCatalog, roster};
use medconnect_screens::directory::{DirectoryBody, DirectoryScreen, LOAD_FAILED_MESSAGE};

fn card_ids(body: &DirectoryBody) -> Vec<String> {
    match body {
        DirectoryBody::Grid { cards } => cards.iter().map(|c| c.id.clone()).collect(),
        other => panic!("expected grid, got {other:?}"),
    }
}

#[tokio::test]
async fn starts_loading_then_shows_every_doctor() {
    let catalog = FakeCatalog::serving(roster());
    let mut screen = DirectoryScreen::new();
    assert_eq!(screen.view().body, DirectoryBody::Loading);

    screen.activate(&catalog).await;

    let view = screen.view();
    assert_eq!(card_ids(&view.body), vec!["d1", "d2", "d3"]);
    assert_eq!(catalog.fetch_count(), 1);

    let DirectoryBody::Grid { cards } = view.body else {
        unreachable!()
    };
    assert_eq!(cards[0].profile_href, "doctor.html?id=d1");
    assert_eq!(cards[0].photo_url, "https://via.placeholder.com/150");
}

#[tokio::test]
async fn options_come_from_the_fetched_list() {
    let catalog = FakeCatalog::serving(roster());
    let mut screen = DirectoryScreen::new();
    screen.activate(&catalog).await;

    let labels: Vec<&str> = screen
        .options()
        .specializations
        .iter()
        .map(|o| o.label.as_str())
        .collect();
    assert_eq!(labels, vec!["All Specializations", "Cardiology", "Neurology"]);

    let branches: Vec<&str> = screen.options().branches.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(branches, vec!["", "Main", "Westside"]);
}

#[tokio::test]
async fn filters_recompute_on_every_change() {
    let catalog = FakeCatalog::serving(roster());
    let mut screen = DirectoryScreen::new();
    screen.activate(&catalog).await;

    screen.select_specialization("Cardiology");
    assert_eq!(card_ids(&screen.view().body), vec!["d1", "d3"]);

    screen.select_branch("Westside");
    assert_eq!(card_ids(&screen.view().body), vec!["d3"]);

    screen.set_search("ben");
    assert_eq!(screen.view().body, DirectoryBody::NoResults);

    // Filtering never refetches.
    assert_eq!(catalog.fetch_count(), 1);
}

#[tokio::test]
async fn clear_restores_full_list_and_empties_inputs() {
    let catalog = FakeCatalog::serving(roster());
    let mut screen = DirectoryScreen::new();
    screen.activate(&catalog).await;

    screen.set_search("zzz");
    screen.select_branch("Main");
    assert_eq!(screen.view().body, DirectoryBody::NoResults);

    screen.clear_filters();
    let view = screen.view();
    assert!(view.filter.is_empty());
    assert_eq!(card_ids(&view.body), vec!["d1", "d2", "d3"]);
}

#[tokio::test]
async fn fetch_failure_replaces_loading_with_error() {
    let mut screen = DirectoryScreen::new();
    screen.activate(&FakeCatalog::failing()).await;

    assert_eq!(
        screen.view().body,
        DirectoryBody::Error {
            message: LOAD_FAILED_MESSAGE.to_string()
        }
    );
    assert!(screen.visible().is_none());
}

#[tokio::test]
async fn empty_list_shows_no_results() {
    let mut screen = DirectoryScreen::new();
    screen.activate(&FakeCatalog::serving(Vec::new())).await;
    assert_eq!(screen.view().body, DirectoryBody::NoResults);
}
