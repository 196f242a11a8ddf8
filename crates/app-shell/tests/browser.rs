//! Browser-only tests: `wasm-pack test --headless --firefox crates/app-shell`

#![cfg(target_arch = "wasm32")]

use app_shell::zoon::futures_signals::signal::SignalExt;
use app_shell::zoon::futures_util::StreamExt;
use app_shell::zoon::{Timer, document, start_app, window};
use app_shell::{AppShell, Location, Navigation, View, navigation};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn pathname() -> String {
    window().location().pathname().unwrap()
}

fn rendered(view: View) -> bool {
    document()
        .query_selector(&format!(".App [data-view=\"{}\"]", view.name()))
        .unwrap()
        .is_some()
}

#[wasm_bindgen_test]
fn go_to_pushes_browser_history() {
    let navigation = Navigation::browser();
    assert!(navigation.is_browser());

    navigation.go_to("/unknown?tab=1").unwrap();
    assert_eq!(pathname(), "/unknown");
    assert_eq!(navigation.location(), Location::new("/unknown"));

    navigation.replace("/").unwrap();
    assert_eq!(pathname(), "/");
    assert_eq!(navigation.location(), Location::root());
}

#[wasm_bindgen_test]
fn relative_path_leaves_browser_location_alone() {
    let navigation = Navigation::browser();
    navigation.replace("/").unwrap();
    assert!(navigation.go_to("tokens").is_err());
    assert_eq!(pathname(), "/");
}

#[wasm_bindgen_test]
fn protocol_relative_path_is_rejected_before_history() {
    let navigation = Navigation::browser();
    navigation.replace("/").unwrap();
    assert!(navigation.go_to("//example.com/x").is_err());
    assert_eq!(pathname(), "/");
}

#[wasm_bindgen_test]
async fn back_updates_location_from_popstate() {
    let navigation = Navigation::browser();
    navigation.replace("/").unwrap();
    navigation.go_to("/unknown").unwrap();
    let mut locations = navigation.location_signal().to_stream();
    assert_eq!(locations.next().await, Some(Location::new("/unknown")));

    navigation.back().unwrap();
    Timer::sleep(50).await;
    assert_eq!(pathname(), "/");
    assert_eq!(navigation.location(), Location::root());
    assert_eq!(locations.next().await, Some(Location::root()));
}

#[wasm_bindgen_test]
async fn dropped_navigation_stops_following_history() {
    let dropped = Navigation::browser();
    dropped.replace("/").unwrap();
    dropped.go_to("/dropped").unwrap();
    let mut locations = dropped.location_signal().to_stream();
    assert_eq!(locations.next().await, Some(Location::new("/dropped")));
    drop(dropped);
    assert_eq!(locations.next().await, None);

    let navigation = Navigation::browser();
    navigation.back().unwrap();
    Timer::sleep(50).await;
    assert_eq!(navigation.location(), Location::root());
}

#[wasm_bindgen_test]
async fn shell_follows_navigation() {
    let app = document().create_element("div").unwrap();
    app.set_id("app");
    document().body().unwrap().append_child(&app).unwrap();

    start_app("app", AppShell::new);
    let navigation = navigation::current().unwrap();
    navigation.replace("/").unwrap();
    Timer::sleep(0).await;
    assert!(rendered(View::Tokens));
    assert!(rendered(View::Footer));

    navigation.go_to("/unknown").unwrap();
    Timer::sleep(0).await;
    assert!(!rendered(View::Tokens));
    assert!(rendered(View::Footer));

    navigation.replace("/").unwrap();
    Timer::sleep(0).await;
    assert!(rendered(View::Tokens));
}
