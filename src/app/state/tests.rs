use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use super::{AppState, is_city_char};
use crate::{
    app::{
        events::AppEvent,
        settings::{MotionSetting, RuntimeSettings},
    },
    domain::view::{Branch, DashboardView},
    test_support::{test_state, tokyo},
};

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn ctrl(ch: char) -> AppEvent {
    AppEvent::Input(Event::Key(KeyEvent::new(
        KeyCode::Char(ch),
        KeyModifiers::CONTROL,
    )))
}

async fn type_query(state: &mut AppState, tx: &mpsc::Sender<AppEvent>, text: &str) {
    for ch in text.chars() {
        state
            .handle_event(key(KeyCode::Char(ch)), tx)
            .await
            .expect("typing");
    }
}

/// Feeds queued events back into the state until the lookup settles.
async fn pump_until_settled(
    state: &mut AppState,
    tx: &mpsc::Sender<AppEvent>,
    rx: &mut mpsc::Receiver<AppEvent>,
) {
    while let Some(event) = rx.recv().await {
        let settled = matches!(
            event,
            AppEvent::FetchSucceeded(_) | AppEvent::FetchFailed(_)
        );
        state.handle_event(event, tx).await.expect("handle event");
        if settled {
            break;
        }
    }
}

#[test]
fn city_input_accepts_unicode_letters() {
    assert!(is_city_char('å'));
    assert!(is_city_char('É'));
    assert!(is_city_char('\''));
}

#[test]
fn city_input_rejects_control_chars() {
    assert!(!is_city_char('\n'));
    assert!(!is_city_char('\t'));
    assert!(!is_city_char('<'));
}

#[test]
fn new_state_starts_empty() {
    let state = test_state();
    assert!(state.running);
    assert_eq!(state.inputs.resolve(), DashboardView::Empty);
}

#[tokio::test]
async fn search_flows_through_loading_into_weather() {
    let (tx, mut rx) = mpsc::channel(16);
    let mut state = test_state();

    type_query(&mut state, &tx, "Tokyo").await;
    assert_eq!(state.query, "Tokyo");
    state
        .handle_event(key(KeyCode::Enter), &tx)
        .await
        .expect("enter");
    assert!(state.query.is_empty());

    let started = rx.recv().await.expect("fetch started");
    assert!(matches!(&started, AppEvent::FetchStarted { query } if query == "Tokyo"));
    state.handle_event(started, &tx).await.expect("started");
    assert_eq!(state.inputs.resolve().branch(), Branch::Loading);

    pump_until_settled(&mut state, &tx, &mut rx).await;
    let expected = tokyo();
    assert_eq!(state.inputs.resolve(), DashboardView::Weather(&expected));
    assert!(!state.fetch_in_flight);
}

#[tokio::test]
async fn unknown_city_lands_in_error_branch() {
    let (tx, mut rx) = mpsc::channel(16);
    let mut state = test_state();

    state
        .start_search("Atlantis".to_string(), &tx)
        .await
        .expect("search");
    pump_until_settled(&mut state, &tx, &mut rx).await;

    assert_eq!(
        state.inputs.resolve(),
        DashboardView::Error("No weather data found for \"Atlantis\"")
    );
}

#[tokio::test]
async fn blank_query_reports_error_without_loading() {
    let (tx, mut rx) = mpsc::channel(16);
    let mut state = test_state();

    state
        .handle_event(key(KeyCode::Enter), &tx)
        .await
        .expect("enter");
    let event = rx.recv().await.expect("failure event");
    assert!(matches!(event, AppEvent::FetchFailed(_)));
    state.handle_event(event, &tx).await.expect("failed");

    assert_eq!(
        state.inputs.resolve(),
        DashboardView::Error("Please enter a city name")
    );
    assert!(state.last_query.is_none());
}

#[tokio::test]
async fn failed_refresh_masks_previous_weather_until_cleared() {
    let (tx, _rx) = mpsc::channel(16);
    let mut state = test_state();

    state
        .handle_event(AppEvent::FetchSucceeded(tokyo()), &tx)
        .await
        .expect("success");
    state
        .handle_event(AppEvent::FetchFailed("API request failed".to_string()), &tx)
        .await
        .expect("failure");
    assert_eq!(
        state.inputs.resolve(),
        DashboardView::Error("API request failed")
    );
    assert!(state.inputs.current_weather.is_some());

    state.handle_event(ctrl('l'), &tx).await.expect("clear");
    assert_eq!(state.inputs.resolve(), DashboardView::Empty);
}

#[tokio::test]
async fn second_search_is_ignored_while_in_flight() {
    let (tx, mut rx) = mpsc::channel(16);
    let mut state = test_state();

    state
        .start_search("Paris".to_string(), &tx)
        .await
        .expect("first search");
    state
        .start_search("Tokyo".to_string(), &tx)
        .await
        .expect("second search");
    assert_eq!(state.last_query.as_deref(), Some("Paris"));

    pump_until_settled(&mut state, &tx, &mut rx).await;
    let weather = state.inputs.current_weather.as_ref().expect("weather");
    assert_eq!(weather.city, "Paris");
}

#[tokio::test]
async fn enter_during_lookup_keeps_typed_query() {
    let (tx, mut rx) = mpsc::channel(16);
    let mut state = test_state();

    state
        .start_search("Paris".to_string(), &tx)
        .await
        .expect("first search");
    type_query(&mut state, &tx, "Tokyo").await;
    state
        .handle_event(key(KeyCode::Enter), &tx)
        .await
        .expect("enter");

    assert_eq!(state.query, "Tokyo");
    assert_eq!(state.last_query.as_deref(), Some("Paris"));

    pump_until_settled(&mut state, &tx, &mut rx).await;
    state
        .handle_event(key(KeyCode::Enter), &tx)
        .await
        .expect("enter after settle");
    assert!(state.query.is_empty());
    assert_eq!(state.last_query.as_deref(), Some("Tokyo"));
}

#[tokio::test]
async fn ctrl_r_repeats_last_search() {
    let (tx, mut rx) = mpsc::channel(16);
    let mut state = test_state();

    state
        .start_search("London".to_string(), &tx)
        .await
        .expect("search");
    pump_until_settled(&mut state, &tx, &mut rx).await;
    state.clear_result();

    state.handle_event(ctrl('r'), &tx).await.expect("retry");
    pump_until_settled(&mut state, &tx, &mut rx).await;
    assert_eq!(
        state
            .inputs
            .current_weather
            .as_ref()
            .map(|w| w.city.as_str()),
        Some("London")
    );
}

#[tokio::test]
async fn escape_clears_query_before_quitting() {
    let (tx, mut rx) = mpsc::channel(16);
    let mut state = test_state();

    type_query(&mut state, &tx, "Os").await;
    state.handle_event(key(KeyCode::Esc), &tx).await.expect("esc");
    assert!(state.query.is_empty());
    assert!(rx.try_recv().is_err());

    state.handle_event(key(KeyCode::Esc), &tx).await.expect("esc");
    let event = rx.recv().await.expect("quit event");
    assert!(matches!(event, AppEvent::Quit));
    state.handle_event(event, &tx).await.expect("quit");
    assert!(!state.running);
}

#[tokio::test]
async fn backspace_edits_query() {
    let (tx, _rx) = mpsc::channel(16);
    let mut state = test_state();

    type_query(&mut state, &tx, "Romee").await;
    state
        .handle_event(key(KeyCode::Backspace), &tx)
        .await
        .expect("backspace");
    assert_eq!(state.query, "Rome");
}

#[tokio::test]
async fn frame_ticks_advance_counter() {
    let (tx, _rx) = mpsc::channel(16);
    let mut state = test_state();
    state
        .handle_event(AppEvent::TickFrame, &tx)
        .await
        .expect("tick");
    state
        .handle_event(AppEvent::TickFrame, &tx)
        .await
        .expect("tick");
    assert_eq!(state.frame_tick, 2);
}

#[test]
fn cycle_motion_persists_settings() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("settings.json");
    let mut state = test_state().with_settings(RuntimeSettings::default(), Some(path.clone()));

    state.cycle_motion();

    assert_eq!(state.settings.motion, MotionSetting::Reduced);
    assert_eq!(state.decorations.motion(), MotionSetting::Reduced);
    let saved: RuntimeSettings =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("settings written"))
            .expect("parse settings");
    assert_eq!(saved.motion, MotionSetting::Reduced);
}
