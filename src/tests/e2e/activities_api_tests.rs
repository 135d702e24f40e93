use crate::modules::activities::adapters::outbound::registry::ActivityRegistry;
use crate::modules::activities::adapters::outbound::registry_in_memory::InMemoryActivityRegistry;
use crate::shell::http::router;
use crate::shell::state::AppState;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use std::sync::Arc;
use tower::ServiceExt;

#[fixture]
fn seeded() -> (AppState, Router) {
    let state = AppState::new(Arc::new(InMemoryActivityRegistry::default()));
    let app = router(state.clone());
    (state, app)
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[rstest]
#[tokio::test]
async fn lists_the_seeded_activities(seeded: (AppState, Router)) {
    let (_, app) = seeded;
    let (status, json) = send(&app, "GET", "/activities").await;

    assert_eq!(status, StatusCode::OK);
    for name in ["Chess Club", "Programming Class", "Gym Class"] {
        assert!(json.get(name).is_some(), "missing {name}");
    }
}

#[rstest]
#[tokio::test]
async fn sign_up_is_visible_in_the_registry_and_the_listing(
    seeded: (AppState, Router),
) {
    let (state, app) = seeded;
    let email = "test_user_signup@example.com";

    let (status, _) = send(
        &app,
        "POST",
        "/activities/Chess%20Club/signup?email=test_user_signup%40example.com",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let catalog = state.registry.list().await.unwrap();
    assert!(catalog.get("Chess Club").unwrap().is_signed_up(email));

    let (status, json) = send(&app, "GET", "/activities").await;
    assert_eq!(status, StatusCode::OK);
    let participants = json["Chess Club"]["participants"].as_array().unwrap();
    assert!(participants.iter().any(|p| p == email));
}

#[rstest]
#[tokio::test]
async fn unregister_removes_a_freshly_signed_up_participant(
    seeded: (AppState, Router),
) {
    let (state, app) = seeded;
    let email = "test_user_unregister@example.com";

    let (status, _) = send(
        &app,
        "POST",
        "/activities/Programming%20Class/signup?email=test_user_unregister%40example.com",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "POST",
        "/activities/Programming%20Class/unregister?email=test_user_unregister%40example.com",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let catalog = state.registry.list().await.unwrap();
    assert!(!catalog.get("Programming Class").unwrap().is_signed_up(email));
}

#[rstest]
#[tokio::test]
async fn signing_up_for_an_unknown_activity_changes_nothing(
    seeded: (AppState, Router),
) {
    let (state, app) = seeded;
    let before = state.registry.list().await.unwrap();

    let (status, json) = send(
        &app,
        "POST",
        "/activities/Underwater%20Basket%20Weaving/signup?email=a@example.com",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Activity not found");
    assert_eq!(state.registry.list().await.unwrap(), before);
}

#[rstest]
#[tokio::test]
async fn signing_up_twice_keeps_a_single_entry(seeded: (AppState, Router)) {
    let (_, app) = seeded;
    let uri = "/activities/Gym%20Class/signup?email=twice@example.com";

    let (first, _) = send(&app, "POST", uri).await;
    let (second, _) = send(&app, "POST", uri).await;
    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);

    let (_, json) = send(&app, "GET", "/activities").await;
    let participants = json["Gym Class"]["participants"].as_array().unwrap();
    assert_eq!(
        participants
            .iter()
            .filter(|p| *p == "twice@example.com")
            .count(),
        1
    );
}

#[rstest]
#[tokio::test]
async fn reset_restores_the_seed_between_scenarios(
    seeded: (AppState, Router),
) {
    let (state, app) = seeded;
    let initial = state.registry.list().await.unwrap();

    let (signed_up, _) = send(
        &app,
        "POST",
        "/activities/Chess%20Club/signup?email=temp@example.com",
    )
    .await;
    let (unregistered, _) = send(
        &app,
        "POST",
        "/activities/Chess%20Club/unregister?email=michael@mergington.edu",
    )
    .await;
    assert_eq!(signed_up, StatusCode::OK);
    assert_eq!(unregistered, StatusCode::OK);
    assert_ne!(state.registry.list().await.unwrap(), initial);

    state.registry.reset().await.unwrap();
    assert_eq!(state.registry.list().await.unwrap(), initial);
}
