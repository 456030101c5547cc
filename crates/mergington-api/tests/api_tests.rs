//! Integration tests for the activities API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. Each test builds its own state from the seed
//! catalogue, so registry changes never leak between tests.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use mergington_api::router::build_router;
use mergington_api::state::AppState;
use mergington_core::ActivityRegistry;
use mergington_types::Activity;
use serde_json::Value;
use tower::ServiceExt;

const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../static");

fn make_router() -> (Arc<AppState>, Router) {
    let state = Arc::new(AppState::new(ActivityRegistry::seeded()));
    let router = build_router(Arc::clone(&state), STATIC_DIR);
    (state, router)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn encode(raw: &str) -> String {
    raw.replace(' ', "%20").replace('@', "%40")
}

fn post(activity: &str, action: &str, email: &str) -> Request<Body> {
    let uri = format!(
        "/activities/{}/{action}?email={}",
        encode(activity),
        encode(email)
    );
    Request::post(uri).body(Body::empty()).unwrap()
}

async fn get_activities(router: &Router) -> Value {
    let response = router
        .clone()
        .oneshot(Request::get("/activities").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_to_json(response.into_body()).await
}

fn participants(activities: &Value, name: &str) -> Vec<String> {
    activities[name]["participants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap().to_owned())
        .collect()
}

// =========================================================================
// Root
// =========================================================================

#[tokio::test]
async fn test_root_redirect() {
    let (_, router) = make_router();

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(location.contains("/static/index.html"));
}

#[tokio::test]
async fn test_static_index_is_served() {
    let (_, router) = make_router();

    let response = router
        .oneshot(
            Request::get("/static/index.html")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

// =========================================================================
// GET /activities
// =========================================================================

#[tokio::test]
async fn test_get_activities() {
    let (_, router) = make_router();
    let data = get_activities(&router).await;

    let map = data.as_object().unwrap();
    assert_eq!(map.len(), 9);

    let chess = &data["Chess Club"];
    assert!(chess["description"].is_string());
    assert!(chess["schedule"].is_string());
    assert_eq!(chess["max_participants"], 12);
    assert!(chess["participants"].is_array());
}

#[tokio::test]
async fn test_get_activities_has_all_required_fields() {
    let (_, router) = make_router();
    let data = get_activities(&router).await;

    for (name, activity) in data.as_object().unwrap() {
        for field in ["description", "schedule", "max_participants", "participants"] {
            assert!(activity.get(field).is_some(), "{name} missing {field}");
        }
        assert!(
            !activity["description"].as_str().unwrap().is_empty(),
            "{name} has no description"
        );
        assert!(
            !activity["schedule"].as_str().unwrap().is_empty(),
            "{name} has no schedule"
        );
        let count = u64::try_from(activity["participants"].as_array().unwrap().len()).unwrap();
        assert!(count <= activity["max_participants"].as_u64().unwrap());
    }
}

// =========================================================================
// POST /activities/{name}/signup
// =========================================================================

#[tokio::test]
async fn test_signup_valid() {
    let (_, router) = make_router();

    let response = router
        .clone()
        .oneshot(post("Chess Club", "signup", "newstudent@mergington.edu"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("newstudent@mergington.edu"));
    assert!(message.contains("Chess Club"));

    let data = get_activities(&router).await;
    assert_eq!(
        participants(&data, "Chess Club").last().map(String::as_str),
        Some("newstudent@mergington.edu")
    );
}

#[tokio::test]
async fn test_signup_duplicate_student() {
    let (_, router) = make_router();

    let response = router
        .clone()
        .oneshot(post("Chess Club", "signup", "michael@mergington.edu"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json["detail"].as_str().unwrap().contains("already signed up"));

    let data = get_activities(&router).await;
    assert_eq!(participants(&data, "Chess Club").len(), 2);
}

#[tokio::test]
async fn test_signup_nonexistent_activity() {
    let (_, router) = make_router();

    let response = router
        .oneshot(post("Nonexistent Activity", "signup", "newstudent@mergington.edu"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert!(json["detail"].as_str().unwrap().contains("Activity not found"));
}

#[tokio::test]
async fn test_signup_activity_full() {
    let (state, router) = make_router();

    for i in 0..8 {
        let response = router
            .clone()
            .oneshot(post(
                "Math Olympiad",
                "signup",
                &format!("student{i}@mergington.edu"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = router
        .clone()
        .oneshot(post("Math Olympiad", "signup", "overfull@mergington.edu"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json["detail"].as_str().unwrap().contains("no spots left"));

    let registry = state.registry.read().await;
    let math = registry.get("Math Olympiad").unwrap();
    assert_eq!(math.participant_count(), 10);
    assert!(!math.has_participant("overfull@mergington.edu"));
}

#[tokio::test]
async fn test_signup_duplicate_on_full_activity_reports_duplicate() {
    let (_, router) = make_router();

    for i in 0..8 {
        router
            .clone()
            .oneshot(post(
                "Math Olympiad",
                "signup",
                &format!("student{i}@mergington.edu"),
            ))
            .await
            .unwrap();
    }

    let response = router
        .oneshot(post("Math Olympiad", "signup", "ethan@mergington.edu"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json["detail"].as_str().unwrap().contains("already signed up"));
}

#[tokio::test]
async fn test_signup_missing_email_is_rejected() {
    let (state, router) = make_router();

    let response = router
        .oneshot(
            Request::post("/activities/Chess%20Club/signup")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let registry = state.registry.read().await;
    assert_eq!(
        registry.get("Chess Club").map(Activity::participant_count),
        Some(2)
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_signups_never_overfill() {
    let (state, router) = make_router();

    let mut handles = Vec::new();
    for i in 0..20 {
        let router = router.clone();
        handles.push(tokio::spawn(async move {
            router
                .oneshot(post(
                    "Math Olympiad",
                    "signup",
                    &format!("racer{i}@mergington.edu"),
                ))
                .await
                .unwrap()
                .status()
        }));
    }

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }

    let accepted = statuses.iter().filter(|s| **s == StatusCode::OK).count();
    let rejected = statuses
        .iter()
        .filter(|s| **s == StatusCode::BAD_REQUEST)
        .count();
    assert_eq!(accepted, 8);
    assert_eq!(rejected, 12);

    let registry = state.registry.read().await;
    assert_eq!(
        registry.get("Math Olympiad").map(Activity::participant_count),
        Some(10)
    );
}

// =========================================================================
// POST /activities/{name}/unregister
// =========================================================================

#[tokio::test]
async fn test_unregister_valid() {
    let (_, router) = make_router();

    let response = router
        .clone()
        .oneshot(post("Chess Club", "unregister", "michael@mergington.edu"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("michael@mergington.edu"));
    assert!(message.contains("Chess Club"));

    let data = get_activities(&router).await;
    assert_eq!(participants(&data, "Chess Club"), ["daniel@mergington.edu"]);
}

#[tokio::test]
async fn test_unregister_not_registered() {
    let (_, router) = make_router();

    let response = router
        .clone()
        .oneshot(post("Chess Club", "unregister", "notregistered@mergington.edu"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json["detail"].as_str().unwrap().contains("not registered"));

    let data = get_activities(&router).await;
    assert_eq!(
        participants(&data, "Chess Club"),
        ["michael@mergington.edu", "daniel@mergington.edu"]
    );
}

#[tokio::test]
async fn test_unregister_nonexistent_activity() {
    let (_, router) = make_router();

    let response = router
        .oneshot(post("Nonexistent Activity", "unregister", "michael@mergington.edu"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert!(json["detail"].as_str().unwrap().contains("Activity not found"));
}

#[tokio::test]
async fn test_unregister_then_signup_again() {
    let (_, router) = make_router();
    let email = "michael@mergington.edu";

    let response = router
        .clone()
        .oneshot(post("Chess Club", "unregister", email))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let data = get_activities(&router).await;
    assert!(!participants(&data, "Chess Club").iter().any(|p| p == email));

    let response = router
        .clone()
        .oneshot(post("Chess Club", "signup", email))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let data = get_activities(&router).await;
    assert!(participants(&data, "Chess Club").iter().any(|p| p == email));
}

#[tokio::test]
async fn test_nonexistent_route_returns_404() {
    let (_, router) = make_router();

    let response = router
        .oneshot(Request::get("/api/nonexistent").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
