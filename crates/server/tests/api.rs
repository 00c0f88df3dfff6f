use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use career_core::time::fixed_now;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use server::{AppState, ServerConfig, router};
use services::Clock;
use tower::ServiceExt;

fn app() -> Router {
    router(
        AppState::in_memory(Clock::fixed(fixed_now())),
        &ServerConfig::default(),
    )
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

fn post(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request")
}

fn ada() -> Value {
    json!({
        "fullName": "Ada",
        "email": "ada@x.com",
        "password": "secret1",
        "dreamJob": "frontend",
        "dailyTime": "2"
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, _) = send(&app, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn signup_then_duplicate_then_login() {
    let app = app();

    let (status, profile) = send(&app, post("/users", &ada())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(profile["fullName"], "Ada");
    assert_eq!(profile["email"], "ada@x.com");
    assert_eq!(profile["dreamJob"], "frontend");
    assert_eq!(profile["dailyTime"], "2");
    assert!(profile["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(profile.get("password").is_none());

    let (status, body) = send(&app, post("/users", &ada())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");

    let (status, logged_in) = send(
        &app,
        post("/login", &json!({"email": "ada@x.com", "password": "secret1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(logged_in["id"], profile["id"]);
    assert!(logged_in.get("password").is_none());
}

#[tokio::test]
async fn login_failures_do_not_say_which_field_was_wrong() {
    let app = app();
    send(&app, post("/users", &ada())).await;

    let (wrong_status, wrong) = send(
        &app,
        post("/login", &json!({"email": "ada@x.com", "password": "secret2"})),
    )
    .await;
    let (unknown_status, unknown) = send(
        &app,
        post("/login", &json!({"email": "bob@x.com", "password": "secret1"})),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong, unknown);
}

#[tokio::test]
async fn login_requires_both_fields() {
    let app = app();
    let (status, body) = send(&app, post("/login", &json!({"email": "ada@x.com"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation");
}

#[tokio::test]
async fn signup_rejects_bad_input() {
    let app = app();

    let mut missing = ada();
    missing.as_object_mut().unwrap().remove("password");
    let (status, body) = send(&app, post("/users", &missing)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "password is required");

    let mut bad_email = ada();
    bad_email["email"] = json!("not-an-email");
    let (status, _) = send(&app, post("/users", &bad_email)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut extra = ada();
    extra["isAdmin"] = json!(true);
    let (status, body) = send(&app, post("/users", &extra)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation");

    let request = Request::post("/users")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn signup_defaults_optional_fields() {
    let app = app();
    let (status, profile) = send(
        &app,
        post(
            "/users",
            &json!({"fullName": "Bo", "email": "bo@x.com", "password": "pw", "dailyTime": 4}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(profile["dreamJob"], "other");
    assert_eq!(profile["dailyTime"], "4");
}

#[tokio::test]
async fn get_user_by_email() {
    let app = app();
    send(&app, post("/users", &ada())).await;

    let (status, profile) = send(&app, get("/users/ADA@x.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["email"], "ada@x.com");

    let (status, body) = send(&app, get("/users/missing@x.com")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn progress_upsert_and_reads() {
    let app = app();

    let (status, body) = send(
        &app,
        post(
            "/progress",
            &json!({"userId": "u1", "roadmapId": "r1", "progress": 57}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userId"], "u1");
    assert_eq!(body["roadmapId"], "r1");
    assert_eq!(body["progress"], 57);

    send(
        &app,
        post(
            "/progress",
            &json!({"userId": "u1", "roadmapId": "r2", "progress": 0}),
        ),
    )
    .await;

    let (status, one) = send(&app, get("/progress/u1/r1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(one["progress"], 57);

    let (_, untouched) = send(&app, get("/progress/u1/r9")).await;
    assert_eq!(untouched["progress"], 0);

    let (_, all) = send(&app, get("/progress/u1")).await;
    assert_eq!(all["progress"], json!({"r1": 57, "r2": 0}));

    let (_, summary) = send(&app, get("/progress/u1/summary")).await;
    assert_eq!(summary["overall"], 28.5);
}

#[tokio::test]
async fn progress_rejects_out_of_range_and_missing_fields() {
    let app = app();

    for value in [101.0, -1.0] {
        let (status, body) = send(
            &app,
            post(
                "/progress",
                &json!({"userId": "u1", "roadmapId": "r1", "progress": value}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "range");
    }

    let (status, body) = send(
        &app,
        post("/progress", &json!({"userId": "u1", "progress": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "roadmapId is required");

    let (_, all) = send(&app, get("/progress/u1")).await;
    assert_eq!(all["progress"], json!({}));
}

#[tokio::test]
async fn summary_uses_account_dream_job() {
    let app = app();
    let mut data = ada();
    data["dreamJob"] = json!("data");
    let (_, profile) = send(&app, post("/users", &data)).await;
    let id = profile["id"].as_str().unwrap();

    let (status, summary) = send(&app, get(&format!("/api/progress/{id}/summary"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["overall"], 0.0);
    assert_eq!(summary["suggestedRoadmap"], "data-scientist");
    assert_eq!(summary["roadmaps"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn catalog_routes() {
    let app = app();

    let (status, roadmaps) = send(&app, get("/api/roadmaps")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(roadmaps.as_array().unwrap().len(), 4);
    assert_eq!(roadmaps[0]["id"], "frontend-dev");

    let (status, roadmap) = send(&app, get("/roadmaps/backend-dev")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(roadmap["steps"].as_array().unwrap().len(), 5);

    let (status, _) = send(&app, get("/roadmaps/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, all) = send(&app, get("/resources")).await;
    let (_, tagged) = send(&app, get("/resources?tag=all")).await;
    assert_eq!(all, tagged);
    let (_, none) = send(&app, get("/resources?tag=unknown-tag")).await;
    assert_eq!(none, json!([]));
}
