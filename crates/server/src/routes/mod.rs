use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

mod catalog;
mod progress;
mod users;

pub use catalog::{get_roadmap_handler, list_resources_handler, list_roadmaps_handler};
pub use progress::{
    get_progress_handler, list_progress_handler, progress_summary_handler, upsert_progress_handler,
};
pub use users::{get_user_handler, login_handler, signup_handler};

#[derive(Serialize)]
struct Health {
    status: &'static str,
    message: &'static str,
}

pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(Health {
            status: "ok",
            message: "Server is running",
        }),
    )
}

/// Accepts `"3"` and `3` alike; forms send strings, scripts send numbers.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl TextOrNumber {
    fn into_text(self) -> String {
        match self {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number.to_string(),
        }
    }
}
