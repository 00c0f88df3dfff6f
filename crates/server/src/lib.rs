//! HTTP surface for the career-roadmap tracker.
//!
//! Every route is served at the root and again under `/api`, which is where
//! the browser front end points its base URL.
//!
//! | Method | Path | |
//! |---|---|---|
//! | GET | `/health` | liveness |
//! | POST | `/users` | sign up |
//! | POST | `/login` | check credentials |
//! | GET | `/users/{email}` | profile by email |
//! | POST | `/progress` | upsert one roadmap percentage |
//! | GET | `/progress/{userId}` | all touched roadmaps |
//! | GET | `/progress/{userId}/summary` | dashboard overview |
//! | GET | `/progress/{userId}/{roadmapId}` | one percentage, 0 if untouched |
//! | GET | `/roadmaps`, `/roadmaps/{id}` | catalog |
//! | GET | `/resources?tag=` | learning resources |
//!
//! Failures answer `{"error": kind, "message": text}`.
#![forbid(unsafe_code)]

use std::future::Future;
use std::io;
use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use state::AppState;

use routes::{
    get_progress_handler, get_roadmap_handler, get_user_handler, health_handler,
    list_progress_handler, list_resources_handler, list_roadmaps_handler, login_handler,
    progress_summary_handler, signup_handler, upsert_progress_handler,
};

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/users", post(signup_handler))
        .route("/users/{email}", get(get_user_handler))
        .route("/login", post(login_handler))
        .route("/progress", post(upsert_progress_handler))
        .route("/progress/{user_id}", get(list_progress_handler))
        .route("/progress/{user_id}/summary", get(progress_summary_handler))
        .route("/progress/{user_id}/{roadmap_id}", get(get_progress_handler))
        .route("/roadmaps", get(list_roadmaps_handler))
        .route("/roadmaps/{roadmap_id}", get(get_roadmap_handler))
        .route("/resources", get(list_resources_handler))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(%origin, error = %e, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(60 * 60))
}

/// Build the full application router.
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(api_routes())
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an I/O error if the address cannot be bound or the server fails.
pub async fn serve(config: &ServerConfig, state: AppState) -> io::Result<()> {
    let address = config.address();
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;

    let app = router(state, config);
    serve_on(listener, app, shutdown_signal()).await?;

    info!("Server shut down");
    Ok(())
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
///
/// # Errors
///
/// Returns an I/O error if the server loop fails.
pub async fn serve_on<F>(listener: TcpListener, app: Router, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(local) = listener.local_addr() {
        info!("Server running on {local}");
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
