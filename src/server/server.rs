use anyhow::{Context, Result};
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use crate::catalog::CareerPath;
use crate::progress::{ProgressStore, ProgressTracker, ProgressUpdate};

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::{log_requests, state::*, ServerConfig};

const GREETING: &str = "SUPERCHARGE API - Career Roadmap Platform";

#[derive(Serialize)]
struct ServerStats {
    pub message: String,
    pub uptime: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    pub detail: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

fn not_found(detail: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            detail: detail.to_owned(),
        }),
    )
        .into_response()
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    Json(ServerStats {
        message: GREETING.to_owned(),
        uptime: format_uptime(state.start_time.elapsed()),
    })
}

async fn get_career_paths(State(catalog): State<GuardedCatalog>) -> Response {
    let paths: Vec<CareerPath> = catalog.career_paths().to_vec();
    Json(paths).into_response()
}

async fn get_career_path(
    State(catalog): State<GuardedCatalog>,
    Path(id): Path<String>,
) -> Response {
    match catalog.get_career_path(&id) {
        Some(path) => Json(path).into_response(),
        None => not_found("Career path not found"),
    }
}

async fn get_user_progress(
    State(tracker): State<GuardedProgressTracker>,
    Path(user_id): Path<String>,
) -> Response {
    match tracker.get_all_progress(&user_id) {
        Ok(progress) => Json(progress).into_response(),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", err)).into_response(),
    }
}

async fn get_path_progress(
    State(tracker): State<GuardedProgressTracker>,
    Path((user_id, path_id)): Path<(String, String)>,
) -> Response {
    match tracker.get_path_progress(&user_id, &path_id) {
        Ok(progress) => Json(progress).into_response(),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", err)).into_response(),
    }
}

async fn post_progress(
    State(tracker): State<GuardedProgressTracker>,
    Path((user_id, path_id)): Path<(String, String)>,
    Json(body): Json<ProgressUpdate>,
) -> Response {
    match tracker.update_progress(&user_id, &path_id, &body.milestone_id, body.completed) {
        Ok(ack) => Json(ack).into_response(),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", err)).into_response(),
    }
}

impl ServerState {
    fn new(
        config: ServerConfig,
        catalog: GuardedCatalog,
        progress_tracker: GuardedProgressTracker,
    ) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            catalog,
            progress_tracker,
        }
    }
}

fn make_cors_layer(cors_origins: &[String]) -> Result<CorsLayer> {
    let allow_origin = if cors_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins = cors_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin \"{}\"", origin))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

pub fn make_app(
    config: ServerConfig,
    catalog: GuardedCatalog,
    progress_store: Arc<dyn ProgressStore>,
) -> Result<Router> {
    let progress_tracker = Arc::new(ProgressTracker::new(progress_store));
    let state = ServerState::new(config.clone(), catalog, progress_tracker);

    let api_routes: Router = Router::new()
        .route("/", get(home))
        .route("/career-paths", get(get_career_paths))
        .route("/career-paths/{id}", get(get_career_path))
        .route("/progress/{user_id}", get(get_user_progress))
        .route("/progress/{user_id}/{path_id}", get(get_path_progress))
        .route("/progress/{user_id}/{path_id}", post(post_progress))
        .with_state(state.clone());

    let mut app: Router = Router::new()
        .nest("/api", api_routes)
        .layer(make_cors_layer(&config.cors_origins)?);

    app = app.layer(middleware::from_fn_with_state(state.clone(), log_requests));

    Ok(app)
}

pub async fn run_server(
    catalog: GuardedCatalog,
    progress_store: Arc<dyn ProgressStore>,
    requests_logging_level: super::RequestsLoggingLevel,
    port: u16,
    cors_origins: Vec<String>,
) -> Result<()> {
    let config = ServerConfig {
        requests_logging_level,
        port,
        cors_origins,
    };
    let app = make_app(config, catalog, progress_store)?;

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .unwrap();

    Ok(axum::serve(listener, app).await?)
}
