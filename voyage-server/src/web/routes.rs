//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::{DateTime, Duration, Utc};
use tower_http::services::ServeDir;
use tracing::{error, warn};

use crate::context::ScheduleError;
use crate::domain::Window;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Window length used when the request gives no end time.
const DEFAULT_WINDOW_HOURS: i64 = 24;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/keywords", get(list_keywords))
        .route("/api/voyages", get(search_voyages))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form.
async fn index_page(State(state): State<AppState>) -> Response {
    match state.schedule.context().await {
        Ok(context) => {
            let template = IndexTemplate {
                keywords: KeywordView::from_table(&context.aliases),
            };
            Html(
                template
                    .render()
                    .unwrap_or_else(|e| format!("Template error: {}", e)),
            )
            .into_response()
        }
        Err(e) => {
            let template = ErrorTemplate {
                title: "Schedule unavailable".to_string(),
                message: e.to_string(),
            };
            let body = template
                .render()
                .unwrap_or_else(|e| format!("Template error: {}", e));
            (StatusCode::SERVICE_UNAVAILABLE, Html(body)).into_response()
        }
    }
}

/// List keyword aliases.
async fn list_keywords(
    State(state): State<AppState>,
) -> Result<Json<KeywordListResponse>, AppError> {
    let context = state.schedule.context().await?;

    let keywords = context
        .aliases
        .entries()
        .into_iter()
        .map(|(name, routes)| KeywordResult {
            name: name.to_string(),
            routes: routes.iter().cloned().collect(),
        })
        .collect();

    Ok(Json(KeywordListResponse { keywords }))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Parse an optional RFC 3339 query parameter.
fn parse_instant(name: &str, value: Option<&str>) -> Result<Option<DateTime<Utc>>, AppError> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| {
            DateTime::parse_from_rfc3339(v)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|_| AppError::BadRequest {
                    message: format!("Invalid {name} time (expected RFC 3339): {v}"),
                })
        })
        .transpose()
}

/// Build the raw search window from the request, defaulting to the next 24 hours.
///
/// Windows longer than `max_window` are rejected.
fn requested_window(
    req: &VoyageSearchRequest,
    now: DateTime<Utc>,
    max_window: Duration,
) -> Result<Window, AppError> {
    let start = parse_instant("start", req.start.as_deref())?.unwrap_or(now);
    let end = parse_instant("end", req.end.as_deref())?
        .unwrap_or(start + Duration::hours(DEFAULT_WINDOW_HOURS));

    let window = Window::new(start, end);
    if window.length() > max_window {
        return Err(AppError::BadRequest {
            message: format!(
                "Search window too long: at most {} days allowed",
                max_window.num_days()
            ),
        });
    }
    Ok(window)
}

/// Search for voyages matching keywords in a time window.
async fn search_voyages(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<VoyageSearchRequest>,
) -> Result<Response, AppError> {
    let mut window = requested_window(&req, Utc::now(), state.max_window)?;
    let tokens = req.tokens();

    let voyages = state.schedule.compute(tokens, &mut window).await?;

    if accepts_html(&headers) {
        let template = VoyageListTemplate {
            voyages: voyages.iter().map(VoyageView::from).collect(),
            window_start: format_instant(window.start),
            window_end: format_instant(window.end),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;
        return Ok(Html(html).into_response());
    }

    let response = VoyageSearchResponse {
        voyages: voyages.iter().map(VoyageResult::from).collect(),
        window: WindowResult::from(&window),
    };
    Ok(Json(response).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unavailable { message: String },
    Internal { message: String },
}

impl From<ScheduleError> for AppError {
    fn from(e: ScheduleError) -> Self {
        match e {
            ScheduleError::NotInitialized => AppError::Unavailable {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "bad request");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
