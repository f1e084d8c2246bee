//! HTTP request handlers for the web server.

use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};

use super::templates;
use super::AppState;
use crate::matcher;
use crate::models::UploadedFile;
use crate::parser::{self, FileFormat, ParseError};

/// Client-facing message for internal parse failures. Details stay in logs.
const PROCESS_FAILED: &str = "Failed to process files. Please check formats.";

/// Upload page.
pub async fn index() -> impl IntoResponse {
    Html(templates::upload_page())
}

/// Health check with process uptime.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "uptime": state.started.elapsed().as_secs_f64(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Accept the two uploaded files, run the matching pipeline and return the
/// result as JSON.
///
/// Format detection runs on both filenames before any parsing, so a bad
/// extension is rejected up front no matter what the other file contains.
/// The two payloads are then parsed concurrently on the blocking pool.
pub async fn check_bonds(mut multipart: Multipart) -> Response {
    let mut user_file: Option<UploadedFile> = None;
    let mut draw_file: Option<UploadedFile> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Malformed multipart payload: {}", e);
                return error_response(StatusCode::BAD_REQUEST, "Invalid upload payload");
            }
        };

        let slot = match field.name() {
            Some("userFile") => &mut user_file,
            Some("drawFile") => &mut draw_file,
            _ => continue,
        };
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content = match field.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                tracing::warn!("Failed to read uploaded file: {}", e);
                return error_response(StatusCode::BAD_REQUEST, "Invalid upload payload");
            }
        };
        *slot = Some(UploadedFile::new(filename, content));
    }

    let (Some(user_file), Some(draw_file)) = (user_file, draw_file) else {
        return error_response(StatusCode::BAD_REQUEST, &ParseError::MissingInput.to_string());
    };
    if user_file.content.is_empty() || draw_file.content.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, &ParseError::MissingInput.to_string());
    }

    for filename in [&user_file.filename, &draw_file.filename] {
        if let Err(e) = FileFormat::from_filename(filename) {
            return error_response(StatusCode::BAD_REQUEST, &e.to_string());
        }
    }

    let user_task = tokio::task::spawn_blocking(move || parser::parse_bond_file(&user_file));
    let draw_task = tokio::task::spawn_blocking(move || parser::parse_bond_file(&draw_file));

    let user_tokens = match collect_tokens(user_task).await {
        Ok(tokens) => tokens,
        Err(response) => return response,
    };
    let draw_tokens = match collect_tokens(draw_task).await {
        Ok(tokens) => tokens,
        Err(response) => return response,
    };

    let result = matcher::compute_matches(&user_tokens, &draw_tokens);
    tracing::info!(
        "Checked {} user bonds against {} draw tokens: {} matched",
        result.total_user_bonds,
        draw_tokens.len(),
        result.matches.len()
    );
    Json(result).into_response()
}

/// Await a parse task and map its failure modes onto error responses.
async fn collect_tokens(
    task: tokio::task::JoinHandle<Result<Vec<String>, ParseError>>,
) -> Result<Vec<String>, Response> {
    match task.await {
        Ok(Ok(tokens)) => Ok(tokens),
        Ok(Err(e @ (ParseError::MissingInput | ParseError::UnsupportedFileType(_)))) => {
            Err(error_response(StatusCode::BAD_REQUEST, &e.to_string()))
        }
        Ok(Err(e)) => {
            tracing::error!("File parsing failed: {}", e);
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                PROCESS_FAILED,
            ))
        }
        Err(e) => {
            tracing::error!("Parse task failed to complete: {}", e);
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                PROCESS_FAILED,
            ))
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

/// Serve the embedded CSS file.
pub async fn serve_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], templates::CSS)
}

/// Serve the embedded JS file.
pub async fn serve_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], templates::JS)
}
