// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_htmx::HxRequest;
use serde::Deserialize;

use crate::api_server::AppState;
use crate::profile::FetchError;

// ============================================================================
// Templates
// ============================================================================

/// Full page shell. With `content_url` set the body is loaded by htmx
/// after the page arrives; otherwise `content` is embedded directly.
#[derive(Template)]
#[template(path = "pages/profile.html")]
pub struct ProfilePageTemplate {
    pub title: String,
    pub content_url: Option<String>,
    pub content: Option<String>,
}

#[derive(Template)]
#[template(path = "partials/profile_error.html")]
pub struct ProfileErrorTemplate {
    pub message: String,
    pub retry_url: String,
    pub school_id: String,
}

#[derive(Template)]
#[template(path = "partials/school_picker.html")]
pub struct SchoolPickerTemplate {
    pub school_id: String,
}

fn render_or_error(template: &impl Template) -> String {
    template.render().unwrap_or_else(|e| {
        tracing::error!("Template error: {}", e);
        format!("Template error: {}", e)
    })
}

pub fn content_url(school_id: &str) -> String {
    format!("/schools/{}/content", urlencoding::encode(school_id))
}

/// Visitor-facing text for a failed load.
fn fetch_error_message(error: &FetchError) -> String {
    match error {
        FetchError::Rejected(message) => message.clone(),
        FetchError::Status { status: 404 } => "This school profile could not be found.".to_string(),
        _ => "The school profile service is not responding right now.".to_string(),
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// `/` goes to the configured default school, or shows the picker.
pub async fn index_page(State(state): State<AppState>) -> Response {
    if let Some(school_id) = &state.config.default_school_id {
        let location = format!("/schools/{}", urlencoding::encode(school_id));
        return Redirect::to(&location).into_response();
    }
    let page = ProfilePageTemplate {
        title: "School Profiles".to_string(),
        content_url: None,
        content: Some(render_or_error(&SchoolPickerTemplate { school_id: String::new() })),
    };
    Html(render_or_error(&page)).into_response()
}

#[derive(Debug, Deserialize)]
pub struct SchoolQuery {
    #[serde(default)]
    pub id: String,
}

/// Picker form target: `/schools?id=...`.
pub async fn school_lookup(Query(query): Query<SchoolQuery>) -> Redirect {
    let id = query.id.trim();
    if id.is_empty() {
        return Redirect::to("/");
    }
    Redirect::to(&format!("/schools/{}", urlencoding::encode(id)))
}

// ============================================================================
// Profile Page
// ============================================================================

/// Page shell with a loading placeholder; the body arrives via htmx.
pub async fn profile_page(Path(school_id): Path<String>) -> impl IntoResponse {
    let template = ProfilePageTemplate {
        title: "School Profile".to_string(),
        content_url: Some(content_url(&school_id)),
        content: None,
    };
    Html(render_or_error(&template))
}

/// Composed body. htmx requests get the bare fragment; plain requests get
/// the full page. Failures render the retry prompt, never a blank page.
pub async fn profile_content(
    State(state): State<AppState>,
    Path(school_id): Path<String>,
    HxRequest(is_htmx): HxRequest,
) -> Response {
    let (status, title, fragment) = match state.profiles.load(&school_id).await {
        Ok(profile) => {
            let composed = state.composer.compose(&profile);
            match composed.render_body() {
                Ok(body) => (StatusCode::OK, profile.display_name().to_string(), body),
                Err(e) => {
                    tracing::error!("Failed to render profile {}: {}", school_id, e);
                    let error = ProfileErrorTemplate {
                        message: "This school profile could not be displayed.".to_string(),
                        retry_url: content_url(&school_id),
                        school_id: school_id.clone(),
                    };
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "School Profile".to_string(),
                        render_or_error(&error),
                    )
                }
            }
        }
        Err(e) => {
            let error = ProfileErrorTemplate {
                message: fetch_error_message(&e),
                retry_url: content_url(&school_id),
                school_id: school_id.clone(),
            };
            (StatusCode::BAD_GATEWAY, "School Profile".to_string(), render_or_error(&error))
        }
    };

    if is_htmx {
        // htmx only swaps 2xx responses, so the retry prompt goes out as 200
        return Html(fragment).into_response();
    }

    let page = ProfilePageTemplate {
        title,
        content_url: None,
        content: Some(fragment),
    };
    (status, Html(render_or_error(&page))).into_response()
}
