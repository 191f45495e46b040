// Garment Studio: upload a garment photo, pick a pose, background and
// artistic style, and get back a professional fashion photo rendered on an
// invisible mannequin by Gemini.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::response::{Html, Json};
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use tower_http::cors::CorsLayer;

mod catalog;
mod error;
mod gemini;
mod ingest;
mod prompt;

use error::StudioError;
use gemini::GeminiClient;

// Headroom over the 10 MiB file rule so multipart framing does not trip the
// body limit before the explicit size check runs.
const BODY_LIMIT_BYTES: usize = 12 * 1024 * 1024;

struct AppState {
    gemini: GeminiClient,
}

#[derive(Serialize)]
struct EditResponse {
    image: gemini::ImagePart,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_text: Option<String>,
    model: &'static str,
    processing_time_ms: u128,
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

async fn options() -> Json<catalog::OptionsResponse> {
    Json(catalog::options())
}

async fn edit_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<EditResponse>, StudioError> {
    let start = Instant::now();

    let mut uploads = Vec::new();
    let mut selection = prompt::Selection {
        pose: String::new(),
        background: catalog::DEFAULT_BACKGROUND.to_string(),
        style: catalog::DEFAULT_STYLE.to_string(),
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| StudioError::InvalidUpload)?
    {
        match field.name().unwrap_or_default() {
            "image" => {
                let name = field.file_name().unwrap_or("image").to_string();
                let mime_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| StudioError::InvalidUpload)?;
                uploads.push(ingest::RawUpload {
                    name,
                    mime_type,
                    bytes: bytes.to_vec(),
                });
            }
            "pose" => {
                selection.pose = field.text().await.map_err(|_| StudioError::InvalidUpload)?;
            }
            "background" => {
                selection.background =
                    field.text().await.map_err(|_| StudioError::InvalidUpload)?;
            }
            "style" => {
                selection.style = field.text().await.map_err(|_| StudioError::InvalidUpload)?;
            }
            _ => {}
        }
    }

    let image = ingest::validate(uploads)?;
    if selection.pose.trim().is_empty() {
        return Err(StudioError::MissingPose);
    }

    let prompt = prompt::compose(&selection);
    let result = state
        .gemini
        .edit_image(&image, &prompt)
        .await
        .map_err(|err| {
            eprintln!("Edit error: {err}");
            err
        })?;

    Ok(Json(EditResponse {
        image: result.new_image,
        response_text: result.response_text,
        model: gemini::MODEL_DISPLAY_NAME,
        processing_time_ms: start.elapsed().as_millis(),
    }))
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/options", get(options))
        .route("/api/edit", post(edit_image))
        .layer(
            tower::ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES)),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let api_key = std::env::var("GEMINI_API_KEY")
        .context("GEMINI_API_KEY must be set (in the environment or a .env file)")?;

    let state = Arc::new(AppState {
        gemini: GeminiClient::new(api_key),
    });

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .context("failed to bind 0.0.0.0:3000")?;

    println!("🚀 Garment studio running on http://localhost:3000");
    println!("👗 Open it in your browser to restyle a garment photo!");

    axum::serve(listener, router(state))
        .await
        .context("server error")?;

    Ok(())
}
