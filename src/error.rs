//! User-facing error taxonomy for the edit workflow.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Everything that can go wrong between an upload arriving and an edited
/// image leaving. Each variant carries the exact message shown to the user;
/// nothing below the handler boundary surfaces a raw transport error.
#[derive(Debug, Error)]
pub enum StudioError {
    #[error("Only one image can be uploaded at a time.")]
    TooManyImages,

    #[error("'{name}' is too large. Choose an image under 10 MB.")]
    ImageTooLarge { name: String },

    #[error("'{name}' is not a supported image type. Use PNG, JPEG or WebP.")]
    UnsupportedImageType { name: String },

    #[error("We could not read that image file. Try a different photo.")]
    UnreadableImage,

    #[error("Add a photo of the garment first.")]
    MissingImage,

    #[error("Pick a pose before submitting.")]
    MissingPose,

    #[error("The upload could not be read. Please try again.")]
    InvalidUpload,

    /// The model answered with text instead of an image. Surfaced verbatim.
    #[error("{0}")]
    Refusal(String),

    #[error("The AI returned an empty response.")]
    EmptyResponse,

    #[error("The AI did not return an edited image.")]
    NoEditedImage,

    #[error("The Gemini API key is not valid. Check GEMINI_API_KEY and restart.")]
    InvalidApiKey,

    #[error("Could not edit the image: {0}")]
    Upstream(String),

    #[error("Could not edit the image. Please try again in a moment.")]
    Unknown,
}

impl StudioError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::TooManyImages
            | Self::ImageTooLarge { .. }
            | Self::UnsupportedImageType { .. }
            | Self::UnreadableImage
            | Self::MissingImage
            | Self::MissingPose
            | Self::InvalidUpload => StatusCode::BAD_REQUEST,
            Self::Refusal(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            Self::EmptyResponse | Self::NoEditedImage | Self::Upstream(_) | Self::Unknown => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for StudioError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refusal_text_is_surfaced_verbatim() {
        let err = StudioError::Refusal("blocked for safety".to_string());
        assert_eq!(err.to_string(), "blocked for safety");
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn validation_errors_are_client_errors() {
        let err = StudioError::ImageTooLarge {
            name: "dress.png".to_string(),
        };
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("dress.png"));
    }

    #[test]
    fn upstream_failures_keep_the_underlying_message() {
        let err = StudioError::Upstream("connection reset by peer".to_string());
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert!(err.to_string().contains("connection reset by peer"));
    }
}
