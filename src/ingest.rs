//! Upload validation: one garment photo per request, bounded size, and a
//! payload the `image` crate can actually decode.

use base64::{engine::general_purpose, Engine as _};

use crate::error::StudioError;
use crate::gemini::ImagePart;

pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

const ALLOWED_MIME_TYPES: &[&str] = &["image/png", "image/jpeg", "image/webp"];

/// An image field as it arrived in the multipart body, before validation.
pub struct RawUpload {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Checks the single-image invariant, the size cap and the MIME allowlist,
/// then confirms the bytes decode as an image before base64-encoding them
/// for the model request. Pure: a rejected upload changes nothing.
pub fn validate(mut uploads: Vec<RawUpload>) -> Result<ImagePart, StudioError> {
    if uploads.len() > 1 {
        return Err(StudioError::TooManyImages);
    }
    let upload = uploads.pop().ok_or(StudioError::MissingImage)?;

    if upload.bytes.len() > MAX_IMAGE_BYTES {
        return Err(StudioError::ImageTooLarge { name: upload.name });
    }
    if !ALLOWED_MIME_TYPES.contains(&upload.mime_type.as_str()) {
        return Err(StudioError::UnsupportedImageType { name: upload.name });
    }

    image::load_from_memory(&upload.bytes).map_err(|_| StudioError::UnreadableImage)?;

    Ok(ImagePart {
        data: general_purpose::STANDARD.encode(&upload.bytes),
        mime_type: upload.mime_type,
    })
}
