//! Request handlers, grouped by resource.

use axum::http::{header, HeaderMap};

use crate::error::{AppError, AppResult};

pub mod admin;
pub mod employees;
pub mod entities;

/// Map an image content type to the stored file extension.
pub(crate) fn image_extension(headers: &HeaderMap) -> AppResult<&'static str> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    match content_type {
        "image/png" => Ok("png"),
        "image/jpeg" => Ok("jpg"),
        "image/webp" => Ok("webp"),
        other => Err(AppError::BadRequest(format!(
            "unsupported image content type '{other}'"
        ))),
    }
}
