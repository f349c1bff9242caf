//! Embedding food photos as `data:` URIs.

use base64::{engine::general_purpose::STANDARD, Engine};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while embedding or extracting a photo.
#[derive(Error, Debug)]
pub enum PhotoError {
    #[error("Failed to read photo {}: {}", .0.display(), .1)]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Not an image file: {}", .0.display())]
    NotAnImage(PathBuf),

    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Reads an image file and returns it as `data:<mime>;base64,<payload>`.
pub fn encode_photo(path: &Path) -> Result<String, PhotoError> {
    let bytes = fs::read(path).map_err(|e| PhotoError::Read(path.to_path_buf(), e))?;

    let mime = sniff_mime(&bytes)
        .or_else(|| mime_from_extension(path))
        .ok_or_else(|| PhotoError::NotAnImage(path.to_path_buf()))?;

    tracing::debug!("Encoding {} ({} bytes) as {}", path.display(), bytes.len(), mime);
    Ok(encode_bytes(mime, &bytes))
}

pub fn encode_bytes(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Splits a base64 `data:` URI into its MIME type and decoded bytes.
pub fn decode_data_uri(uri: &str) -> Result<(String, Vec<u8>), PhotoError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| PhotoError::InvalidDataUri("missing 'data:' prefix".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| PhotoError::InvalidDataUri("missing ',' separator".to_string()))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| PhotoError::InvalidDataUri("payload is not base64".to_string()))?;

    let bytes = STANDARD.decode(payload.trim())?;
    Ok((mime.to_string(), bytes))
}

/// Conventional file extension for an image MIME type.
pub fn extension_for_mime(mime: &str) -> &'static str {
    match mime {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/bmp" => "bmp",
        "image/heic" => "heic",
        _ => "img",
    }
}

fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Some("image/png"),
        [b'G', b'I', b'F', b'8', ..] => Some("image/gif"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("image/webp"),
        [b'B', b'M', ..] => Some("image/bmp"),
        [_, _, _, _, b'f', b't', b'y', b'p', b'h', b'e', b'i', b'c', ..] => Some("image/heic"),
        _ => None,
    }
}

fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "heic" | "heif" => Some("image/heic"),
        _ => None,
    }
}
