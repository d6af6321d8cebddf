//! File naming, image saving, and format conversion.

use std::path::Path;

use chrono::Utc;
use image::ImageFormat;

use crate::client::GeneratedImage;
use crate::error::GenerateError;

/// Generate an output filename for one endpoint's image.
///
/// Combines the endpoint label, the first 30 characters of the prompt
/// sanitized to kebab-case, and a millisecond timestamp, then adds the
/// extension for the format the file will be written in.
#[must_use]
pub fn auto_filename(label: &str, prompt: &str, format: ImageFormat) -> String {
    let sanitized = sanitize_for_filename(prompt, 30);
    let timestamp = Utc::now().timestamp_millis();
    let ext = extension(format);
    format!("{label}-{sanitized}-{timestamp}.{ext}")
}

/// Sanitize a string for use in a filename.
///
/// Converts to lowercase, replaces non-alphanumeric chars with hyphens,
/// collapses consecutive hyphens, and trims to max length.
#[must_use]
pub fn sanitize_for_filename(input: &str, max_len: usize) -> String {
    let mut result = String::with_capacity(max_len);
    let mut last_was_hyphen = true; // Prevents leading hyphen

    for ch in input.chars().take(max_len * 2) {
        if result.len() >= max_len {
            break;
        }
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            result.push('-');
            last_was_hyphen = true;
        }
    }

    // Trim trailing hyphen
    while result.ends_with('-') {
        result.pop();
    }

    if result.is_empty() {
        "image".to_string()
    } else {
        result
    }
}

/// Parse a `--format` value.
///
/// # Errors
///
/// Returns an error if the value is not one of jpeg, png, webp.
pub fn parse_format(format: &str) -> Result<ImageFormat, String> {
    match format {
        "jpeg" => Ok(ImageFormat::Jpeg),
        "png" => Ok(ImageFormat::Png),
        "webp" => Ok(ImageFormat::WebP),
        other => Err(format!("Unsupported format '{other}'. Valid: jpeg, png, webp")),
    }
}

/// Preferred file extension for an image format.
#[must_use]
pub fn extension(format: ImageFormat) -> &'static str {
    format.extensions_str().first().copied().unwrap_or("img")
}

/// Save a generated image, re-encoding when the requested format differs
/// from the encoding the service returned.
///
/// # Errors
///
/// Returns an error if the file cannot be written or conversion fails.
pub fn save_image(
    image: &GeneratedImage,
    target: Option<ImageFormat>,
    path: &Path,
) -> Result<(), GenerateError> {
    match target {
        Some(format) if format != image.format => {
            image.image.save_with_format(path, format).map_err(|e| {
                GenerateError::ImageConversion(format!(
                    "Failed to save as {}: {e}",
                    extension(format)
                ))
            })
        }
        _ => std::fs::write(path, &image.data).map_err(GenerateError::Io),
    }
}
