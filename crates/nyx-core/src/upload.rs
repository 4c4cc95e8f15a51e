//! Validation rules for header-image uploads.
//!
//! Only the checks live here; writing the file is the HTTP layer's job. The
//! returned path is embedded in a post's `image` field as-is.

use thiserror::Error;

/// Largest accepted upload: 5 MiB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// An accepted image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
  Jpeg,
  Png,
  Gif,
  Webp,
}

impl ImageKind {
  pub fn from_mime(mime: &str) -> Option<Self> {
    match mime.trim().to_ascii_lowercase().as_str() {
      "image/jpeg" => Some(Self::Jpeg),
      "image/png" => Some(Self::Png),
      "image/gif" => Some(Self::Gif),
      "image/webp" => Some(Self::Webp),
      _ => None,
    }
  }

  pub fn mime(self) -> &'static str {
    match self {
      Self::Jpeg => "image/jpeg",
      Self::Png => "image/png",
      Self::Gif => "image/gif",
      Self::Webp => "image/webp",
    }
  }

  /// Whether `data` opens with this format's file signature.
  pub fn matches(self, data: &[u8]) -> bool {
    match self {
      Self::Jpeg => data.starts_with(&[0xFF, 0xD8, 0xFF]),
      Self::Png => data.starts_with(&[0x89, b'P', b'N', b'G']),
      Self::Gif => data.starts_with(b"GIF8"),
      Self::Webp => data.starts_with(b"RIFF") && data.get(8..12) == Some(b"WEBP".as_slice()),
    }
  }

  /// File extension for stored files: the MIME subtype.
  pub fn extension(self) -> &'static str {
    match self {
      Self::Jpeg => "jpeg",
      Self::Png => "png",
      Self::Gif => "gif",
      Self::Webp => "webp",
    }
  }
}

/// Why an upload was refused. `Display` is the message shown to the user.
#[derive(Debug, Error)]
pub enum UploadError {
  #[error("No file uploaded")]
  Missing,

  #[error("File must be an image (JPEG, PNG, GIF, or WEBP)")]
  InvalidType,

  #[error("File size exceeds 5MB limit")]
  TooLarge,

  /// Anything else; the detail is logged, never shown.
  #[error("Error uploading file")]
  Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl UploadError {
  /// Stable machine-readable cause.
  pub fn code(&self) -> &'static str {
    match self {
      Self::Missing => "missing",
      Self::InvalidType => "invalid-type",
      Self::TooLarge => "too-large",
      Self::Internal(_) => "internal",
    }
  }

  pub fn is_client_error(&self) -> bool { !matches!(self, Self::Internal(_)) }
}

/// Check the declared MIME type, then the size, then that the bytes carry
/// the declared format's signature.
pub fn validate(mime: Option<&str>, data: &[u8]) -> Result<ImageKind, UploadError> {
  let kind = mime
    .and_then(ImageKind::from_mime)
    .ok_or(UploadError::InvalidType)?;
  if data.len() > MAX_UPLOAD_BYTES {
    return Err(UploadError::TooLarge);
  }
  if !kind.matches(data) {
    return Err(UploadError::InvalidType);
  }
  Ok(kind)
}
