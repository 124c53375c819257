//! Image storage backends and the upload acceptance rules they share.

mod cloudinary;
mod local;

pub use self::cloudinary::{CloudinaryCredentials, CloudinaryStorage, cloudinary_signature};
pub use self::local::{LocalImageStorage, PUBLIC_PREFIX};

use shared::errors::ServiceError;

pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

const ALLOWED_MIME: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/pjpeg",
    "image/jfif",
    "image/png",
    "image/webp",
    "image/heic",
    "image/heif",
];

fn mime_from_extension(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" | "jfif" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        _ => None,
    }
}

/// Declared type wins; the file extension is only consulted when it is empty.
pub fn resolve_mime(declared: Option<&str>, file_name: Option<&str>) -> Option<String> {
    let declared = declared.map(str::trim).filter(|m| !m.is_empty());
    match declared {
        Some(mime) => Some(mime.to_ascii_lowercase()),
        None => file_name.and_then(mime_from_extension).map(str::to_string),
    }
}

pub fn ext_for_mime(mime: &str) -> &'static str {
    match mime {
        "image/png" => "png",
        "image/webp" => "webp",
        "image/heic" => "heic",
        "image/heif" => "heif",
        _ => "jpg",
    }
}

/// Checks type then size, returning the MIME type to store the file under.
pub fn accept_upload(
    size: usize,
    declared: Option<&str>,
    file_name: Option<&str>,
) -> Result<String, ServiceError> {
    let mime = resolve_mime(declared, file_name).unwrap_or_default();

    if !ALLOWED_MIME.contains(&mime.as_str()) {
        let received = declared
            .filter(|m| !m.trim().is_empty())
            .unwrap_or("(empty)");
        return Err(ServiceError::UnsupportedMediaType(received.to_string()));
    }

    if size > MAX_UPLOAD_BYTES {
        return Err(ServiceError::PayloadTooLarge {
            size,
            limit: MAX_UPLOAD_BYTES,
        });
    }

    Ok(mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_type_is_inferred_from_extension() {
        assert_eq!(
            resolve_mime(Some(""), Some("IMG_0001.JFIF")).as_deref(),
            Some("image/jpeg")
        );
        assert_eq!(resolve_mime(None, Some("foto.heic")).as_deref(), Some("image/heic"));
        assert_eq!(resolve_mime(None, Some("notes.txt")), None);
    }

    #[test]
    fn declared_type_is_not_overridden_by_extension() {
        let err = accept_upload(10, Some("text/plain"), Some("photo.png")).unwrap_err();
        assert!(matches!(err, ServiceError::UnsupportedMediaType(m) if m == "text/plain"));
    }

    #[test]
    fn type_is_checked_before_size() {
        let err = accept_upload(MAX_UPLOAD_BYTES + 1, Some("text/plain"), None).unwrap_err();
        assert!(matches!(err, ServiceError::UnsupportedMediaType(_)));

        let err = accept_upload(MAX_UPLOAD_BYTES + 1, Some("image/png"), None).unwrap_err();
        assert!(matches!(err, ServiceError::PayloadTooLarge { .. }));

        assert_eq!(
            accept_upload(MAX_UPLOAD_BYTES, Some("IMAGE/WEBP"), None).unwrap(),
            "image/webp"
        );
    }

    #[test]
    fn extensions_follow_mime() {
        assert_eq!(ext_for_mime("image/png"), "png");
        assert_eq!(ext_for_mime("image/pjpeg"), "jpg");
        assert_eq!(ext_for_mime("image/heif"), "heif");
    }
}
