use base64::{Engine, engine::general_purpose::STANDARD};

/// Inlines an image file so it can be stored inside the document.
pub fn image_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.trim().is_empty() {
        "application/octet-stream"
    } else {
        mime.trim()
    };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

pub fn is_data_url(value: &str) -> bool {
    value.starts_with("data:")
}
