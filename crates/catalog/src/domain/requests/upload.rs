use uuid::Uuid;

/// A file received from the admin upload form.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub product_id: Option<Uuid>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}
