use serde::Serialize;

#[derive(Serialize, utoipa::ToSchema)]
pub struct UploadResponse {
    #[schema(example = "Upload succeeded")]
    pub message: &'static str,
    /// Public URL of the stored object.
    #[schema(example = "https://memes.oss-cn-hangzhou.aliyuncs.com/meme-arena/1769040000000000000.png")]
    pub url: String,
}

/// Result of a batch upload. Skipped files are simply absent from `urls`.
#[derive(Serialize, utoipa::ToSchema)]
pub struct BatchUploadResponse {
    #[schema(example = "Upload completed")]
    pub message: &'static str,
    pub urls: Vec<String>,
    pub count: usize,
}
