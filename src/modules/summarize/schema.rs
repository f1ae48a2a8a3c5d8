use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub youtube_url: String,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub youtube_url: String,
    pub video_id: String,
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
