use axum::{extract::State, http::StatusCode, Json};
use tracing::warn;

use crate::modules::summarize::schema::{ErrorResponse, SummarizeRequest, SummarizeResponse};
use crate::modules::summarize::url::extract_video_id;
use crate::AppState;

/// Run the summarization pipeline for one video: resolve the id, fetch the
/// transcript, summarize. Each stage is attempted exactly once.
pub async fn summarize_video(
    State(state): State<AppState>,
    Json(payload): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let video_id = extract_video_id(&payload.youtube_url).ok_or((
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            detail: "Invalid YouTube URL".to_string(),
        }),
    ))?;

    let transcript = match state.transcripts.fetch_text(&video_id).await {
        Ok(text) => text,
        Err(e) => {
            warn!(%video_id, error = %e, "transcript unavailable");
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    detail: "Transcript not available for this video".to_string(),
                }),
            ));
        }
    };

    // Never aborts; degrades to a fallback string on failure.
    let summary = state.llm.summarize(&transcript).await;

    Ok(Json(SummarizeResponse {
        youtube_url: payload.youtube_url,
        video_id,
        summary,
    }))
}
