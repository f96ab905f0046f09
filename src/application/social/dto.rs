use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, TS, Validate)]
#[ts(export)]
pub struct AddCommentRequest {
    #[validate(length(min = 1, max = 500, message = "Comment must be 1 to 500 characters"))]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Validate)]
#[ts(export)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 500, message = "Comment must be 1 to 500 characters"))]
    pub content: String,
}

/// Payload for the toggle and status endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LikeStatusResponse {
    pub liked: bool,
    pub like_count: i64,
}
