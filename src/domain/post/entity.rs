use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A board post.
///
/// `like_count` and `view_count` are denormalized counters kept on the row so
/// the list endpoints never aggregate over the `likes` table. `like_count` is
/// maintained inside the like-toggle transaction; any drift can be healed
/// against the ledger via `SocialRepository::count_likes_for_post`.
///
/// The `author_*` fields are not columns of `posts` — they are populated by
/// the user join in the repository selects and default to `None` elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub post_image: Option<String>,
    pub like_count: i32,
    pub view_count: i32,
    pub author_nickname: Option<String>,
    pub author_profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub post_image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub title: String,
    pub content: String,
    pub post_image: Option<String>,
}

