use super::comment::Comment;
use super::like::Like;
use crate::domain::post::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

/// Storage for the social-interaction subsystem: the like ledger plus the
/// comments of a post.
///
/// `toggle_like` is the one compound operation. It applies the ledger
/// mutation and the `posts.like_count` adjustment as a single atomic unit,
/// and absorbs a duplicate-insert race into the "already liked" outcome
/// instead of surfacing a conflict.
#[async_trait]
pub trait SocialRepository: Send + Sync {
    /// Flips the like state of `(post_id, user_id)` and returns
    /// `(now_liked, like_count)`. Fails with `NotFound` when the post does
    /// not exist (including a post removed by a concurrent cascade delete).
    async fn toggle_like(
        &self,
        post_id: Uuid,
        user_id: Uuid,
    ) -> Result<(bool, i32), DomainError>;

    /// The ledger row for the pair, if any. No side effects.
    async fn find_like(
        &self,
        post_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Like>, DomainError>;

    /// Live count of ledger rows for a post. The authoritative number that
    /// `posts.like_count` denormalizes.
    async fn count_likes_for_post(&self, post_id: Uuid) -> Result<i64, DomainError>;

    async fn add_comment(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        content: String,
    ) -> Result<Comment, DomainError>;
    async fn comments_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, DomainError>;
    async fn find_comment(&self, comment_id: Uuid) -> Result<Option<Comment>, DomainError>;
    async fn update_comment(
        &self,
        comment_id: Uuid,
        content: String,
    ) -> Result<Comment, DomainError>;
    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), DomainError>;
}
