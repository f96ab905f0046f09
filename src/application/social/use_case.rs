use super::dto::{AddCommentRequest, UpdateCommentRequest};
use crate::domain::{
    post::errors::DomainError,
    social::{comment::Comment, repository::SocialRepository},
};
use uuid::Uuid;

pub struct SocialUseCase {
    repository: Box<dyn SocialRepository>,
}

impl SocialUseCase {
    pub fn new(repository: Box<dyn SocialRepository>) -> Self {
        Self { repository }
    }

    /// Flips the like state. The repository applies the ledger write and the
    /// counter adjustment as one transaction; two successive calls return
    /// `true` then `false`.
    pub async fn toggle_like(
        &self,
        post_id: Uuid,
        user_id: Uuid,
    ) -> Result<(bool, i32), DomainError> {
        self.repository.toggle_like(post_id, user_id).await
    }

    /// `(liked, like_count)` for a pair, both read live from the ledger.
    pub async fn like_status(
        &self,
        post_id: Uuid,
        user_id: Uuid,
    ) -> Result<(bool, i64), DomainError> {
        let liked = self.repository.find_like(post_id, user_id).await?.is_some();
        let like_count = self.repository.count_likes_for_post(post_id).await?;
        Ok((liked, like_count))
    }

    pub async fn add_comment(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        request: AddCommentRequest,
    ) -> Result<Comment, DomainError> {
        self.repository
            .add_comment(post_id, user_id, request.content)
            .await
    }

    pub async fn get_comments(&self, post_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        self.repository.comments_for_post(post_id).await
    }

    pub async fn update_comment(
        &self,
        requester_id: Uuid,
        comment_id: Uuid,
        request: UpdateCommentRequest,
    ) -> Result<Comment, DomainError> {
        let comment = self
            .repository
            .find_comment(comment_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Comment not found".to_string()))?;
        if comment.user_id != requester_id {
            return Err(DomainError::Forbidden(
                "You can only edit your own comments".to_string(),
            ));
        }
        self.repository
            .update_comment(comment_id, request.content)
            .await
    }

    pub async fn delete_comment(
        &self,
        requester_id: Uuid,
        comment_id: Uuid,
    ) -> Result<(), DomainError> {
        let comment = self
            .repository
            .find_comment(comment_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Comment not found".to_string()))?;
        if comment.user_id != requester_id {
            return Err(DomainError::Forbidden(
                "You can only delete your own comments".to_string(),
            ));
        }
        self.repository.delete_comment(comment_id).await
    }
}
