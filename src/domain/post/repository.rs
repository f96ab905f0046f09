use super::entity::{NewPost, Post, PostUpdate};
use super::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: NewPost) -> Result<Post, DomainError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError>;
    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Post>, DomainError>;
    async fn count_all(&self) -> Result<i64, DomainError>;
    async fn find_page_by_user(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, DomainError>;
    async fn count_by_user(&self, user_id: Uuid) -> Result<i64, DomainError>;
    async fn update(&self, id: Uuid, update: PostUpdate) -> Result<Post, DomainError>;
    async fn increment_views(&self, id: Uuid) -> Result<(), DomainError>;

    /// Deletes a post together with every like and comment that references
    /// it, children first, in a single transaction. The post row is not
    /// removed unless both child deletes succeeded.
    async fn delete_cascade(&self, id: Uuid) -> Result<(), DomainError>;
}
