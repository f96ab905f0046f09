use super::dto::{CreatePostRequest, UpdatePostRequest};
use crate::domain::{
    post::{
        entity::{NewPost, Post, PostUpdate},
        errors::DomainError,
        repository::PostRepository,
    },
    shared::pagination::{PageRequest, PagedResponse},
};
use uuid::Uuid;

pub struct PostUseCase {
    repository: Box<dyn PostRepository>,
    page_size: i64,
}

impl PostUseCase {
    pub fn new(repository: Box<dyn PostRepository>, page_size: i64) -> Self {
        Self {
            repository,
            page_size,
        }
    }

    pub async fn get_posts(&self, page: PageRequest) -> Result<PagedResponse<Post>, DomainError> {
        if page.page < 1 {
            return Err(DomainError::ValidationError(
                "Page must be 1 or greater".to_string(),
            ));
        }
        let total = self.repository.count_all().await?;
        let posts = self
            .repository
            .find_page(self.page_size, page.offset(self.page_size))
            .await?;
        Ok(PagedResponse::new(posts, page.page, self.page_size, total))
    }

    pub async fn get_posts_by_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<PagedResponse<Post>, DomainError> {
        if page.page < 1 {
            return Err(DomainError::ValidationError(
                "Page must be 1 or greater".to_string(),
            ));
        }
        let total = self.repository.count_by_user(user_id).await?;
        let posts = self
            .repository
            .find_page_by_user(user_id, self.page_size, page.offset(self.page_size))
            .await?;
        Ok(PagedResponse::new(posts, page.page, self.page_size, total))
    }

    /// Detail read; bumps the view counter and returns the refreshed row.
    pub async fn get_post(&self, post_id: Uuid) -> Result<Post, DomainError> {
        self.repository
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Post not found".to_string()))?;
        self.repository.increment_views(post_id).await?;
        self.repository
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Post not found".to_string()))
    }

    pub async fn create_post(
        &self,
        user_id: Uuid,
        request: CreatePostRequest,
    ) -> Result<Post, DomainError> {
        self.repository
            .create(NewPost {
                user_id,
                title: request.title,
                content: request.content,
                post_image: request.post_image,
            })
            .await
    }

    pub async fn update_post(
        &self,
        requester_id: Uuid,
        post_id: Uuid,
        request: UpdatePostRequest,
    ) -> Result<Post, DomainError> {
        let post = self
            .repository
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Post not found".to_string()))?;
        if post.user_id != requester_id {
            return Err(DomainError::Forbidden(
                "You can only edit your own posts".to_string(),
            ));
        }
        self.repository
            .update(
                post_id,
                PostUpdate {
                    title: request.title,
                    content: request.content,
                    post_image: request.post_image,
                },
            )
            .await
    }

    /// Ownership-checked cascade delete. The repository removes likes and
    /// comments before the post, all in one transaction; nothing is touched
    /// here on the forbidden path.
    pub async fn delete_post(&self, requester_id: Uuid, post_id: Uuid) -> Result<(), DomainError> {
        let post = self
            .repository
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Post not found".to_string()))?;
        if post.user_id != requester_id {
            return Err(DomainError::Forbidden(
                "You can only delete your own posts".to_string(),
            ));
        }
        self.repository.delete_cascade(post_id).await
    }
}
