use crate::domain::post::{
    entity::{NewPost, Post, PostUpdate},
    errors::DomainError,
    repository::PostRepository,
};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

const POST_COLUMNS: &str = "p.id, p.user_id, p.title, p.content, p.post_image, \
     p.like_count, p.view_count, \
     u.nickname AS author_nickname, u.profile_image AS author_profile_image, \
     p.created_at, p.updated_at";

pub struct SqlxPostRepository {
    pub pool: PgPool,
}

impl SqlxPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts p \
             LEFT JOIN users u ON u.id = p.user_id \
             WHERE p.id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(row)
    }
}

#[async_trait]
impl PostRepository for SqlxPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, DomainError> {
        let id = Uuid::now_v7();
        sqlx::query(
            "INSERT INTO posts (id, user_id, title, content, post_image) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(post.user_id)
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.post_image.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        self.fetch_by_id(id)
            .await?
            .ok_or_else(|| DomainError::InfrastructureError("Created post vanished".to_string()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        self.fetch_by_id(id).await
    }

    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts p \
             LEFT JOIN users u ON u.id = p.user_id \
             ORDER BY p.created_at DESC \
             LIMIT $1 OFFSET $2",
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(rows)
    }

    async fn count_all(&self) -> Result<i64, DomainError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(count)
    }

    async fn find_page_by_user(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts p \
             LEFT JOIN users u ON u.id = p.user_id \
             WHERE p.user_id = $1 \
             ORDER BY p.created_at DESC \
             LIMIT $2 OFFSET $3",
        ))
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(rows)
    }

    async fn count_by_user(&self, user_id: Uuid) -> Result<i64, DomainError> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(count)
    }

    async fn update(&self, id: Uuid, update: PostUpdate) -> Result<Post, DomainError> {
        let updated = sqlx::query(
            "UPDATE posts SET title = $2, content = $3, post_image = $4, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&update.title)
        .bind(&update.content)
        .bind(update.post_image.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        if updated.rows_affected() == 0 {
            return Err(DomainError::NotFound("Post not found".to_string()));
        }

        self.fetch_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Post not found".to_string()))
    }

    async fn increment_views(&self, id: Uuid) -> Result<(), DomainError> {
        sqlx::query("UPDATE posts SET view_count = view_count + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(())
    }

    async fn delete_cascade(&self, id: Uuid) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        // Children first: no enforced foreign keys back this up, and the
        // post row must never be removed while rows referencing it remain.
        let likes_removed = sqlx::query("DELETE FROM likes WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?
            .rows_affected();
        let comments_removed = sqlx::query("DELETE FROM comments WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        if deleted.rows_affected() == 0 {
            // Rolls back the child deletes along with it.
            return Err(DomainError::NotFound("Post not found".to_string()));
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        tracing::debug!(post_id = %id, likes_removed, comments_removed, "post cascade deleted");
        Ok(())
    }
}
