use crate::domain::{
    post::errors::DomainError,
    social::{comment::Comment, like::Like, repository::SocialRepository},
};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

const COMMENT_COLUMNS: &str = "c.id, c.post_id, c.user_id, c.content, \
     u.nickname AS author_nickname, u.profile_image AS author_profile_image, \
     c.created_at, c.updated_at";

pub struct SqlxSocialRepository {
    pub pool: PgPool,
}

impl SqlxSocialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SocialRepository for SqlxSocialRepository {
    async fn toggle_like(
        &self,
        post_id: Uuid,
        user_id: Uuid,
    ) -> Result<(bool, i32), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        let post_exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)"#,
        )
        .bind(post_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        if !post_exists {
            // Also the exit for a toggle racing a cascade delete: dropping
            // the transaction rolls back and the caller sees not-found.
            return Err(DomainError::NotFound("Post not found".to_string()));
        }

        let already_liked = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM likes WHERE post_id = $1 AND user_id = $2)"#,
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        if already_liked {
            let removed = sqlx::query("DELETE FROM likes WHERE post_id = $1 AND user_id = $2")
                .bind(post_id)
                .bind(user_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
            // Only the statement that actually removed the row may touch the
            // counter; a racing un-like already accounted for it.
            if removed.rows_affected() > 0 {
                sqlx::query(
                    "UPDATE posts SET like_count = GREATEST(like_count - 1, 0) WHERE id = $1",
                )
                .bind(post_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
            }
        } else {
            let inserted = sqlx::query(
                "INSERT INTO likes (id, post_id, user_id) VALUES ($1, $2, $3) \
                 ON CONFLICT (post_id, user_id) DO NOTHING",
            )
            .bind(Uuid::now_v7())
            .bind(post_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
            // rows_affected 0 means a concurrent toggle won the insert and
            // incremented already; either way the pair is now liked.
            if inserted.rows_affected() > 0 {
                sqlx::query("UPDATE posts SET like_count = like_count + 1 WHERE id = $1")
                    .bind(post_id)
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
            }
        }

        let like_count =
            sqlx::query_scalar::<_, i32>("SELECT like_count FROM posts WHERE id = $1")
                .bind(post_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        tx.commit()
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok((!already_liked, like_count))
    }

    async fn find_like(
        &self,
        post_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Like>, DomainError> {
        let like = sqlx::query_as::<_, Like>(
            "SELECT id, post_id, user_id, created_at FROM likes \
             WHERE post_id = $1 AND user_id = $2",
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(like)
    }

    async fn count_likes_for_post(&self, post_id: Uuid) -> Result<i64, DomainError> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM likes WHERE post_id = $1")
                .bind(post_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(count)
    }

    async fn add_comment(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        content: String,
    ) -> Result<Comment, DomainError> {
        let post_exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)"#,
        )
        .bind(post_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        if !post_exists {
            return Err(DomainError::NotFound("Post not found".to_string()));
        }

        let id = Uuid::now_v7();
        sqlx::query("INSERT INTO comments (id, post_id, user_id, content) VALUES ($1, $2, $3, $4)")
            .bind(id)
            .bind(post_id)
            .bind(user_id)
            .bind(&content)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        let row = sqlx::query_as::<_, Comment>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments c \
             LEFT JOIN users u ON u.id = c.user_id \
             WHERE c.id = $1",
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(row)
    }

    async fn comments_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        let post_exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)"#,
        )
        .bind(post_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        if !post_exists {
            return Err(DomainError::NotFound("Post not found".to_string()));
        }

        let rows = sqlx::query_as::<_, Comment>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments c \
             LEFT JOIN users u ON u.id = c.user_id \
             WHERE c.post_id = $1 \
             ORDER BY c.created_at ASC",
        ))
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(rows)
    }

    async fn find_comment(&self, comment_id: Uuid) -> Result<Option<Comment>, DomainError> {
        let row = sqlx::query_as::<_, Comment>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments c \
             LEFT JOIN users u ON u.id = c.user_id \
             WHERE c.id = $1",
        ))
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(row)
    }

    async fn update_comment(
        &self,
        comment_id: Uuid,
        content: String,
    ) -> Result<Comment, DomainError> {
        let updated =
            sqlx::query("UPDATE comments SET content = $2, updated_at = NOW() WHERE id = $1")
                .bind(comment_id)
                .bind(&content)
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        if updated.rows_affected() == 0 {
            return Err(DomainError::NotFound("Comment not found".to_string()));
        }

        let row = sqlx::query_as::<_, Comment>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments c \
             LEFT JOIN users u ON u.id = c.user_id \
             WHERE c.id = $1",
        ))
        .bind(comment_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(row)
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), DomainError> {
        let deleted = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        if deleted.rows_affected() == 0 {
            return Err(DomainError::NotFound("Comment not found".to_string()));
        }
        Ok(())
    }
}
