pub mod sqlx_post_repository;
pub mod sqlx_social_repository;
