use crate::{
    application::{posts::use_case::PostUseCase, social::use_case::SocialUseCase},
    config::Config,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub redis: redis::Client,
    pub config: Config,
    pub posts: Arc<PostUseCase>,
    pub social: Arc<SocialUseCase>,
}
