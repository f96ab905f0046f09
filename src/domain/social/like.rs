use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the like ledger. The presence or absence of a row for a
/// `(post_id, user_id)` pair IS the liked state; a unique constraint on the
/// pair keeps the ledger at most one row deep per pair under concurrent
/// writers.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Like {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}
