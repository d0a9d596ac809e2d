//! Row stored in the `logs` table.

use sqlx::FromRow;

/// One persisted attempt, `correct` as stored (0 or 1).
#[derive(Debug, FromRow)]
pub struct LogRow {
    pub id: i64,
    pub user_id: String,
    pub target_letter: String,
    pub predicted_letter: String,
    pub correct: i64,
    pub timestamp: String,
}
