//! Repository for the `sessions` table.

use crate::models::{DbId, NewSession, Session};
use sqlx::PgConnection;

const COLUMNS: &str = "id, date, notes, campaign_id";

pub struct SessionRepo;

impl SessionRepo {
    pub async fn create(conn: &mut PgConnection, input: &NewSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (date, notes, campaign_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(input.date)
            .bind(&input.notes)
            .bind(input.campaign_id)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE id = $1");
        sqlx::query_as::<_, Session>(&query).bind(id).fetch_optional(conn).await
    }

    /// Newest first, optionally restricted to one campaign. Ties on date keep the newest id first.
    pub async fn list(conn: &mut PgConnection, campaign_id: Option<DbId>) -> Result<Vec<Session>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sessions
             WHERE ($1::BIGINT IS NULL OR campaign_id = $1)
             ORDER BY date DESC, id DESC"
        );
        sqlx::query_as::<_, Session>(&query).bind(campaign_id).fetch_all(conn).await
    }

    pub async fn update(conn: &mut PgConnection, session: &Session) -> Result<Option<Session>, sqlx::Error> {
        let query = format!(
            "UPDATE sessions SET date = $2, notes = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(session.id)
            .bind(session.date)
            .bind(&session.notes)
            .fetch_optional(conn)
            .await
    }

    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1").bind(id).execute(conn).await?;
        Ok(result.rows_affected() > 0)
    }
}
