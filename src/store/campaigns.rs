//! Repository for the `campaigns` table.

use crate::models::{Campaign, DbId, NewCampaign};
use sqlx::PgConnection;

/// Campaign columns plus the derived child id lists. Expects the row alias `c`.
const COLUMNS: &str = "c.id, c.name, c.description, c.start_date, \
     ARRAY(SELECT ch.id FROM characters ch WHERE ch.campaign_id = c.id ORDER BY ch.id) AS characters, \
     ARRAY(SELECT s.id FROM sessions s WHERE s.campaign_id = c.id ORDER BY s.id) AS sessions";

pub struct CampaignRepo;

impl CampaignRepo {
    /// Insert a campaign; `start_date` defaults to now. A new campaign has no children yet.
    pub async fn create(conn: &mut PgConnection, input: &NewCampaign) -> Result<Campaign, sqlx::Error> {
        sqlx::query_as::<_, Campaign>(
            "INSERT INTO campaigns (name, description, start_date)
             VALUES ($1, $2, COALESCE($3, NOW()))
             RETURNING id, name, description, start_date,
                       ARRAY[]::BIGINT[] AS characters, ARRAY[]::BIGINT[] AS sessions",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.start_date)
        .fetch_one(conn)
        .await
    }

    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns c WHERE c.id = $1");
        sqlx::query_as::<_, Campaign>(&query).bind(id).fetch_optional(conn).await
    }

    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns c ORDER BY c.id");
        sqlx::query_as::<_, Campaign>(&query).fetch_all(conn).await
    }

    pub async fn exists(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM campaigns WHERE id = $1)")
            .bind(id)
            .fetch_one(conn)
            .await
    }

    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM campaigns").fetch_one(conn).await
    }

    /// Number of (characters, sessions) still referencing the campaign.
    pub async fn child_counts(conn: &mut PgConnection, id: DbId) -> Result<(i64, i64), sqlx::Error> {
        sqlx::query_as(
            "SELECT (SELECT COUNT(*) FROM characters WHERE campaign_id = $1),
                    (SELECT COUNT(*) FROM sessions WHERE campaign_id = $1)",
        )
        .bind(id)
        .fetch_one(conn)
        .await
    }

    /// Write every column of `campaign` back. Returns `None` if the row no longer exists.
    pub async fn update(conn: &mut PgConnection, campaign: &Campaign) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "UPDATE campaigns AS c SET name = $2, description = $3, start_date = $4
             WHERE c.id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(campaign.id)
            .bind(&campaign.name)
            .bind(&campaign.description)
            .bind(campaign.start_date)
            .fetch_optional(conn)
            .await
    }

    /// Returns `true` if a row was deleted.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM campaigns WHERE id = $1").bind(id).execute(conn).await?;
        Ok(result.rows_affected() > 0)
    }
}
