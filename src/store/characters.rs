//! Repository for the `characters` table.

use crate::models::{Character, DbId, NewCharacter};
use sqlx::PgConnection;

const COLUMNS: &str = "id, name, race, character_class, level, hit_points, campaign_id";

pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a character. The caller checks that the campaign exists first; the foreign key
    /// still rejects a campaign deleted in between.
    pub async fn create(conn: &mut PgConnection, input: &NewCharacter) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (name, race, character_class, level, hit_points, campaign_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(&input.race)
            .bind(&input.character_class)
            .bind(input.level)
            .bind(input.hit_points)
            .bind(input.campaign_id)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query).bind(id).fetch_optional(conn).await
    }

    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters ORDER BY id");
        sqlx::query_as::<_, Character>(&query).fetch_all(conn).await
    }

    pub async fn update(conn: &mut PgConnection, character: &Character) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters
             SET name = $2, race = $3, character_class = $4, level = $5, hit_points = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(character.id)
            .bind(&character.name)
            .bind(&character.race)
            .bind(&character.character_class)
            .bind(character.level)
            .bind(character.hit_points)
            .fetch_optional(conn)
            .await
    }

    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1").bind(id).execute(conn).await?;
        Ok(result.rows_affected() > 0)
    }
}
