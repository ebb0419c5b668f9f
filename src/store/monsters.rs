//! Repository for the `monsters` table.

use crate::models::{DbId, Monster, NewMonster};
use sqlx::PgConnection;

const COLUMNS: &str = "id, name, challenge_rating, hit_points, armor_class, description";

pub struct MonsterRepo;

impl MonsterRepo {
    pub async fn create(conn: &mut PgConnection, input: &NewMonster) -> Result<Monster, sqlx::Error> {
        let query = format!(
            "INSERT INTO monsters (name, challenge_rating, hit_points, armor_class, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Monster>(&query)
            .bind(&input.name)
            .bind(input.challenge_rating)
            .bind(input.hit_points)
            .bind(input.armor_class)
            .bind(&input.description)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Monster>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM monsters WHERE id = $1");
        sqlx::query_as::<_, Monster>(&query).bind(id).fetch_optional(conn).await
    }

    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Monster>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM monsters ORDER BY id");
        sqlx::query_as::<_, Monster>(&query).fetch_all(conn).await
    }

    pub async fn update(conn: &mut PgConnection, monster: &Monster) -> Result<Option<Monster>, sqlx::Error> {
        let query = format!(
            "UPDATE monsters
             SET name = $2, challenge_rating = $3, hit_points = $4, armor_class = $5, description = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Monster>(&query)
            .bind(monster.id)
            .bind(&monster.name)
            .bind(monster.challenge_rating)
            .bind(monster.hit_points)
            .bind(monster.armor_class)
            .bind(&monster.description)
            .fetch_optional(conn)
            .await
    }

    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM monsters WHERE id = $1").bind(id).execute(conn).await?;
        Ok(result.rows_affected() > 0)
    }
}
