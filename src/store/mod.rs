//! Persistence: the injected `Store` handle, table DDL, seeding, and per-entity repositories.

mod campaigns;
mod characters;
mod monsters;
mod sessions;

pub use campaigns::CampaignRepo;
pub use characters::CharacterRepo;
pub use monsters::MonsterRepo;
pub use sessions::SessionRepo;

use crate::config::ServerConfig;
use crate::error::{AppError, ConfigError};
use crate::models::{Campaign, NewCampaign};
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{ConnectOptions, PgPool, Postgres, Transaction};
use std::str::FromStr;

pub const SEED_CAMPAIGN_NAME: &str = "The Lost Mine of Phandelver";
pub const SEED_CAMPAIGN_DESCRIPTION: &str = "A D&D 5E adventure for levels 1-5. The adventurers are hired to escort \
     supplies to the frontier town of Phandalin.";

/// Table DDL in dependency order. Children reference campaigns with RESTRICT so a campaign
/// with live characters or sessions cannot be removed out from under them.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS campaigns (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        description TEXT,
        start_date TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS characters (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        race VARCHAR(50),
        character_class VARCHAR(50),
        level INTEGER NOT NULL DEFAULT 1,
        hit_points INTEGER,
        campaign_id BIGINT NOT NULL REFERENCES campaigns (id) ON DELETE RESTRICT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sessions (
        id BIGSERIAL PRIMARY KEY,
        date TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        notes TEXT,
        campaign_id BIGINT NOT NULL REFERENCES campaigns (id) ON DELETE RESTRICT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS monsters (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        challenge_rating DOUBLE PRECISION,
        hit_points INTEGER,
        armor_class INTEGER,
        description TEXT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS characters_campaign_id_idx ON characters (campaign_id)",
    "CREATE INDEX IF NOT EXISTS sessions_campaign_id_date_idx ON sessions (campaign_id, date DESC)",
];

/// Handle to the relational store, constructed once at start-up and passed to handlers via state.
#[derive(Clone, Debug)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    pub fn new(pool: PgPool) -> Self {
        Store { pool }
    }

    pub async fn connect(config: &ServerConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;
        Ok(Store { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Start the per-request transaction. Dropping it without `commit` rolls back.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, AppError> {
        Ok(self.pool.begin().await?)
    }

    /// Connection for read-only requests.
    pub async fn acquire(&self) -> Result<PoolConnection<Postgres>, AppError> {
        Ok(self.pool.acquire().await?)
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Create tables and indexes if absent.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        for ddl in SCHEMA {
            sqlx::query(ddl).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert the seed campaign when no campaign exists. Returns it when inserted.
    pub async fn seed_default_campaign(&self) -> Result<Option<Campaign>, AppError> {
        let mut tx = self.begin().await?;
        if CampaignRepo::count(&mut tx).await? > 0 {
            return Ok(None);
        }
        let seed = NewCampaign {
            name: SEED_CAMPAIGN_NAME.into(),
            description: Some(SEED_CAMPAIGN_DESCRIPTION.into()),
            start_date: None,
        };
        let campaign = CampaignRepo::create(&mut tx, &seed).await?;
        tx.commit().await?;
        tracing::info!(id = campaign.id, "added seed campaign");
        Ok(Some(campaign))
    }

    /// Schema plus seed data; run once before serving.
    pub async fn initialize(&self) -> Result<(), AppError> {
        tracing::info!("initializing database");
        self.ensure_schema().await?;
        self.seed_default_campaign().await?;
        tracing::info!("database initialized");
        Ok(())
    }
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|_| ConfigError::Invalid {
            key: "DATABASE_URL",
            value: database_url.to_string(),
        })?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split `postgres://host/name?opts` into (`postgres://host/postgres?opts`, `name`).
fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| ConfigError::Invalid {
            key: "DATABASE_URL",
            value: url.to_string(),
        })?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, query)) => (name.trim(), Some(query)),
        None => (path_and_query.trim(), None),
    };
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = match query {
        Some(q) => format!("{}postgres?{}", base, q),
        None => format!("{}postgres", base),
    };
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
