//! PostgreSQL-backed bookmark store and startup DDL.

use crate::error::{AppError, ConfigError};
use crate::model::{Bookmark, BookmarkPatch};
use crate::sql::{self, Table};
use crate::store::{BookmarkStore, Removal};
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;
use uuid::Uuid;

pub const BOOKMARKS_TABLE: &str = "bookmarks";

#[derive(Clone)]
pub struct PgBookmarkStore {
    pool: PgPool,
    table: Table,
}

impl PgBookmarkStore {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgBookmarkStore {
            pool,
            table: Table::new(schema, BOOKMARKS_TABLE),
        }
    }
}

#[async_trait]
impl BookmarkStore for PgBookmarkStore {
    async fn list_all(&self) -> Result<Vec<Bookmark>, AppError> {
        let sql = sql::select_all(&self.table);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Bookmark>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Bookmark>, AppError> {
        let sql = sql::select_by_id(&self.table);
        tracing::debug!(sql = %sql, %id, "query");
        let row = sqlx::query_as::<_, Bookmark>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, bookmark: &Bookmark) -> Result<Bookmark, AppError> {
        let q = sql::insert(&self.table, bookmark);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, Bookmark>(&q.sql);
        for p in q.params {
            query = p.bind_as(query);
        }
        let row = query.fetch_one(&self.pool).await?;
        Ok(row)
    }

    async fn update_by_id(&self, id: Uuid, patch: &BookmarkPatch) -> Result<Option<Bookmark>, AppError> {
        let q = sql::update(&self.table, id, patch);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, Bookmark>(&q.sql);
        for p in q.params {
            query = p.bind_as(query);
        }
        let row = query.fetch_optional(&self.pool).await?;
        Ok(row)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Removal, AppError> {
        let sql = sql::delete(&self.table);
        tracing::debug!(sql = %sql, %id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(if result.rows_affected() == 0 {
            Removal::NotFound
        } else {
            Removal::Deleted
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Create the schema and the bookmarks table if they do not exist yet.
pub async fn ensure_bookmarks_table(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    let table = Table::new(schema, BOOKMARKS_TABLE);
    sqlx::query(&sql::create_schema(&table)).execute(pool).await?;
    sqlx::query(&sql::create_table(&table)).execute(pool).await?;
    tracing::info!(table = %table.qualified(), "bookmarks table ready");
    Ok(())
}

/// Create the database named in `database_url` when it is missing. Runs over a
/// connection to the `postgres` maintenance database, before the main pool exists.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin, name) = maintenance_options(database_url)?;
    let Some(name) = name.filter(|n| n != MAINTENANCE_DB) else {
        return Ok(());
    };
    let mut conn = admin.connect().await?;
    let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&name)
        .fetch_one(&mut conn)
        .await?;
    if !exists {
        sqlx::query(&format!("CREATE DATABASE \"{}\"", name.replace('"', "\"\"")))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %name, "created database");
    }
    Ok(())
}

const MAINTENANCE_DB: &str = "postgres";

/// Options pointing at the maintenance database, plus the database the URL names.
fn maintenance_options(database_url: &str) -> Result<(PgConnectOptions, Option<String>), ConfigError> {
    let target = PgConnectOptions::from_str(database_url).map_err(|_| ConfigError::Invalid {
        key: "DATABASE_URL",
        value: database_url.to_string(),
    })?;
    let name = target.get_database().map(str::to_string);
    Ok((target.database(MAINTENANCE_DB), name))
}
