use arena_core::store::Result;
use arena_core::{
    Fighter, FighterEdit, FighterId, FighterName, FighterStore, Skill, StorageError,
};
use async_trait::async_trait;
use jiff::Timestamp;
use sqlx::mysql::{MySqlPoolOptions, MySqlRow};
use sqlx::{MySqlPool, Row};
use tracing::debug;

const SCHEMA: &str = include_str!("../ddl/mysql/fighters.sql");

/// MySQL implementation of the [`FighterStore`] contract.
///
/// Names are unique under a binary NO PAD collation, so lookups are exact and
/// case-sensitive. Timestamps are stored as nanoseconds since the Unix
/// epoch and skills as a JSON array. Edits and deletes lock the row with
/// `SELECT ... FOR UPDATE` inside a transaction.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Creates a store from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a store by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Creates the `fighters` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        debug!("ensuring fighters schema");
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    /// Closes every connection in the pool.
    pub async fn close(&self) {
        debug!("closing mysql pool");
        self.pool.close().await;
    }
}

fn encode_timestamp(ts: Timestamp) -> Result<i64> {
    i64::try_from(ts.as_nanosecond()).map_err(|_| {
        StorageError::InvalidData(format!("timestamp '{ts}' does not fit in 64 bits"))
    })
}

fn decode_timestamp(nanos: i64) -> Result<Timestamp> {
    Timestamp::from_nanosecond(i128::from(nanos)).map_err(|e| {
        StorageError::InvalidData(format!("invalid timestamp '{nanos}': {e}"))
    })
}

fn encode_skills(skills: &[Skill]) -> Result<String> {
    serde_json::to_string(skills).map_err(|e| StorageError::InvalidData(e.to_string()))
}

fn decode_skills(raw: &str) -> Result<Vec<Skill>> {
    let skills: Vec<String> = serde_json::from_str(raw)
        .map_err(|e| StorageError::InvalidData(format!("invalid skills '{raw}': {e}")))?;
    Ok(skills.into_iter().map(Skill::new_unchecked).collect())
}

fn fighter_from_row(row: &MySqlRow) -> Result<Fighter> {
    let id: String = row.try_get("id").map_err(map_sqlx_error)?;
    let name: String = row.try_get("name").map_err(map_sqlx_error)?;
    let skills: String = row.try_get("skills").map_err(map_sqlx_error)?;
    let created_at: i64 = row.try_get("created_at").map_err(map_sqlx_error)?;
    let updated_at: Option<i64> = row.try_get("updated_at").map_err(map_sqlx_error)?;

    Ok(Fighter {
        id: FighterId::new(id),
        name: FighterName::new_unchecked(name),
        skills: decode_skills(&skills)?,
        created_at: decode_timestamp(created_at)?,
        updated_at: updated_at.map(decode_timestamp).transpose()?,
    })
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl FighterStore for MySqlStore {
    async fn list(&self) -> Result<Vec<Fighter>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, skills, created_at, updated_at
            FROM fighters
            ORDER BY seq
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter().map(fighter_from_row).collect()
    }

    async fn get(&self, name: &FighterName) -> Result<Option<Fighter>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, skills, created_at, updated_at
            FROM fighters
            WHERE name = ?
            LIMIT 1
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(fighter_from_row).transpose()
    }

    async fn insert(&self, fighter: Fighter) -> Result<()> {
        let skills = encode_skills(&fighter.skills)?;
        let created_at = encode_timestamp(fighter.created_at)?;
        let updated_at = fighter.updated_at.map(encode_timestamp).transpose()?;

        let result = sqlx::query(
            r#"
            INSERT INTO fighters (id, name, skills, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(fighter.id.as_str())
        .bind(fighter.name.as_str())
        .bind(skills)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => {
                Err(StorageError::Conflict(fighter.name.to_string()))
            }
            Err(err) => Err(map_sqlx_error(err)),
        }
    }

    async fn modify(&self, name: &FighterName, edit: FighterEdit) -> Result<Option<Fighter>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let row = sqlx::query(
            r#"
            SELECT id, name, skills, created_at, updated_at
            FROM fighters
            WHERE name = ?
            FOR UPDATE
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        // Dropping the transaction without committing rolls it back.
        let Some(row) = row else {
            return Ok(None);
        };

        let mut fighter = fighter_from_row(&row)?;
        fighter.apply_edit(edit);

        let skills = encode_skills(&fighter.skills)?;
        let updated_at = fighter.updated_at.map(encode_timestamp).transpose()?;

        sqlx::query(
            r#"
            UPDATE fighters
            SET skills = ?, updated_at = ?
            WHERE name = ?
            "#,
        )
        .bind(skills)
        .bind(updated_at)
        .bind(name.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(Some(fighter))
    }

    async fn remove(&self, name: &FighterName) -> Result<Option<Fighter>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let row = sqlx::query(
            r#"
            SELECT id, name, skills, created_at, updated_at
            FROM fighters
            WHERE name = ?
            FOR UPDATE
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let fighter = fighter_from_row(&row)?;

        sqlx::query("DELETE FROM fighters WHERE name = ?")
            .bind(name.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(Some(fighter))
    }
}
