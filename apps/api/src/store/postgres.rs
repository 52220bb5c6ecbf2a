use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info};

use super::{ContentStore, Record, StoreError};

/// Postgres-backed content store. Schema: `migrations/`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `$1, $2, ..., $n`
fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn insert_sql(table: &str, columns: &[&str]) -> String {
    format!(
        "INSERT INTO {table} ({}) VALUES ({}) RETURNING *",
        columns.join(", "),
        placeholders(1, columns.len())
    )
}

pub(crate) fn update_sql(table: &str, columns: &[&str]) -> String {
    let assignments = columns
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{column} = ${}", i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {table} SET {assignments} WHERE id = ${} RETURNING *",
        columns.len() + 1
    )
}

/// Column named by a default Postgres foreign-key constraint
/// (`{table}_{column}_fkey`).
fn fk_column(table: &str, constraint: &str) -> Option<String> {
    constraint
        .strip_prefix(table)?
        .strip_prefix('_')?
        .strip_suffix("_fkey")
        .map(str::to_string)
}

/// Maps unique violations to `Conflict` and foreign-key violations to
/// `InvalidReference`; the rest stay database errors.
fn classify(table: &'static str, err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return StoreError::Conflict {
                table,
                message: db_err.message().to_string(),
            };
        }
        if db_err.is_foreign_key_violation() {
            let column = db_err
                .constraint()
                .and_then(|c| fk_column(table, c))
                .unwrap_or_else(|| "id".to_string());
            return StoreError::InvalidReference { table, column };
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl ContentStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn list<R: Record>(&self) -> Result<Vec<R>, StoreError> {
        let sql = format!("SELECT * FROM {} ORDER BY id", R::TABLE);
        let rows = sqlx::query_as::<_, R>(&sql).fetch_all(&self.pool).await?;
        debug!("Loaded {} rows from {}", rows.len(), R::TABLE);
        Ok(rows)
    }

    async fn get<R: Record>(&self, id: i64) -> Result<Option<R>, StoreError> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", R::TABLE);
        Ok(sqlx::query_as::<_, R>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert<R: Record>(&self, record: R) -> Result<R, StoreError> {
        let sql = insert_sql(R::TABLE, R::COLUMNS);
        let inserted = record
            .bind_columns(sqlx::query_as::<_, R>(&sql))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| classify(R::TABLE, e))?;
        info!("Inserted {} record {}", R::TABLE, inserted.id());
        Ok(inserted)
    }

    async fn update<R: Record>(&self, record: R) -> Result<Option<R>, StoreError> {
        let sql = update_sql(R::TABLE, R::COLUMNS);
        let updated = record
            .bind_columns(sqlx::query_as::<_, R>(&sql))
            .bind(record.id())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify(R::TABLE, e))?;
        if let Some(row) = &updated {
            info!("Updated {} record {}", R::TABLE, row.id());
        }
        Ok(updated)
    }

    async fn delete<R: Record>(&self, id: i64) -> Result<bool, StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", R::TABLE);
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| classify(R::TABLE, e))?;
        let removed = result.rows_affected() > 0;
        if removed {
            info!("Deleted {} record {id}", R::TABLE);
        }
        Ok(removed)
    }

    async fn exists(&self, table: &'static str, id: i64) -> Result<bool, StoreError> {
        let sql = format!("SELECT EXISTS (SELECT 1 FROM {table} WHERE id = $1)");
        Ok(sqlx::query_scalar::<_, bool>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_sql_numbers_every_column() {
        assert_eq!(
            insert_sql("interests", &["name", "icon", "display_order"]),
            "INSERT INTO interests (name, icon, display_order) VALUES ($1, $2, $3) RETURNING *"
        );
    }

    #[test]
    fn test_update_sql_binds_id_last() {
        assert_eq!(
            update_sql("interests", &["name", "icon"]),
            "UPDATE interests SET name = $1, icon = $2 WHERE id = $3 RETURNING *"
        );
    }

    #[test]
    fn test_fk_column_from_default_constraint_name() {
        assert_eq!(
            fk_column("skills", "skills_category_id_fkey").as_deref(),
            Some("category_id")
        );
        assert_eq!(fk_column("skills", "custom_constraint"), None);
    }

    #[test]
    fn test_placeholders_empty() {
        assert_eq!(placeholders(1, 0), "");
    }
}
