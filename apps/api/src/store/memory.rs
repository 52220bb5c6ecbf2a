use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use super::{ContentStore, Record, StoreError};

#[derive(Debug, Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, Value>,
}

/// In-process content store. Rows are kept as serialized JSON keyed by table,
/// ids are assigned per table starting at 1 and never reused.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<&'static str, Table>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<&'static str, Table>> {
        self.tables.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<&'static str, Table>> {
        self.tables
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn encode<R: Record>(record: &R) -> Result<Value, StoreError> {
    serde_json::to_value(record).map_err(|source| StoreError::Corrupt {
        table: R::TABLE,
        source,
    })
}

fn decode<R: Record>(value: &Value) -> Result<R, StoreError> {
    serde_json::from_value(value.clone()).map_err(|source| StoreError::Corrupt {
        table: R::TABLE,
        source,
    })
}

#[async_trait]
impl ContentStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list<R: Record>(&self) -> Result<Vec<R>, StoreError> {
        let tables = self.read();
        let rows: Vec<R> = match tables.get(R::TABLE) {
            Some(table) => table.rows.values().map(decode::<R>).collect::<Result<_, _>>()?,
            None => Vec::new(),
        };
        debug!("Loaded {} rows from {}", rows.len(), R::TABLE);
        Ok(rows)
    }

    async fn get<R: Record>(&self, id: i64) -> Result<Option<R>, StoreError> {
        let tables = self.read();
        tables
            .get(R::TABLE)
            .and_then(|table| table.rows.get(&id))
            .map(decode::<R>)
            .transpose()
    }

    async fn insert<R: Record>(&self, mut record: R) -> Result<R, StoreError> {
        let mut tables = self.write();
        let table = tables.entry(R::TABLE).or_default();
        if R::SINGLETON && !table.rows.is_empty() {
            return Err(StoreError::Conflict {
                table: R::TABLE,
                message: "table holds at most one row".to_string(),
            });
        }
        table.last_id += 1;
        record.set_id(table.last_id);
        table.rows.insert(record.id(), encode(&record)?);
        info!("Inserted {} record {}", R::TABLE, record.id());
        Ok(record)
    }

    async fn update<R: Record>(&self, record: R) -> Result<Option<R>, StoreError> {
        let mut tables = self.write();
        let Some(row) = tables
            .get_mut(R::TABLE)
            .and_then(|table| table.rows.get_mut(&record.id()))
        else {
            return Ok(None);
        };
        *row = encode(&record)?;
        info!("Updated {} record {}", R::TABLE, record.id());
        Ok(Some(record))
    }

    async fn delete<R: Record>(&self, id: i64) -> Result<bool, StoreError> {
        let mut tables = self.write();
        let removed = tables
            .get_mut(R::TABLE)
            .and_then(|table| table.rows.remove(&id))
            .is_some();
        if !removed {
            return Ok(false);
        }

        // ON DELETE SET NULL
        for (table, column) in R::REFERENCED_BY {
            if let Some(referencing) = tables.get_mut(table) {
                for row in referencing.rows.values_mut() {
                    if let Some(field) = row.get_mut(*column) {
                        if field.as_i64() == Some(id) {
                            *field = Value::Null;
                        }
                    }
                }
            }
        }

        info!("Deleted {} record {id}", R::TABLE);
        Ok(true)
    }

    async fn exists(&self, table: &'static str, id: i64) -> Result<bool, StoreError> {
        Ok(self
            .read()
            .get(table)
            .is_some_and(|t| t.rows.contains_key(&id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{make_category, make_interest, make_profile, make_skill};
    use crate::models::profile::Profile;
    use crate::models::skills::{Interest, Skill, SkillCategory};

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let a = store.insert(make_interest("Climbing")).await.unwrap();
        let b = store.insert(make_interest("Chess")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = MemoryStore::new();
        let a = store.insert(make_interest("Climbing")).await.unwrap();
        assert!(store.delete::<Interest>(a.id).await.unwrap());
        let b = store.insert(make_interest("Chess")).await.unwrap();
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn test_list_empty_table() {
        let store = MemoryStore::new();
        let rows: Vec<Interest> = store.list().await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let store = MemoryStore::new();
        let mut ghost = make_interest("Ghost");
        ghost.id = 42;
        assert!(store.update(ghost).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let store = MemoryStore::new();
        let mut row = store.insert(make_interest("Climbing")).await.unwrap();
        row.icon = "mountain".to_string();
        store.update(row.clone()).await.unwrap();
        let loaded: Interest = store.get(row.id).await.unwrap().unwrap();
        assert_eq!(loaded.icon, "mountain");
    }

    #[tokio::test]
    async fn test_delete_category_nulls_skill_reference() {
        let store = MemoryStore::new();
        let category = store.insert(make_category("Backend", 1)).await.unwrap();
        let mut rust = make_skill("Rust", 0, 90);
        rust.category_id = Some(category.id);
        let rust = store.insert(rust).await.unwrap();

        assert!(store.delete::<SkillCategory>(category.id).await.unwrap());

        let loaded: Skill = store.get(rust.id).await.unwrap().unwrap();
        assert_eq!(loaded.category_id, None);
        assert_eq!(loaded.name, "Rust");
    }

    #[tokio::test]
    async fn test_exists() {
        let store = MemoryStore::new();
        let row = store.insert(make_interest("Chess")).await.unwrap();
        assert!(store.exists("interests", row.id).await.unwrap());
        assert!(!store.exists("interests", row.id + 1).await.unwrap());
        assert!(!store.exists("skills", 1).await.unwrap());
    }

    #[tokio::test]
    async fn test_singleton_rejects_second_row() {
        let store = MemoryStore::new();
        store.insert(make_profile("Ada")).await.unwrap();
        let err = store.insert(make_profile("Grace")).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict { .. }));
        let rows: Vec<Profile> = store.list().await.unwrap();
        assert_eq!(rows.len(), 1);
    }
}
