//! Record Persistence
//!
//! The whole collection lives under a single local storage key as a JSON
//! array. [`RecordStorage`] is the seam between the reactive store and the
//! browser, so the load/save logic can be tested against an in-memory map.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use crate::error::{StorageError, StorageResult};
use crate::models::ResumeRecord;
use crate::records;

/// Key-value backend holding serialized records
pub trait RecordStorage {
    /// Raw value under `key`, `None` if nothing was stored yet
    fn get_raw(&self, key: &str) -> StorageResult<Option<String>>;

    fn set_raw(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Load the collection; an absent key is an empty collection
    fn load(&self, key: &str) -> StorageResult<Vec<ResumeRecord>> {
        match self.get_raw(key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(StorageError::Deserialize),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, key: &str, records: &[ResumeRecord]) -> StorageResult<()> {
        let raw = serde_json::to_string(records).map_err(StorageError::Serialize)?;
        self.set_raw(key, &raw)
    }
}

/// Load records, falling back to an empty list when the store is
/// unreachable or holds something unreadable. At most one record comes
/// back expanded.
pub fn load_or_default<S: RecordStorage + ?Sized>(storage: &S, key: &str) -> Vec<ResumeRecord> {
    match storage.load(key) {
        Ok(mut list) => {
            let closed = records::collapse_extra_expanded(&mut list);
            if closed > 0 {
                log::warn!("collapsed {} extra expanded records", closed);
            }
            log::info!("loaded {} records from '{}'", list.len(), key);
            list
        }
        Err(e) => {
            log::warn!("starting with no records: {}", e);
            Vec::new()
        }
    }
}

/// `window.localStorage`
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let inner = window
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { inner })
    }
}

impl RecordStorage for LocalStorage {
    fn get_raw(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn set_raw(&self, key: &str, value: &str) -> StorageResult<()> {
        self.inner
            .set_item(key, value)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

/// In-memory store used by tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl RecordStorage for MemoryStorage {
    fn get_raw(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Education, WorkExperience};

    const KEY: &str = "currículos";

    fn make_record(name: &str, expanded: bool) -> ResumeRecord {
        ResumeRecord {
            full_name: name.to_string(),
            email: "someone@example.com".to_string(),
            phone: "555-0101".to_string(),
            education: Education {
                degree: "Lic.".to_string(),
                institution: "UBA".to_string(),
                graduation_year: "2012".to_string(),
            },
            work_history: vec![WorkExperience {
                employer: "Acme".to_string(),
                title: "Analista".to_string(),
                start_date: "2013".to_string(),
                end_date: "2020".to_string(),
                responsibilities: "Reportes\ny auditoría".to_string(),
            }],
            photo: "data:image/png;base64,iVBORw0KGgo=".to_string(),
            expanded,
        }
    }

    #[test]
    fn test_absent_key_loads_empty() {
        let storage = MemoryStorage::default();
        assert!(storage.load(KEY).unwrap().is_empty());
    }

    #[test]
    fn test_reload_reproduces_collection() {
        let storage = MemoryStorage::default();
        let saved = vec![make_record("Ana Pérez", false), make_record("Luis Gómez", true)];
        storage.save(KEY, &saved).unwrap();
        assert_eq!(storage.load(KEY).unwrap(), saved);
    }

    #[test]
    fn test_every_change_is_persisted() {
        let storage = MemoryStorage::default();
        let mut list = Vec::new();

        records::append(&mut list, make_record("Ana", false));
        records::append(&mut list, make_record("Luis", false));
        storage.save(KEY, &list).unwrap();

        records::toggle_expanded(&mut list, 1);
        storage.save(KEY, &list).unwrap();
        assert!(storage.load(KEY).unwrap()[1].expanded);

        records::remove_at(&mut list, 0);
        storage.save(KEY, &list).unwrap();
        let reloaded = storage.load(KEY).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].full_name, "Luis");
    }

    #[test]
    fn test_malformed_data_is_an_error() {
        let storage = MemoryStorage::default();
        storage.set_raw(KEY, "{not json").unwrap();
        assert!(matches!(storage.load(KEY), Err(StorageError::Deserialize(_))));
        assert!(load_or_default(&storage, KEY).is_empty());
    }

    #[test]
    fn test_load_keeps_one_expanded_record() {
        let storage = MemoryStorage::default();
        let saved = vec![
            make_record("Ana", false),
            make_record("Luis", true),
            make_record("Marta", true),
        ];
        storage.save(KEY, &saved).unwrap();

        let loaded = load_or_default(&storage, KEY);
        assert_eq!(loaded.iter().filter(|r| r.expanded).count(), 1);
        assert!(loaded[1].expanded);
        assert!(!loaded[2].expanded);
    }

    #[test]
    fn test_reads_existing_browser_data() {
        let storage = MemoryStorage::default();
        storage
            .set_raw(
                KEY,
                r#"[{"nombre":"Marta Ruiz","correo":"m@example.com","telefono":"",
                    "educacion":{"titulo":"MBA","institucion":"IE","añoGraduacion":"2018"},
                    "experienciaLaboral":[{"empleador":"X","cargo":"CFO","fechaInicio":"2018",
                    "fechaFin":"2022","responsabilidades":"Finanzas"}],
                    "foto":"data:image/png;base64,AA==","selected":false}]"#,
            )
            .unwrap();
        let loaded = load_or_default(&storage, KEY);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].work_history[0].title, "CFO");
    }
}
