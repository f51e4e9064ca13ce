//! Résumé Manager App
//!
//! Root component: rehydrates the record store from local storage and
//! writes it back on every change.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ResumeForm, ResumeList};
use crate::config::AppConfig;
use crate::models::ResumeRecord;
use crate::storage::{self, LocalStorage, RecordStorage};
use crate::store::{AppState, AppStateStoreFields};

fn load_records(key: &str) -> Vec<ResumeRecord> {
    match LocalStorage::open() {
        Ok(local) => storage::load_or_default(&local, key),
        Err(e) => {
            log::warn!("starting with no records: {}", e);
            Vec::new()
        }
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let AppConfig { storage_key: key, title, .. } = config;
    let store = Store::new(AppState::new(load_records(&key)));
    provide_context(store);

    // Persist the whole collection whenever it changes
    Effect::new(move |_| {
        let records = store.records().get();
        match LocalStorage::open().and_then(|local| local.save(&key, &records)) {
            Ok(()) => log::debug!("saved {} records", records.len()),
            Err(e) => log::error!("failed to save records: {}", e),
        }
    });

    view! {
        <div class="app">
            <div class="topbar">
                <h1>{title}</h1>
            </div>

            <ResumeForm />

            <ResumeList />
        </div>
    }
}
