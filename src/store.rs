//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::draft::{self, FormDraft};
use crate::error::FormError;
use crate::models::ResumeRecord;
use crate::records;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All résumés, in insertion order
    pub records: Vec<ResumeRecord>,
}

impl AppState {
    pub fn new(records: Vec<ResumeRecord>) -> Self {
        Self { records }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append the record built from a submitted draft and clear the draft
pub fn store_commit_draft(
    store: &AppStore,
    draft: &mut FormDraft,
    photo: String,
) -> Result<(), FormError> {
    let field = store.records();
    let mut list = field.write();
    draft::commit_draft(&mut list, draft, photo)
}

/// Remove the record shown at `index`
pub fn store_remove_record(store: &AppStore, index: usize) {
    match records::remove_at(&mut store.records().write(), index) {
        Some(removed) => log::info!("deleted record #{} '{}'", index, removed.full_name),
        None => log::warn!("delete ignored, no record at #{}", index),
    }
}

/// Open the record at `index`, closing any other
pub fn store_toggle_expanded(store: &AppStore, index: usize) {
    let field = store.records();
    let mut list = field.write();
    records::toggle_expanded(&mut list, index);
    log::debug!("expanded record: {:?}", records::expanded_index(&list));
}
