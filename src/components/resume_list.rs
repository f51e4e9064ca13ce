//! Résumé List Component

use leptos::prelude::*;

use crate::components::ResumeCard;
use crate::store::{use_app_store, AppStateStoreFields};

/// All stored résumés in insertion order
#[component]
pub fn ResumeList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="resume-list">
            <For
                each=move || store.records().get().into_iter().enumerate()
                key=|(index, record)| {
                    // Position plus the displayed fields, so a shift or a toggle re-renders
                    (*index, record.expanded, record.full_name.clone(), record.email.clone())
                }
                children=move |(index, record)| view! { <ResumeCard index=index record=record /> }
            />
        </div>
    }
}
