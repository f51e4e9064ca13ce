//! Résumé Card Component
//!
//! One entry of the list. Clicking the card toggles its detail panel.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::{ResumeRecord, WorkExperience};
use crate::store::{store_remove_record, store_toggle_expanded, use_app_store};

fn work_entry(exp: WorkExperience) -> impl IntoView {
    view! {
        <li>
            <strong>{exp.title.clone()}</strong>
            " en " {exp.employer.clone()}
            " (" {exp.start_date.clone()} " - " {exp.end_date.clone()} ")"
            <p>{exp.responsibilities}</p>
        </li>
    }
}

/// A single résumé in the list, addressed by its position
#[component]
pub fn ResumeCard(index: usize, record: ResumeRecord) -> impl IntoView {
    let store = use_app_store();

    let ResumeRecord {
        full_name,
        email,
        phone,
        education,
        work_history,
        photo,
        expanded,
    } = record;

    let details = expanded.then(|| {
        let name = full_name.clone();
        let mail = email.clone();
        view! {
            <div class="resume-details">
                <h3>"Detalles del Currículo"</h3>
                <p><strong>"Nombre: "</strong>{name}</p>
                <p><strong>"Correo: "</strong>{mail}</p>
                <p><strong>"Teléfono: "</strong>{phone}</p>
                <p><strong>"Educación: "</strong>{education.summary()}</p>
                <p><strong>"Experiencia Laboral:"</strong></p>
                <ul>
                    {work_history.into_iter().map(work_entry).collect_view()}
                </ul>
                <img src=photo alt="Foto" />
                <DeleteConfirmButton
                    button_class="delete-btn"
                    label="Eliminar Currículo"
                    on_confirm=move |_| store_remove_record(&store, index)
                />
            </div>
        }
    });

    let card_class = if expanded { "resume-card expanded" } else { "resume-card" };

    view! {
        <div
            class=card_class
            on:click=move |_| store_toggle_expanded(&store, index)
        >
            <h2>{full_name}</h2>
            <p>{email}</p>
            {details}
        </div>
    }
}
