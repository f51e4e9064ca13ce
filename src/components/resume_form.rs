//! Résumé Form Component
//!
//! Collects a new résumé. The draft is validated on submit, the photo is
//! encoded asynchronously, and only then is the record appended and the
//! form cleared.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use crate::draft::{DraftField, FormDraft, SECTIONS};
use crate::photo;
use crate::store::{store_commit_draft, use_app_store};

/// Text input (or textarea) bound to one draft field
fn field_input(field: DraftField, draft: RwSignal<FormDraft>) -> AnyView {
    let value = move || draft.with(|d| d.get(field).to_string());
    let on_input = move |ev: web_sys::Event| {
        draft.update(|d| d.set(field, event_target_value(&ev)));
    };

    if field.is_multiline() {
        view! {
            <textarea
                name=field.key()
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    } else {
        view! {
            <input
                type=field.input_type()
                name=field.key()
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    }
}

/// First file picked in a file input, if any
fn chosen_file(ev: &web_sys::Event) -> Option<File> {
    ev.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

/// Form for creating a new résumé
#[component]
pub fn ResumeForm() -> impl IntoView {
    let store = use_app_store();
    let form_ref = NodeRef::<html::Form>::new();

    let draft = RwSignal::new(FormDraft::default());
    // File handles are JS objects and stay on this thread
    let (photo_file, set_photo_file) = signal_local::<Option<File>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let current = draft.get_untracked();
        let file = photo_file.get_untracked();
        if let Err(e) = current.validate(file.is_some()) {
            log::debug!("submission rejected: {}", e);
            set_error.set(Some(e.user_message().to_string()));
            return;
        }
        let Some(file) = file else { return };

        set_submitting.set(true);
        spawn_local(async move {
            match photo::read_as_data_url(&file).await {
                Ok(data_url) => {
                    // Commit the values that passed validation, not later edits
                    let mut submitted = current;
                    match store_commit_draft(&store, &mut submitted, data_url) {
                        Ok(()) => {
                            draft.set(submitted);
                            set_photo_file.set(None);
                            set_error.set(None);
                            // Clears the native file input too
                            if let Some(form) = form_ref.get_untracked() {
                                form.reset();
                            }
                        }
                        Err(e) => set_error.set(Some(e.user_message().to_string())),
                    }
                }
                Err(e) => {
                    log::error!("{}", e);
                    set_error.set(Some(e.user_message().to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="resume-form" node_ref=form_ref novalidate=true on:submit=on_submit>
            {SECTIONS.iter().map(|(heading, fields)| view! {
                <h2>{*heading}</h2>
                <div class="form-row">
                    {fields.iter().map(|field| field_input(*field, draft)).collect_view()}
                </div>
            }).collect_view()}

            <div class="form-section">
                <div class="photo-upload">
                    <label for="photo">{DraftField::Photo.placeholder()}</label>
                    <input
                        type="file"
                        id="photo"
                        name=DraftField::Photo.key()
                        accept="image/*"
                        on:change=move |ev| set_photo_file.set(chosen_file(&ev))
                    />
                </div>
            </div>

            {move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}

            <button type="submit" disabled=move || submitting.get()>
                "Agregar Currículo"
            </button>
        </form>
    }
}
