//! UI Components
//!
//! Leptos components for the form and the résumé list.

mod resume_form;
mod resume_list;
mod resume_card;
mod delete_confirm_button;

pub use resume_form::ResumeForm;
pub use resume_list::ResumeList;
pub use resume_card::ResumeCard;
pub use delete_confirm_button::DeleteConfirmButton;
