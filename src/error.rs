//! Error Types

use thiserror::Error;

use crate::draft::DraftField;

/// Message shown under the form whenever a submission is rejected
pub const MISSING_FIELDS_MESSAGE: &str = "Por favor completa todos los campos requeridos.";
pub const PHOTO_READ_MESSAGE: &str = "No se pudo leer la fotografía.";

/// Failures reading from or writing to the record store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage access failed: {0}")]
    Access(String),
    #[error("failed to serialize records: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to parse stored records: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Reasons a form submission does not produce a record
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("missing required fields: {}", field_list(.0))]
    MissingFields(Vec<DraftField>),
    #[error("failed to read photo: {0}")]
    PhotoRead(String),
}

impl FormError {
    /// Text shown to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            FormError::MissingFields(_) => MISSING_FIELDS_MESSAGE,
            FormError::PhotoRead(_) => PHOTO_READ_MESSAGE,
        }
    }
}

fn field_list(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type StorageResult<T> = Result<T, StorageError>;
