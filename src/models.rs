//! Résumé Models
//!
//! Records as they are kept in the store and written to local storage.
//! Field names on the wire match the data already saved by earlier
//! versions of the app, so existing browsers keep their records.

use serde::{Deserialize, Serialize};

/// Education block of a résumé
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    #[serde(rename = "titulo")]
    pub degree: String,
    #[serde(rename = "institucion")]
    pub institution: String,
    #[serde(rename = "añoGraduacion")]
    pub graduation_year: String,
}

/// One entry of the work history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    #[serde(rename = "empleador")]
    pub employer: String,
    #[serde(rename = "cargo")]
    pub title: String,
    #[serde(rename = "fechaInicio")]
    pub start_date: String,
    #[serde(rename = "fechaFin")]
    pub end_date: String,
    #[serde(rename = "responsabilidades")]
    pub responsibilities: String,
}

/// A stored résumé
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(rename = "nombre")]
    pub full_name: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "telefono", default)]
    pub phone: String,
    #[serde(rename = "educacion")]
    pub education: Education,
    #[serde(rename = "experienciaLaboral", default)]
    pub work_history: Vec<WorkExperience>,
    /// Data URL of the uploaded photo
    #[serde(rename = "foto")]
    pub photo: String,
    /// Whether the detail panel is open
    #[serde(rename = "selected", default)]
    pub expanded: bool,
}

impl Education {
    /// "Degree, Institution, Year"
    pub fn summary(&self) -> String {
        format!("{}, {}, {}", self.degree, self.institution, self.graduation_year)
    }
}
