//! Form Draft
//!
//! Transient values typed into the résumé form. A draft is validated
//! before submission and turned into a [`ResumeRecord`] once the photo
//! has been encoded.

use crate::error::FormError;
use crate::models::{Education, ResumeRecord, WorkExperience};
use crate::records;

/// Every input of the form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    FirstName,
    LastName,
    Email,
    Phone,
    Degree,
    Institution,
    GraduationYear,
    Employer,
    Title,
    StartDate,
    EndDate,
    Responsibilities,
    Photo,
}

/// Form sections: heading and the text fields shown under it
pub const SECTIONS: &[(&str, &[DraftField])] = &[
    (
        "Información Personal",
        &[DraftField::FirstName, DraftField::LastName, DraftField::Email, DraftField::Phone],
    ),
    (
        "Educación",
        &[DraftField::Degree, DraftField::Institution, DraftField::GraduationYear],
    ),
    (
        "Experiencia Laboral",
        &[
            DraftField::Employer,
            DraftField::Title,
            DraftField::StartDate,
            DraftField::EndDate,
            DraftField::Responsibilities,
        ],
    ),
];

impl DraftField {
    /// Stable identifier, also used as the input's `name`
    pub fn key(self) -> &'static str {
        match self {
            DraftField::FirstName => "first_name",
            DraftField::LastName => "last_name",
            DraftField::Email => "email",
            DraftField::Phone => "phone",
            DraftField::Degree => "degree",
            DraftField::Institution => "institution",
            DraftField::GraduationYear => "graduation_year",
            DraftField::Employer => "employer",
            DraftField::Title => "title",
            DraftField::StartDate => "start_date",
            DraftField::EndDate => "end_date",
            DraftField::Responsibilities => "responsibilities",
            DraftField::Photo => "photo",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            DraftField::FirstName => "Nombre",
            DraftField::LastName => "Apellido",
            DraftField::Email => "Correo electrónico",
            DraftField::Phone => "Número de teléfono",
            DraftField::Degree => "Título obtenido",
            DraftField::Institution => "Institución educativa",
            DraftField::GraduationYear => "Año de graduación",
            DraftField::Employer => "Empleador",
            DraftField::Title => "Cargo",
            DraftField::StartDate => "Fecha de inicio",
            DraftField::EndDate => "Fecha de fin",
            DraftField::Responsibilities => "Responsabilidades",
            DraftField::Photo => "Agregar fotografía",
        }
    }

    /// HTML input type
    pub fn input_type(self) -> &'static str {
        match self {
            DraftField::Email => "email",
            DraftField::Phone => "tel",
            DraftField::Photo => "file",
            _ => "text",
        }
    }

    pub fn is_multiline(self) -> bool {
        self == DraftField::Responsibilities
    }

    /// Phone is the only optional input
    pub fn is_required(self) -> bool {
        self != DraftField::Phone
    }
}

/// Text values of the form; the chosen photo lives next to it as a file handle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub degree: String,
    pub institution: String,
    pub graduation_year: String,
    pub employer: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub responsibilities: String,
}

impl FormDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::FirstName => &self.first_name,
            DraftField::LastName => &self.last_name,
            DraftField::Email => &self.email,
            DraftField::Phone => &self.phone,
            DraftField::Degree => &self.degree,
            DraftField::Institution => &self.institution,
            DraftField::GraduationYear => &self.graduation_year,
            DraftField::Employer => &self.employer,
            DraftField::Title => &self.title,
            DraftField::StartDate => &self.start_date,
            DraftField::EndDate => &self.end_date,
            DraftField::Responsibilities => &self.responsibilities,
            DraftField::Photo => "",
        }
    }

    /// Set a text field. The photo is not a text field and is ignored.
    pub fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::FirstName => &mut self.first_name,
            DraftField::LastName => &mut self.last_name,
            DraftField::Email => &mut self.email,
            DraftField::Phone => &mut self.phone,
            DraftField::Degree => &mut self.degree,
            DraftField::Institution => &mut self.institution,
            DraftField::GraduationYear => &mut self.graduation_year,
            DraftField::Employer => &mut self.employer,
            DraftField::Title => &mut self.title,
            DraftField::StartDate => &mut self.start_date,
            DraftField::EndDate => &mut self.end_date,
            DraftField::Responsibilities => &mut self.responsibilities,
            DraftField::Photo => return,
        };
        *slot = value;
    }

    /// Required fields that are still empty, in form order
    pub fn missing_fields(&self, photo_chosen: bool) -> Vec<DraftField> {
        let mut missing: Vec<DraftField> = SECTIONS
            .iter()
            .flat_map(|(_, fields)| fields.iter().copied())
            .filter(|f| f.is_required() && self.get(*f).is_empty())
            .collect();
        if !photo_chosen {
            missing.push(DraftField::Photo);
        }
        missing
    }

    pub fn validate(&self, photo_chosen: bool) -> Result<(), FormError> {
        let missing = self.missing_fields(photo_chosen);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }

    /// Build the record for an encoded photo. New records start collapsed.
    pub fn into_record(self, photo: String) -> ResumeRecord {
        ResumeRecord {
            full_name: format!("{} {}", self.first_name, self.last_name),
            email: self.email,
            phone: self.phone,
            education: Education {
                degree: self.degree,
                institution: self.institution,
                graduation_year: self.graduation_year,
            },
            work_history: vec![WorkExperience {
                employer: self.employer,
                title: self.title,
                start_date: self.start_date,
                end_date: self.end_date,
                responsibilities: self.responsibilities,
            }],
            photo,
            expanded: false,
        }
    }

    pub fn reset(&mut self) {
        *self = FormDraft::default();
    }
}

/// Append the record for a submitted draft and clear the draft.
/// An empty `photo` counts as no photo chosen; a rejected draft leaves
/// both the list and the draft untouched.
pub fn commit_draft(
    list: &mut Vec<ResumeRecord>,
    draft: &mut FormDraft,
    photo: String,
) -> Result<(), FormError> {
    draft.validate(!photo.is_empty())?;
    let record = draft.clone().into_record(photo);
    log::info!("adding record for '{}'", record.full_name);
    records::append(list, record);
    draft.reset();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MISSING_FIELDS_MESSAGE;

    fn filled() -> FormDraft {
        FormDraft {
            first_name: "Ana".to_string(),
            last_name: "Pérez".to_string(),
            email: "ana@example.com".to_string(),
            phone: String::new(),
            degree: "Ingeniería".to_string(),
            institution: "UNAM".to_string(),
            graduation_year: "2019".to_string(),
            employer: "Acme".to_string(),
            title: "Desarrolladora".to_string(),
            start_date: "2019".to_string(),
            end_date: "2023".to_string(),
            responsibilities: "Backend".to_string(),
        }
    }

    #[test]
    fn test_complete_draft_is_valid_without_phone() {
        assert_eq!(filled().validate(true), Ok(()));
    }

    #[test]
    fn test_missing_photo_rejected() {
        assert_eq!(
            filled().validate(false),
            Err(FormError::MissingFields(vec![DraftField::Photo]))
        );
    }

    #[test]
    fn test_missing_fields_in_form_order() {
        let mut draft = filled();
        draft.set(DraftField::Responsibilities, String::new());
        draft.set(DraftField::Email, String::new());
        assert_eq!(
            draft.missing_fields(true),
            vec![DraftField::Email, DraftField::Responsibilities]
        );
    }

    #[test]
    fn test_empty_draft_lists_every_required_field() {
        let missing = FormDraft::default().missing_fields(false);
        assert_eq!(missing.len(), 12);
        assert!(!missing.contains(&DraftField::Phone));
        assert_eq!(missing.last(), Some(&DraftField::Photo));
    }

    #[test]
    fn test_set_and_get_round_through_every_text_field() {
        let mut draft = FormDraft::default();
        for (_, fields) in SECTIONS {
            for field in fields.iter() {
                draft.set(*field, field.key().to_string());
            }
        }
        for (_, fields) in SECTIONS {
            for field in fields.iter() {
                assert_eq!(draft.get(*field), field.key());
            }
        }
        draft.set(DraftField::Photo, "ignored".to_string());
        assert_eq!(draft.get(DraftField::Photo), "");
    }

    #[test]
    fn test_into_record() {
        let mut draft = filled();
        draft.phone = "555-0101".to_string();
        let record = draft.into_record("data:image/png;base64,AAAA".to_string());
        assert_eq!(record.full_name, "Ana Pérez");
        assert_eq!(record.phone, "555-0101");
        assert_eq!(record.education.graduation_year, "2019");
        assert_eq!(record.work_history.len(), 1);
        assert_eq!(record.work_history[0].employer, "Acme");
        assert_eq!(record.photo, "data:image/png;base64,AAAA");
        assert!(!record.expanded);
    }

    #[test]
    fn test_commit_appends_one_record_and_clears_draft() {
        let mut list = vec![filled().into_record("data:image/png;base64,AA==".to_string())];
        let mut draft = filled();

        let result = commit_draft(&mut list, &mut draft, "data:image/png;base64,BB==".to_string());

        assert_eq!(result, Ok(()));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].photo, "data:image/png;base64,BB==");
        assert_eq!(draft, FormDraft::default());
    }

    #[test]
    fn test_commit_with_empty_field_appends_nothing() {
        let mut list = Vec::new();
        let mut draft = filled();
        draft.set(DraftField::Institution, String::new());
        let before = draft.clone();

        let err = commit_draft(&mut list, &mut draft, "data:image/png;base64,AA==".to_string())
            .unwrap_err();

        assert_eq!(err, FormError::MissingFields(vec![DraftField::Institution]));
        assert_eq!(err.user_message(), MISSING_FIELDS_MESSAGE);
        assert!(list.is_empty());
        assert_eq!(draft, before);
    }

    #[test]
    fn test_commit_without_photo_appends_nothing() {
        let mut list = Vec::new();
        let mut draft = filled();
        let err = commit_draft(&mut list, &mut draft, String::new()).unwrap_err();
        assert_eq!(err, FormError::MissingFields(vec![DraftField::Photo]));
        assert!(list.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut draft = filled();
        draft.reset();
        assert_eq!(draft, FormDraft::default());
    }
}
