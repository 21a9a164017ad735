//! Validación por step.
//!
//! `Presence` exige que los campos requeridos del step no estén vacíos.
//! `Strict` agrega reglas de formato mínimas (longitud, email, dígitos de
//! teléfono). Ninguna política lanza errores: devuelven la lista de
//! problemas y la transición queda bloqueada mientras no esté vacía.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::flow::StepKind;
use crate::form::{FormField, FormRecord};

const MIN_NAME_LEN: usize = 2;
const MIN_PHONE_DIGITS: usize = 10;
const MIN_ANSWER_LEN: usize = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    #[default]
    Presence,
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    Missing,
    TooShort { min: usize },
    InvalidEmail,
    TooFewDigits { min: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: FormField,
    pub kind: IssueKind,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IssueKind::Missing => write!(f, "{} is required", self.field),
            IssueKind::TooShort { min } => write!(f, "{} needs at least {min} characters", self.field),
            IssueKind::InvalidEmail => write!(f, "{} is not a valid email address", self.field),
            IssueKind::TooFewDigits { min } => write!(f, "{} needs at least {min} digits", self.field),
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    value.rsplit_once('@').is_some_and(|(_, domain)| domain.contains('.'))
}

fn strict_issue(field: FormField, value: &str) -> Option<IssueKind> {
    let trimmed = value.trim();
    match field {
        FormField::Name | FormField::PetName | FormField::PetBreed if trimmed.chars().count() < MIN_NAME_LEN => {
            Some(IssueKind::TooShort { min: MIN_NAME_LEN })
        }
        FormField::AdoptionReason | FormField::HomeEnvironment if trimmed.chars().count() < MIN_ANSWER_LEN => {
            Some(IssueKind::TooShort { min: MIN_ANSWER_LEN })
        }
        FormField::Email if !looks_like_email(trimmed) => Some(IssueKind::InvalidEmail),
        FormField::Phone if trimmed.chars().filter(char::is_ascii_digit).count() < MIN_PHONE_DIGITS => {
            Some(IssueKind::TooFewDigits { min: MIN_PHONE_DIGITS })
        }
        _ => None,
    }
}

impl ValidationPolicy {
    /// Problemas que bloquean "Next" en `step`. Vacío = habilitado.
    pub fn check(&self, step: StepKind, form: &FormRecord) -> Vec<FieldIssue> {
        step.required_fields()
            .iter()
            .filter_map(|&field| {
                if !form.is_present(field) {
                    return Some(FieldIssue { field,
                                             kind: IssueKind::Missing });
                }
                match self {
                    ValidationPolicy::Presence => None,
                    ValidationPolicy::Strict => form.text(field)
                                                    .and_then(|v| strict_issue(field, v))
                                                    .map(|kind| FieldIssue { field, kind }),
                }
            })
            .collect()
    }
}
