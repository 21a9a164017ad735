use serde::{Deserialize, Serialize};
use std::fmt;

use crate::form::FormField;

/// Pantalla del asistente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    PersonalInfo,
    Survey,
    Schedule,
    Details,
    Review,
    /// Terminal. Sólo se alcanza desde `Review` con el envío final.
    Confirmation,
}

impl StepKind {
    /// Campos que deben estar presentes para habilitar "Next".
    pub fn required_fields(self) -> &'static [FormField] {
        match self {
            StepKind::PersonalInfo => &[FormField::Name, FormField::Email, FormField::Phone],
            StepKind::Survey => &[FormField::AdoptionReason, FormField::HomeEnvironment],
            StepKind::Schedule => &[FormField::AppointmentDate, FormField::AppointmentTime],
            StepKind::Details => &[FormField::PetName, FormField::PetBreed],
            StepKind::Review | StepKind::Confirmation => &[],
        }
    }

    /// Campos que el step puede escribir. Review y Confirmation son de sólo
    /// lectura.
    pub fn editable_fields(self) -> &'static [FormField] {
        match self {
            StepKind::Details => &[FormField::PetName, FormField::PetBreed, FormField::SpecialNotes],
            StepKind::Review | StepKind::Confirmation => &[],
            other => other.required_fields(),
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, StepKind::Confirmation)
    }

    pub fn is_review(self) -> bool {
        matches!(self, StepKind::Review)
    }

    /// Texto del botón de avance.
    pub fn next_label(self) -> Option<&'static str> {
        match self {
            StepKind::Review => Some("Confirm & Submit"),
            StepKind::Confirmation => None,
            _ => Some("Next Step"),
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Current,
    Upcoming,
}

/// Entrada de la barra de progreso (breadcrumbs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepProgress {
    pub index: usize,
    pub step: StepKind,
    pub label: &'static str,
    pub state: StepState,
}
