use pet_domain::Booking;
use serde::Serialize;

use super::WizardSession;
use crate::validation::FieldIssue;

/// Motivo por el que Next/Back no se aplicó.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Blocked {
    /// Campos requeridos del step ausentes o inválidos.
    Incomplete(Vec<FieldIssue>),
    /// Back en el primer step.
    AtFirstStep,
    /// Confirmation no tiene salida.
    Terminal,
    /// Otra sesión confirmó la misma franja antes del envío; la sesión sigue
    /// en Review.
    SlotTaken(Booking),
    SubmissionRejected(String),
}

/// Resultado de una transición. Siempre devuelve la sesión.
#[must_use]
#[derive(Debug, Clone)]
pub enum Transition {
    Moved(WizardSession),
    Blocked(WizardSession, Blocked),
}

impl Transition {
    pub fn is_moved(&self) -> bool {
        matches!(self, Transition::Moved(_))
    }

    pub fn blocked(&self) -> Option<&Blocked> {
        match self {
            Transition::Moved(_) => None,
            Transition::Blocked(_, reason) => Some(reason),
        }
    }

    pub fn session(&self) -> &WizardSession {
        match self {
            Transition::Moved(s) | Transition::Blocked(s, _) => s,
        }
    }

    pub fn into_session(self) -> WizardSession {
        match self {
            Transition::Moved(s) | Transition::Blocked(s, _) => s,
        }
    }
}
