//! Errores del núcleo del asistente de reservas.
//!
//! Los fallos de validación NO son errores: bloquean la transición
//! (`Transition::Blocked`). Aquí sólo viven condiciones que el llamador debe
//! tratar de forma explícita.

use pet_domain::Booking;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::flow::StepKind;
use crate::form::FormField;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CoreWizardError {
    /// El id objetivo no existe en el catálogo: la sesión no puede mostrarse.
    #[error("item not found: {0}")] ItemNotFound(String),
    #[error("slot already booked: {0}")] SlotUnavailable(Booking),
    #[error("field '{field}' is not editable at step {step}")] FieldNotEditable { field: FormField, step: StepKind },
    #[error("field '{0}' is set through the calendar, not as text")] NotATextField(FormField),
    #[error("invalid month: year={year} month_index={month_index}")] InvalidMonth { year: i32, month_index: u32 },
    #[error("submission rejected: {0}")] SubmissionRejected(String),
    #[error("invalid session: {0}")] InvalidSession(String),
}
