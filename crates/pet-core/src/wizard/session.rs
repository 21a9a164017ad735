use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::{SlotSelection, YearMonth};
use crate::errors::CoreWizardError;
use crate::flow::{FlowDefinition, FlowKind, StepKind, StepProgress};
use crate::form::{confirmation_notice, review_snapshot, ConfirmationNotice, FormField, FormRecord, ReviewSnapshot};

/// Elemento sobre el que trabaja la sesión (mascota o servicio). El asistente
/// sólo necesita su id (clave de reserva) y su nombre (display).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingTarget {
    pub id: String,
    pub name: String,
}

/// Estado de una sesión del asistente, de step 0 a Confirmation.
///
/// Invariante: `current_step < definition().len()` y el formulario es del
/// mismo flujo que la sesión; ambas se verifican también al deserializar. El
/// formulario nunca pierde campos durante la sesión; una sesión nueva empieza
/// con un registro vacío.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSession")]
pub struct WizardSession {
    id: Uuid,
    flow: FlowKind,
    target: BookingTarget,
    current_step: usize,
    form: FormRecord,
    calendar_cursor: YearMonth,
    started_at: DateTime<Utc>,
}

/// Forma serializada sin verificar.
#[derive(Deserialize)]
struct RawSession {
    id: Uuid,
    flow: FlowKind,
    target: BookingTarget,
    current_step: usize,
    form: FormRecord,
    calendar_cursor: YearMonth,
    started_at: DateTime<Utc>,
}

impl TryFrom<RawSession> for WizardSession {
    type Error = CoreWizardError;

    fn try_from(raw: RawSession) -> Result<Self, Self::Error> {
        let steps = raw.flow.definition().len();
        if raw.current_step >= steps {
            return Err(CoreWizardError::InvalidSession(format!("current_step {} out of range for {} flow ({steps} steps)",
                                                               raw.current_step, raw.flow)));
        }
        if raw.form.flow() != raw.flow {
            return Err(CoreWizardError::InvalidSession(format!("{} form in a {} session", raw.form.flow(), raw.flow)));
        }
        Ok(Self { id: raw.id,
                  flow: raw.flow,
                  target: raw.target,
                  current_step: raw.current_step,
                  form: raw.form,
                  calendar_cursor: raw.calendar_cursor,
                  started_at: raw.started_at })
    }
}

impl WizardSession {
    pub(crate) fn new(flow: FlowKind, target: BookingTarget, today: NaiveDate, started_at: DateTime<Utc>) -> Self {
        Self { id: Uuid::new_v4(),
               flow,
               target,
               current_step: 0,
               form: FormRecord::empty(flow),
               calendar_cursor: YearMonth::of(today),
               started_at }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn flow(&self) -> FlowKind {
        self.flow
    }

    pub fn definition(&self) -> &'static FlowDefinition {
        self.flow.definition()
    }

    pub fn target(&self) -> &BookingTarget {
        &self.target
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Step activo. El índice siempre es válido para la definición del flujo.
    pub fn step(&self) -> StepKind {
        self.definition().step(self.current_step).unwrap_or(StepKind::Confirmation)
    }

    pub fn step_label(&self) -> &'static str {
        self.definition().label(self.current_step).unwrap_or_default()
    }

    pub fn is_complete(&self) -> bool {
        self.step().is_terminal()
    }

    pub fn form(&self) -> &FormRecord {
        &self.form
    }

    pub fn schedule(&self) -> Option<&SlotSelection> {
        self.form.schedule()
    }

    pub fn calendar_cursor(&self) -> YearMonth {
        self.calendar_cursor
    }

    pub fn progress(&self) -> Vec<StepProgress> {
        self.definition().progress(self.current_step)
    }

    /// Back habilitado: ni en el primer step ni en Confirmation.
    pub fn can_go_back(&self) -> bool {
        self.current_step > 0 && !self.is_complete()
    }

    pub fn next_label(&self) -> Option<&'static str> {
        self.step().next_label()
    }

    /// Instantánea de todo lo ingresado, tal como la muestra Review.
    pub fn review(&self) -> ReviewSnapshot {
        review_snapshot(&self.form, &self.target.name)
    }

    /// Mensaje final; `None` mientras la sesión no llegue a Confirmation.
    pub fn confirmation(&self) -> Option<ConfirmationNotice> {
        self.is_complete().then(|| confirmation_notice(&self.form, &self.target.name))
    }

    /// Escribe un campo de texto del step activo.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> Result<(), CoreWizardError> {
        if !field.is_text() {
            return Err(CoreWizardError::NotATextField(field));
        }
        let step = self.step();
        if !step.editable_fields().contains(&field) || !self.form.set_text(field, value.into()) {
            return Err(CoreWizardError::FieldNotEditable { field, step });
        }
        Ok(())
    }

    /// Muestra el mes anterior. No toca la fecha ni la franja elegidas.
    pub fn show_prev_month(&mut self) {
        self.calendar_cursor = self.calendar_cursor.prev();
    }

    pub fn show_next_month(&mut self) {
        self.calendar_cursor = self.calendar_cursor.next();
    }

    pub fn show_month(&mut self, month: YearMonth) {
        self.calendar_cursor = month;
    }

    pub(crate) fn form_mut(&mut self) -> &mut FormRecord {
        &mut self.form
    }

    pub(crate) fn advance(&mut self) {
        let last = self.definition().terminal_index();
        self.current_step = (self.current_step + 1).min(last);
    }

    pub(crate) fn retreat(&mut self) {
        self.current_step = self.current_step.saturating_sub(1);
    }
}
