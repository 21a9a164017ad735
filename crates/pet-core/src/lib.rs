//! pet-core: asistente de reservas por pasos (adopción y servicios)
pub mod availability;
pub mod calendar;
pub mod errors;
pub mod flow;
pub mod form;
pub mod validation;
pub mod wizard;

pub use availability::{AvailabilityStore, InMemoryAvailabilityStore, ServiceAvailability};
pub use calendar::{build_grid, CalendarGrid, IgnoredReason, Selection, SlotSelection, YearMonth};
pub use errors::CoreWizardError;
pub use flow::{FlowDefinition, FlowKind, StepKind, StepProgress, StepState};
pub use form::{ConfirmationNotice, FormField, FormRecord, ReviewSnapshot};
pub use validation::{FieldIssue, IssueKind, ValidationPolicy};
pub use wizard::{AdoptionApplication, Blocked, BookingTarget, Clock, DiscardingSink, FixedClock,
                 InMemorySubmissionSink, SubmissionSink, SystemClock, Transition, WizardEngine, WizardSession};
