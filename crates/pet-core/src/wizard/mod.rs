//! Máquina de estados del asistente de reservas.
//!
//! - `WizardSession`: estado explícito de una sesión (sin estado global).
//! - `WizardEngine`: aplica transiciones sobre una sesión usando el store de
//!   disponibilidad, el sink de solicitudes y el reloj.
//! - `Transition`: resultado de Next/Back; un bloqueo devuelve la sesión
//!   intacta junto al motivo.

mod clock;
mod engine;
mod session;
mod submission;
mod transition;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::WizardEngine;
pub use session::{BookingTarget, WizardSession};
pub use submission::{AdoptionApplication, DiscardingSink, InMemorySubmissionSink, SubmissionSink};
pub use transition::{Blocked, Transition};
