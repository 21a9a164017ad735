//! Agregador de formulario: un registro tipado por flujo, compartido por todos
//! los steps de una sesión.
//!
//! Cada step escribe sólo sus propios campos (`StepKind::editable_fields`);
//! ningún campo se borra durante la sesión. Review lee una instantánea
//! ordenada de todo lo ingresado.

mod field;
mod record;
mod review;

pub use field::FormField;
pub use record::{AdoptionForm, ContactInfo, FormRecord, ServiceForm};
pub use review::{confirmation_notice, review_snapshot, ConfirmationNotice, ReviewSnapshot};
