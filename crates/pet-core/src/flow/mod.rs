//! Tabla de flujos: cada `FlowKind` fija su secuencia ordenada de steps.
//!
//! La tabla reemplaza ramas `match` duplicadas por flujo: los validadores
//! (`StepKind::required_fields`), los campos editables y las etiquetas se
//! consultan siempre a partir de la definición.

mod definition;
mod step;

pub use definition::{FlowDefinition, FlowKind};
pub use step::{StepKind, StepProgress, StepState};
