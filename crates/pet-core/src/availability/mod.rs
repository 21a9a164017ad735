//! Disponibilidad de franjas: reservas existentes y consultas de conflicto.
//!
//! - `AvailabilityStore`: contrato append-only (sin borrado ni edición).
//! - `InMemoryAvailabilityStore`: lista en memoria, un único escritor.
//! - `ServiceAvailability`: vista filtrada por servicio usada por el
//!   calendario.

mod store;

pub use store::{AvailabilityStore, InMemoryAvailabilityStore, ServiceAvailability};
