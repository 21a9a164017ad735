//! Selector de calendario y franjas.
//!
//! Función pura de (mes, hoy, disponibilidad del servicio, selección actual)
//! hacia una grilla renderizable. La selección (`SlotSelection`) vive en el
//! formulario del flujo de servicio; aquí sólo se definen sus reglas:
//! - días anteriores a hoy (granularidad de día) están deshabilitados;
//! - elegir un día válido fija la fecha y limpia la franja;
//! - una franja ocupada no se puede elegir (no-op);
//! - navegar de mes sólo cambia la grilla visible.

mod grid;
mod month;
mod selection;

pub use grid::{build_grid, CalendarGrid, DayCell, SlotCell};
pub use month::YearMonth;
pub use selection::{IgnoredReason, Selection, SlotSelection};
