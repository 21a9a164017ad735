//! Reservas de servicios y franjas horarias.
//!
//! Una `Booking` es inmutable una vez creada: identifica un servicio, un día
//! de calendario y una franja (mañana o tarde). Dos reservas del mismo
//! servicio y día pueden coexistir sólo si ocupan franjas distintas.
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Franja de medio día reservable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    /// 09:00 – 12:00
    Morning,
    /// 13:00 – 17:00
    Afternoon,
}

impl TimeSlot {
    /// Todas las franjas en el orden en que se ofrecen.
    pub const ALL: [TimeSlot; 2] = [TimeSlot::Morning, TimeSlot::Afternoon];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Afternoon => "afternoon",
        }
    }

    /// Etiqueta legible ("Morning" / "Afternoon").
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
        }
    }

    /// Ventana horaria `[inicio, fin)` de la franja.
    pub fn window(&self) -> (NaiveTime, NaiveTime) {
        let (start, end) = match self {
            TimeSlot::Morning => (9, 12),
            TimeSlot::Afternoon => (13, 17),
        };
        (NaiveTime::from_hms_opt(start, 0, 0).unwrap_or(NaiveTime::MIN),
         NaiveTime::from_hms_opt(end, 0, 0).unwrap_or(NaiveTime::MIN))
    }

    /// Texto de la ventana, p.ej. "9:00 AM - 12:00 PM".
    pub fn window_label(&self) -> String {
        let (start, end) = self.window();
        format!("{} - {}", start.format("%-I:%M %p"), end.format("%-I:%M %p"))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(TimeSlot::Morning),
            "afternoon" => Ok(TimeSlot::Afternoon),
            other => Err(DomainError::Validation(format!("franja desconocida: {other}"))),
        }
    }
}

/// Reserva confirmada de un servicio.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    service_id: String,
    date: NaiveDate,
    time_slot: TimeSlot,
}

impl Booking {
    pub fn new(service_id: impl Into<String>, date: NaiveDate, time_slot: TimeSlot) -> Self {
        Self { service_id: service_id.into(),
               date,
               time_slot }
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time_slot(&self) -> TimeSlot {
        self.time_slot
    }

    /// true si la reserva ocupa exactamente (servicio, día, franja).
    pub fn occupies(&self, service_id: &str, date: NaiveDate, slot: TimeSlot) -> bool {
        self.service_id == service_id && self.date == date && self.time_slot == slot
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.service_id, self.date.format("%Y-%m-%d"), self.time_slot)
    }
}
