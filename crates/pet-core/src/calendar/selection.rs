use chrono::NaiveDate;
use pet_domain::TimeSlot;
use serde::{Deserialize, Serialize};

use crate::availability::ServiceAvailability;

/// Resultado de una selección en el calendario. `Ignored` deja el estado
/// intacto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    Applied,
    Ignored(IgnoredReason),
}

impl Selection {
    pub fn is_applied(&self) -> bool {
        matches!(self, Selection::Applied)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoredReason {
    /// El día es anterior a hoy.
    PastDate,
    /// La franja ya tiene una reserva para este servicio y día.
    SlotTaken,
    /// Se eligió una franja sin fecha activa.
    NoActiveDate,
    /// La sesión no está en el step de agenda (o el flujo no agenda).
    NotScheduling,
}

/// Fecha y franja elegidas en el step de agenda.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSelection {
    date: Option<NaiveDate>,
    slot: Option<TimeSlot>,
}

impl SlotSelection {
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn slot(&self) -> Option<TimeSlot> {
        self.slot
    }

    /// Par (fecha, franja) cuando ambos están elegidos.
    pub fn committed(&self) -> Option<(NaiveDate, TimeSlot)> {
        self.date.zip(self.slot)
    }

    /// Fija la fecha activa y limpia la franja. Días anteriores a `today`
    /// se ignoran.
    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> Selection {
        if date < today {
            return Selection::Ignored(IgnoredReason::PastDate);
        }
        self.date = Some(date);
        self.slot = None;
        Selection::Applied
    }

    pub fn select_slot(&mut self, slot: TimeSlot, availability: &ServiceAvailability<'_>) -> Selection {
        let Some(date) = self.date else {
            return Selection::Ignored(IgnoredReason::NoActiveDate);
        };
        if availability.is_taken(date, slot) {
            return Selection::Ignored(IgnoredReason::SlotTaken);
        }
        self.slot = Some(slot);
        Selection::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::{AvailabilityStore, InMemoryAvailabilityStore};
    use pet_domain::Booking;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn changing_date_clears_slot_even_for_same_day() {
        let store = InMemoryAvailabilityStore::new();
        let view = ServiceAvailability::new(&store, "S1");
        let mut sel = SlotSelection::default();
        assert!(sel.select_date(day(10), day(1)).is_applied());
        assert!(sel.select_slot(TimeSlot::Afternoon, &view).is_applied());
        assert_eq!(sel.committed(), Some((day(10), TimeSlot::Afternoon)));

        assert!(sel.select_date(day(12), day(1)).is_applied());
        assert_eq!(sel.slot(), None);

        sel.select_slot(TimeSlot::Morning, &view);
        sel.select_date(day(12), day(1));
        assert_eq!(sel.slot(), None);
    }

    #[test]
    fn past_date_is_rejected_but_today_is_allowed() {
        let mut sel = SlotSelection::default();
        assert_eq!(sel.select_date(day(9), day(10)), Selection::Ignored(IgnoredReason::PastDate));
        assert_eq!(sel, SlotSelection::default());
        assert!(sel.select_date(day(10), day(10)).is_applied());
    }

    #[test]
    fn taken_slot_is_a_no_op() {
        let mut store = InMemoryAvailabilityStore::new();
        store.append(Booking::new("S1", day(10), TimeSlot::Morning)).unwrap();
        let view = ServiceAvailability::new(&store, "S1");
        let mut sel = SlotSelection::default();
        sel.select_date(day(10), day(1));
        let before = sel;
        assert_eq!(sel.select_slot(TimeSlot::Morning, &view), Selection::Ignored(IgnoredReason::SlotTaken));
        assert_eq!(sel, before);
    }

    #[test]
    fn slot_without_date_is_ignored() {
        let store = InMemoryAvailabilityStore::new();
        let view = ServiceAvailability::new(&store, "S1");
        let mut sel = SlotSelection::default();
        assert_eq!(sel.select_slot(TimeSlot::Morning, &view), Selection::Ignored(IgnoredReason::NoActiveDate));
    }
}
