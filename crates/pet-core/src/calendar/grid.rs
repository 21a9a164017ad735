use chrono::NaiveDate;
use pet_domain::TimeSlot;
use serde::Serialize;

use super::{SlotSelection, YearMonth};
use crate::availability::ServiceAvailability;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    /// Día anterior a hoy.
    pub disabled: bool,
    pub selected: bool,
    pub today: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotCell {
    pub slot: TimeSlot,
    pub label: &'static str,
    pub window: String,
    /// Ya reservada para (servicio, fecha activa).
    pub disabled: bool,
    pub selected: bool,
    /// Aviso en línea para franjas ocupadas.
    pub notice: Option<String>,
}

/// Grilla de un mes lista para renderizar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    pub month: YearMonth,
    pub label: String,
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
    /// Vacío mientras no haya fecha activa.
    pub slots: Vec<SlotCell>,
    pub active_date: Option<NaiveDate>,
    pub committed: Option<(NaiveDate, TimeSlot)>,
}

impl CalendarGrid {
    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn slot(&self, slot: TimeSlot) -> Option<&SlotCell> {
        self.slots.iter().find(|s| s.slot == slot)
    }
}

/// Construye la grilla de `month`. Las franjas se calculan para la fecha
/// activa aunque esté fuera del mes visible.
pub fn build_grid(month: YearMonth,
                  today: NaiveDate,
                  selection: &SlotSelection,
                  availability: &ServiceAvailability<'_>)
                  -> CalendarGrid {
    let days = (1..=month.days_in_month()).filter_map(|day| {
                                              let date = month.day(day)?;
                                              Some(DayCell { day,
                                                             date,
                                                             disabled: date < today,
                                                             selected: selection.date() == Some(date),
                                                             today: date == today })
                                          })
                                          .collect();

    let slots = match selection.date() {
        None => Vec::new(),
        Some(active) => TimeSlot::ALL.into_iter()
                                     .map(|slot| {
                                         let taken = availability.is_taken(active, slot);
                                         SlotCell { slot,
                                                    label: slot.label(),
                                                    window: slot.window_label(),
                                                    disabled: taken,
                                                    selected: selection.slot() == Some(slot),
                                                    notice: taken.then(|| {
                                                                      format!("The {} slot is unavailable on this date.",
                                                                              slot.as_str())
                                                                  }) }
                                     })
                                     .collect(),
    };

    CalendarGrid { month,
                   label: month.label(),
                   leading_blanks: month.leading_blanks(),
                   days,
                   slots,
                   active_date: selection.date(),
                   committed: selection.committed() }
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
    fn days_before_today_are_disabled() {
        let store = InMemoryAvailabilityStore::new();
        let view = ServiceAvailability::new(&store, "S1");
        let grid = build_grid(YearMonth::new(2024, 5).unwrap(), day(15), &SlotSelection::default(), &view);
        assert_eq!(grid.leading_blanks, 6);
        assert_eq!(grid.days.len(), 30);
        assert!(grid.day(14).unwrap().disabled);
        assert!(!grid.day(15).unwrap().disabled);
        assert!(grid.day(15).unwrap().today);
        assert!(grid.slots.is_empty());
        assert_eq!(grid.committed, None);
    }

    #[test]
    fn taken_slot_is_disabled_with_notice() {
        let mut store = InMemoryAvailabilityStore::new();
        store.append(Booking::new("S1", day(10), TimeSlot::Morning)).unwrap();
        let view = ServiceAvailability::new(&store, "S1");
        let mut sel = SlotSelection::default();
        sel.select_date(day(10), day(1));

        let grid = build_grid(YearMonth::new(2024, 5).unwrap(), day(1), &sel, &view);
        let morning = grid.slot(TimeSlot::Morning).unwrap();
        assert!(morning.disabled);
        assert_eq!(morning.label, "Morning");
        assert_eq!(morning.window, "9:00 AM - 12:00 PM");
        assert_eq!(morning.notice.as_deref(), Some("The morning slot is unavailable on this date."));
        let afternoon = grid.slot(TimeSlot::Afternoon).unwrap();
        assert!(!afternoon.disabled);
        assert!(afternoon.notice.is_none());
        assert!(grid.day(10).unwrap().selected);
    }

    #[test]
    fn other_services_do_not_block() {
        let mut store = InMemoryAvailabilityStore::new();
        store.append(Booking::new("S2", day(10), TimeSlot::Morning)).unwrap();
        let view = ServiceAvailability::new(&store, "S1");
        let mut sel = SlotSelection::default();
        sel.select_date(day(10), day(1));
        let grid = build_grid(YearMonth::new(2024, 5).unwrap(), day(1), &sel, &view);
        assert!(grid.slots.iter().all(|s| !s.disabled));
    }
}
