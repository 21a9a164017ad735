use chrono::{Days, NaiveDate};
use log::{debug, warn};
use pet_domain::{Booking, TimeSlot};

use crate::errors::CoreWizardError;

/// Almacenamiento de reservas append-only.
pub trait AvailabilityStore {
    /// true si existe una reserva con exactamente (servicio, día, franja).
    fn is_booked(&self, service_id: &str, date: NaiveDate, slot: TimeSlot) -> bool;
    /// Agrega una reserva. Rechaza la tripleta si ya está ocupada.
    fn append(&mut self, booking: Booking) -> Result<(), CoreWizardError>;
    /// Reservas en orden de inserción.
    fn list(&self) -> Vec<Booking>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryAvailabilityStore {
    pub inner: Vec<Booking>,
}

impl InMemoryAvailabilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store con una reserva de mañana `offset_days` después de `today` para
    /// `service_id`, de modo que un arranque en limpio ya muestre un conflicto.
    pub fn seeded_with_conflict(today: NaiveDate, offset_days: u64, service_id: &str) -> Self {
        let mut store = Self::new();
        if let Some(date) = today.checked_add_days(Days::new(offset_days)) {
            store.inner.push(Booking::new(service_id, date, TimeSlot::Morning));
        }
        store
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl AvailabilityStore for InMemoryAvailabilityStore {
    fn is_booked(&self, service_id: &str, date: NaiveDate, slot: TimeSlot) -> bool {
        self.inner.iter().any(|b| b.occupies(service_id, date, slot))
    }

    fn append(&mut self, booking: Booking) -> Result<(), CoreWizardError> {
        if self.is_booked(booking.service_id(), booking.date(), booking.time_slot()) {
            warn!("[availability] rejected duplicate booking {booking}");
            return Err(CoreWizardError::SlotUnavailable(booking));
        }
        debug!("[availability] append {booking} (seq={})", self.inner.len());
        self.inner.push(booking);
        Ok(())
    }

    fn list(&self) -> Vec<Booking> {
        self.inner.clone()
    }
}

/// Vista de disponibilidad restringida a un servicio.
#[derive(Clone, Copy)]
pub struct ServiceAvailability<'a> {
    store: &'a dyn AvailabilityStore,
    service_id: &'a str,
}

impl<'a> ServiceAvailability<'a> {
    pub fn new(store: &'a dyn AvailabilityStore, service_id: &'a str) -> Self {
        Self { store, service_id }
    }

    pub fn service_id(&self) -> &str {
        self.service_id
    }

    pub fn is_taken(&self, date: NaiveDate, slot: TimeSlot) -> bool {
        self.store.is_booked(self.service_id, date, slot)
    }

    /// Franjas ocupadas en un día, en orden de oferta.
    pub fn taken_slots(&self, date: NaiveDate) -> Vec<TimeSlot> {
        TimeSlot::ALL.into_iter().filter(|s| self.is_taken(date, *s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn different_slots_same_day_coexist() {
        let mut store = InMemoryAvailabilityStore::new();
        store.append(Booking::new("S1", day(10), TimeSlot::Morning)).unwrap();
        store.append(Booking::new("S1", day(10), TimeSlot::Afternoon)).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn duplicate_triple_is_rejected_and_store_unchanged() {
        let mut store = InMemoryAvailabilityStore::new();
        store.append(Booking::new("S1", day(10), TimeSlot::Morning)).unwrap();
        let err = store.append(Booking::new("S1", day(10), TimeSlot::Morning)).unwrap_err();
        assert!(matches!(err, CoreWizardError::SlotUnavailable(_)));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn conflict_query_matches_exact_triple_only() {
        let mut store = InMemoryAvailabilityStore::new();
        store.append(Booking::new("S1", day(10), TimeSlot::Morning)).unwrap();
        assert!(store.is_booked("S1", day(10), TimeSlot::Morning));
        assert!(!store.is_booked("S2", day(10), TimeSlot::Morning));
        assert!(!store.is_booked("S1", day(11), TimeSlot::Morning));

        let view = ServiceAvailability::new(&store, "S1");
        assert_eq!(view.taken_slots(day(10)), vec![TimeSlot::Morning]);
        assert!(view.taken_slots(day(11)).is_empty());
    }

    #[test]
    fn seeded_store_books_morning_after_offset() {
        let store = InMemoryAvailabilityStore::seeded_with_conflict(day(1), 5, "service_01");
        assert!(store.is_booked("service_01", day(6), TimeSlot::Morning));
        assert!(!store.is_booked("service_01", day(6), TimeSlot::Afternoon));
    }
}
