//! Motor del asistente: resuelve el elemento objetivo, valida y aplica
//! transiciones, y confirma la reserva (o entrega la solicitud) al pasar de
//! Review a Confirmation.

use chrono::NaiveDate;
use log::{debug, info, warn};
use pet_domain::{Booking, Catalog, CatalogItem, TimeSlot};
use uuid::Uuid;

use super::{AdoptionApplication, Blocked, BookingTarget, Clock, DiscardingSink, SubmissionSink, SystemClock,
            Transition, WizardSession};
use crate::availability::{AvailabilityStore, InMemoryAvailabilityStore, ServiceAvailability};
use crate::calendar::{build_grid, CalendarGrid, IgnoredReason, Selection};
use crate::errors::CoreWizardError;
use crate::flow::{FlowKind, StepKind};
use crate::form::FormRecord;
use crate::validation::{FieldIssue, ValidationPolicy};

#[derive(Debug)]
pub struct WizardEngine<S, K, C>
    where S: AvailabilityStore,
          K: SubmissionSink,
          C: Clock
{
    catalog: Catalog,
    store: S,
    sink: K,
    clock: C,
    policy: ValidationPolicy,
}

impl WizardEngine<InMemoryAvailabilityStore, DiscardingSink, SystemClock> {
    /// Motor con store en memoria vacío, sink descartador y reloj del sistema.
    pub fn in_memory(catalog: Catalog) -> Self {
        Self::new_with(catalog, InMemoryAvailabilityStore::new(), DiscardingSink, SystemClock)
    }
}

impl<S, K, C> WizardEngine<S, K, C>
    where S: AvailabilityStore,
          K: SubmissionSink,
          C: Clock
{
    pub fn new_with(catalog: Catalog, store: S, sink: K, clock: C) -> Self {
        Self { catalog,
               store,
               sink,
               clock,
               policy: ValidationPolicy::default() }
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Inicia una sesión para `target_id`: una mascota abre el flujo de
    /// adopción, un servicio el de reserva.
    ///
    /// # Errores
    /// `CoreWizardError::ItemNotFound` si el id no está en el catálogo. Es
    /// terminal para esta sesión: el llamador debe redirigir.
    pub fn start(&self, target_id: &str) -> Result<WizardSession, CoreWizardError> {
        let item = self.catalog
                       .find(target_id)
                       .ok_or_else(|| CoreWizardError::ItemNotFound(target_id.to_string()))?;
        let flow = match item {
            CatalogItem::Pet(_) => FlowKind::Adoption,
            CatalogItem::Service(_) => FlowKind::Service,
        };
        self.open(flow, item)
    }

    /// Como `start`, pero exige el flujo indicado (p.ej. ruta `/book/service/:id`).
    pub fn start_flow(&self, flow: FlowKind, target_id: &str) -> Result<WizardSession, CoreWizardError> {
        let item = match flow {
            FlowKind::Adoption => self.catalog.find_pet(target_id).map(CatalogItem::Pet),
            FlowKind::Service => self.catalog.find_service(target_id).map(CatalogItem::Service),
        };
        match item {
            Some(item) => self.open(flow, item),
            None => Err(CoreWizardError::ItemNotFound(target_id.to_string())),
        }
    }

    fn open(&self, flow: FlowKind, item: CatalogItem<'_>) -> Result<WizardSession, CoreWizardError> {
        let target = BookingTarget { id: item.id().to_string(),
                                     name: item.name().to_string() };
        let session = WizardSession::new(flow, target, self.clock.today(), self.clock.now());
        debug!("[wizard] session {} started flow={} target={}",
               session.id(),
               flow,
               session.target().id);
        Ok(session)
    }

    /// Problemas que bloquean Next en el step activo.
    pub fn issues(&self, session: &WizardSession) -> Vec<FieldIssue> {
        self.policy.check(session.step(), session.form())
    }

    /// Next habilitado.
    pub fn can_advance(&self, session: &WizardSession) -> bool {
        !session.is_complete() && self.issues(session).is_empty()
    }

    /// Avanza un step. De Review a Confirmation primero confirma la reserva
    /// (servicio) o entrega la solicitud (adopción).
    pub fn next(&mut self, mut session: WizardSession) -> Transition {
        let step = session.step();
        if step.is_terminal() {
            return Transition::Blocked(session, Blocked::Terminal);
        }
        let issues = self.issues(&session);
        if !issues.is_empty() {
            debug!("[wizard] session {} blocked at {step}: {} issue(s)", session.id(), issues.len());
            return Transition::Blocked(session, Blocked::Incomplete(issues));
        }

        let entering = session.definition().step(session.current_step() + 1);
        if step.is_review() && entering == Some(StepKind::Confirmation) {
            if let Err(reason) = self.commit(&session) {
                return Transition::Blocked(session, reason);
            }
        }

        let from = session.current_step();
        session.advance();
        debug!("[wizard] session {} {from} -> {} ({})",
               session.id(),
               session.current_step(),
               session.step());
        Transition::Moved(session)
    }

    /// Retrocede un step. Nunca persiste nada.
    pub fn back(&self, mut session: WizardSession) -> Transition {
        if session.is_complete() {
            return Transition::Blocked(session, Blocked::Terminal);
        }
        if session.current_step() == 0 {
            return Transition::Blocked(session, Blocked::AtFirstStep);
        }
        session.retreat();
        debug!("[wizard] session {} back to {}", session.id(), session.step());
        Transition::Moved(session)
    }

    fn commit(&mut self, session: &WizardSession) -> Result<(), Blocked> {
        match session.form() {
            FormRecord::Service(form) => {
                let Some((date, slot)) = form.schedule.committed() else {
                    let issues = ValidationPolicy::Presence.check(StepKind::Schedule, session.form());
                    return Err(Blocked::Incomplete(issues));
                };
                let booking = Booking::new(session.target().id.clone(), date, slot);
                match self.store.append(booking.clone()) {
                    Ok(()) => {
                        info!("[wizard] session {} committed booking {booking}", session.id());
                        Ok(())
                    }
                    Err(CoreWizardError::SlotUnavailable(b)) => {
                        warn!("[wizard] session {} lost slot {b} before submit", session.id());
                        Err(Blocked::SlotTaken(b))
                    }
                    Err(e) => Err(Blocked::SubmissionRejected(e.to_string())),
                }
            }
            FormRecord::Adoption(form) => {
                let application = AdoptionApplication { id: Uuid::new_v4(),
                                                        pet_id: session.target().id.clone(),
                                                        pet_name: session.target().name.clone(),
                                                        form: form.clone(),
                                                        submitted_at: self.clock.now() };
                self.sink.submit(application).map_err(|e| {
                                                  warn!("[wizard] session {} application rejected: {e}", session.id());
                                                  Blocked::SubmissionRejected(e.to_string())
                                              })
            }
        }
    }

    fn scheduling<'s>(&self, session: &'s WizardSession) -> Option<&'s str> {
        (session.step() == StepKind::Schedule).then(|| session.target().id.as_str())
    }

    /// Elige el día activo en el step de agenda (limpia la franja).
    pub fn select_date(&self, session: &mut WizardSession, date: NaiveDate) -> Selection {
        if self.scheduling(session).is_none() {
            return Selection::Ignored(IgnoredReason::NotScheduling);
        }
        let today = self.clock.today();
        match session.form_mut().schedule_mut() {
            Some(schedule) => schedule.select_date(date, today),
            None => Selection::Ignored(IgnoredReason::NotScheduling),
        }
    }

    /// Elige la franja para el día activo; una franja ocupada es un no-op.
    pub fn select_slot(&self, session: &mut WizardSession, slot: TimeSlot) -> Selection {
        let Some(service_id) = self.scheduling(session).map(str::to_owned) else {
            return Selection::Ignored(IgnoredReason::NotScheduling);
        };
        let availability = ServiceAvailability::new(&self.store, &service_id);
        match session.form_mut().schedule_mut() {
            Some(schedule) => schedule.select_slot(slot, &availability),
            None => Selection::Ignored(IgnoredReason::NotScheduling),
        }
    }

    /// Grilla del mes visible. `None` en el flujo de adopción.
    pub fn calendar(&self, session: &WizardSession) -> Option<CalendarGrid> {
        let schedule = session.schedule()?;
        let availability = ServiceAvailability::new(&self.store, &session.target().id);
        Some(build_grid(session.calendar_cursor(), self.clock.today(), schedule, &availability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormField;
    use crate::wizard::{FixedClock, InMemorySubmissionSink};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn engine() -> WizardEngine<InMemoryAvailabilityStore, InMemorySubmissionSink, FixedClock> {
        WizardEngine::new_with(Catalog::with_default_services(),
                               InMemoryAvailabilityStore::new(),
                               InMemorySubmissionSink::default(),
                               FixedClock::new(day(1)))
    }

    #[test]
    fn unknown_target_is_not_found() {
        let e = engine();
        assert_eq!(e.start("nope").unwrap_err(), CoreWizardError::ItemNotFound("nope".into()));
        assert!(e.start_flow(FlowKind::Adoption, "service_01").is_err());
    }

    #[test]
    fn selections_outside_schedule_are_ignored() {
        let e = engine();
        let mut s = e.start("service_01").unwrap();
        assert_eq!(e.select_date(&mut s, day(10)), Selection::Ignored(IgnoredReason::NotScheduling));
        assert_eq!(e.select_slot(&mut s, TimeSlot::Morning),
                   Selection::Ignored(IgnoredReason::NotScheduling));
        assert!(s.schedule().unwrap().date().is_none());
    }

    #[test]
    fn back_at_first_step_is_blocked() {
        let e = engine();
        let s = e.start("service_01").unwrap();
        let t = e.back(s);
        assert_eq!(t.blocked(), Some(&Blocked::AtFirstStep));
        assert_eq!(t.session().current_step(), 0);
    }

    #[test]
    fn incomplete_step_keeps_session_in_place() {
        let mut e = engine();
        let mut s = e.start("service_01").unwrap();
        s.set_field(FormField::Name, "Ana").unwrap();
        assert!(!e.can_advance(&s));
        let t = e.next(s);
        match t.blocked() {
            Some(Blocked::Incomplete(issues)) => assert_eq!(issues.len(), 2),
            other => panic!("unexpected: {other:?}"),
        }
        assert_eq!(t.session().form().contact().name, "Ana");
    }

    #[test]
    fn adoption_has_no_calendar() {
        let pet = pet_domain::Pet::new("pet_01", "Luna", pet_domain::Species::Dog, "Beagle", 3, "Curious", Vec::new()).unwrap();
        let catalog = Catalog::new(vec![pet.clone()], Vec::new()).unwrap();
        let e = WizardEngine::in_memory(catalog);
        let s = e.start(&pet.id).unwrap();
        assert_eq!(s.flow(), FlowKind::Adoption);
        assert!(e.calendar(&s).is_none());
    }
}
