//! Arma el catálogo y el motor del asistente a partir de la configuración, y
//! ejecuta sesiones de demostración guionadas.

use chrono::{DateTime, Days, NaiveDate, Utc};
use log::{info, warn};
use pet_core::{Blocked, CalendarGrid, ConfirmationNotice, DiscardingSink, FixedClock, FlowKind, FormField,
               InMemoryAvailabilityStore, ReviewSnapshot, Selection, StepKind, Transition, WizardEngine, WizardSession,
               YearMonth};
use pet_domain::{load_catalog, Booking, Catalog, PetDataSource, TimeSlot};
use serde::Serialize;

use crate::config::AppConfig;
use crate::errors::CoreError;

pub type AppEngine = WizardEngine<InMemoryAvailabilityStore, DiscardingSink, FixedClock>;

/// Carga el catálogo. Una fuente que falla deja el catálogo sólo con los
/// servicios y se registra como advertencia.
pub async fn load(source: &dyn PetDataSource) -> Catalog {
    let loaded = load_catalog(source).await;
    if let Some(err) = &loaded.error {
        warn!("[app] catálogo sin mascotas: {err}");
    }
    loaded.catalog
}

/// Motor con la reserva sembrada (`seed_service`, hoy + `seed_offset_days`,
/// mañana) y la política de validación configurada.
pub fn build_engine(config: &AppConfig, catalog: Catalog) -> AppEngine {
    let today = config.today();
    let store = InMemoryAvailabilityStore::seeded_with_conflict(today, config.seed_offset_days, &config.seed_service);
    info!("[app] today={today} seeded_bookings={} policy={:?}", store.len(), config.policy());
    WizardEngine::new_with(catalog, store, DiscardingSink, FixedClock::new(today)).with_policy(config.policy())
}

/// Resultado de una sesión de demostración.
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub flow: FlowKind,
    pub title: &'static str,
    pub started_at: DateTime<Utc>,
    pub target: String,
    /// Un renglón por acción: transiciones y selecciones de calendario.
    pub log: Vec<String>,
    pub review: ReviewSnapshot,
    pub confirmation: Option<ConfirmationNotice>,
    pub bookings: Vec<Booking>,
}

struct Script<'e> {
    engine: &'e mut AppEngine,
    log: Vec<String>,
}

impl Script<'_> {
    fn next(&mut self, session: WizardSession) -> WizardSession {
        let from = session.step();
        match self.engine.next(session) {
            Transition::Moved(s) => {
                self.log.push(format!("next: {from} -> {} ({})", s.step(), s.step_label()));
                s
            }
            Transition::Blocked(s, reason) => {
                self.log.push(format!("next blocked at {from}: {}", describe(&reason)));
                s
            }
        }
    }

    fn fill(&mut self, session: &mut WizardSession, values: &[(FormField, &str)]) -> Result<(), CoreError> {
        for (field, value) in values {
            session.set_field(*field, *value)?;
        }
        self.log.push(format!("filled {} field(s) at {}", values.len(), session.step()));
        Ok(())
    }

    fn pick(&mut self, session: &mut WizardSession, date: NaiveDate, slots: &[TimeSlot]) {
        let outcome = self.engine.select_date(session, date);
        self.log.push(format!("select date {date}: {outcome:?}"));
        for slot in slots {
            let outcome = self.engine.select_slot(session, *slot);
            self.log.push(format!("select slot {slot}: {outcome:?}"));
            if outcome == Selection::Applied {
                break;
            }
        }
    }

    fn finish(self, session: &WizardSession) -> DemoReport {
        DemoReport { flow: session.flow(),
                     title: session.flow().title(),
                     started_at: session.started_at(),
                     target: session.target().name.clone(),
                     log: self.log,
                     review: session.review(),
                     confirmation: session.confirmation(),
                     bookings: self.engine.store().inner.clone() }
    }
}

fn describe(reason: &Blocked) -> String {
    match reason {
        Blocked::Incomplete(issues) => issues.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "),
        Blocked::AtFirstStep => "already at the first step".into(),
        Blocked::Terminal => "session is complete".into(),
        Blocked::SlotTaken(b) => format!("slot taken: {b}"),
        Blocked::SubmissionRejected(msg) => format!("submission rejected: {msg}"),
    }
}

const CONTACT: [(FormField, &str); 3] = [(FormField::Name, "Ana Torres"),
                                         (FormField::Email, "ana.torres@example.com"),
                                         (FormField::Phone, "(555) 123-4567")];

/// Reserva del servicio sembrado el día del conflicto: la mañana está
/// ocupada, así que la demo termina reservando la tarde.
pub fn run_service_demo(engine: &mut AppEngine, service_id: &str, offset_days: u64) -> Result<DemoReport, CoreError> {
    let mut session = engine.start_flow(FlowKind::Service, service_id)?;
    let date = engine.today()
                     .checked_add_days(Days::new(offset_days))
                     .ok_or_else(|| CoreError::Internal(format!("fecha fuera de rango: hoy + {offset_days}")))?;
    let mut script = Script { engine, log: Vec::new() };

    session = script.next(session);
    script.fill(&mut session, &CONTACT)?;
    session = script.next(session);
    script.pick(&mut session, date, &TimeSlot::ALL);
    session = script.next(session);
    script.fill(&mut session,
                &[(FormField::PetName, "Rex"),
                  (FormField::PetBreed, "Beagle"),
                  (FormField::SpecialNotes, "Nervous around dryers")])?;
    session = script.next(session);
    session = script.next(session);
    if session.step() != StepKind::Confirmation {
        return Err(CoreError::Internal(format!("la demo de servicio quedó en {}", session.step())));
    }
    Ok(script.finish(&session))
}

/// Solicitud de adopción de la primera mascota del catálogo.
pub fn run_adoption_demo(engine: &mut AppEngine) -> Result<DemoReport, CoreError> {
    let pet_id = engine.catalog()
                       .pets()
                       .first()
                       .map(|p| p.id.clone())
                       .ok_or_else(|| CoreError::Internal("catálogo sin mascotas".into()))?;
    let mut session = engine.start_flow(FlowKind::Adoption, &pet_id)?;
    let mut script = Script { engine, log: Vec::new() };

    script.fill(&mut session, &CONTACT)?;
    session = script.next(session);
    script.fill(&mut session, &[(FormField::AdoptionReason, "Looking for a companion for long walks")])?;
    session = script.next(session);
    script.fill(&mut session, &[(FormField::HomeEnvironment, "House with a fenced yard, no other pets")])?;
    session = script.next(session);
    session = script.next(session);
    if session.step() != StepKind::Confirmation {
        return Err(CoreError::Internal(format!("la demo de adopción quedó en {}", session.step())));
    }
    Ok(script.finish(&session))
}

/// Grilla de un mes para un servicio, sin selección activa.
pub fn month_grid(engine: &AppEngine, service_id: &str, month: YearMonth) -> Result<CalendarGrid, CoreError> {
    let mut session = engine.start_flow(FlowKind::Service, service_id)?;
    session.show_month(month);
    engine.calendar(&session)
          .ok_or_else(|| CoreError::Internal(format!("{service_id} no tiene calendario")))
}

/// Parsea `YYYY-MM` (mes 1..=12).
pub fn parse_year_month(raw: &str) -> Result<YearMonth, CoreError> {
    let usage = || CoreError::Usage(format!("mes inválido '{raw}', se espera YYYY-MM"));
    let (year, month) = raw.trim().split_once('-').ok_or_else(usage)?;
    let year: i32 = year.parse().map_err(|_| usage())?;
    let month: u32 = month.parse().map_err(|_| usage())?;
    if month == 0 {
        return Err(usage());
    }
    Ok(YearMonth::new(year, month - 1)?)
}
