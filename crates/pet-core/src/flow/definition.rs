use serde::{Deserialize, Serialize};
use std::fmt;

use super::step::{StepKind, StepProgress, StepState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    /// Solicitud de adopción de una mascota.
    Adoption,
    /// Reserva de un servicio con fecha y franja.
    Service,
}

impl FlowKind {
    pub fn definition(self) -> &'static FlowDefinition {
        match self {
            FlowKind::Adoption => &ADOPTION_FLOW,
            FlowKind::Service => &SERVICE_FLOW,
        }
    }

    /// Título de la página del asistente.
    pub fn title(self) -> &'static str {
        match self {
            FlowKind::Adoption => "Adoption Application",
            FlowKind::Service => "Book a Service",
        }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowKind::Adoption => f.write_str("adoption"),
            FlowKind::Service => f.write_str("service"),
        }
    }
}

/// Definición inmutable de un flujo: steps en orden y su etiqueta visible.
#[derive(Debug)]
pub struct FlowDefinition {
    pub kind: FlowKind,
    steps: &'static [(StepKind, &'static str)],
}

static ADOPTION_FLOW: FlowDefinition = FlowDefinition { kind: FlowKind::Adoption,
                                                        steps: &[(StepKind::PersonalInfo, "Personal Info"),
                                                                 (StepKind::Survey, "Adoption Survey"),
                                                                 (StepKind::Review, "Review Application"),
                                                                 (StepKind::Confirmation, "Confirmation")] };

static SERVICE_FLOW: FlowDefinition = FlowDefinition { kind: FlowKind::Service,
                                                       steps: &[(StepKind::PersonalInfo, "Personal Info"),
                                                                (StepKind::Schedule, "Schedule"),
                                                                (StepKind::Details, "Booking Details"),
                                                                (StepKind::Review, "Review & Confirm"),
                                                                (StepKind::Confirmation, "Confirmation")] };

impl FlowDefinition {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step(&self, index: usize) -> Option<StepKind> {
        self.steps.get(index).map(|(s, _)| *s)
    }

    pub fn label(&self, index: usize) -> Option<&'static str> {
        self.steps.get(index).map(|(_, l)| *l)
    }

    pub fn steps(&self) -> impl Iterator<Item = StepKind> + '_ {
        self.steps.iter().map(|(s, _)| *s)
    }

    /// Índice del step terminal (Confirmation), siempre el último.
    pub fn terminal_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Estado de cada step respecto del cursor actual.
    pub fn progress(&self, current: usize) -> Vec<StepProgress> {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, (step, label))| {
                let state = if index < current {
                    StepState::Completed
                } else if index == current {
                    StepState::Current
                } else {
                    StepState::Upcoming
                };
                StepProgress { index,
                               step: *step,
                               label: *label,
                               state }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_sequences_are_fixed_per_flow() {
        let adoption: Vec<StepKind> = FlowKind::Adoption.definition().steps().collect();
        assert_eq!(adoption,
                   vec![StepKind::PersonalInfo, StepKind::Survey, StepKind::Review, StepKind::Confirmation]);
        let service: Vec<StepKind> = FlowKind::Service.definition().steps().collect();
        assert_eq!(service,
                   vec![StepKind::PersonalInfo,
                        StepKind::Schedule,
                        StepKind::Details,
                        StepKind::Review,
                        StepKind::Confirmation]);
    }

    #[test]
    fn confirmation_is_last_and_preceded_by_review() {
        for kind in [FlowKind::Adoption, FlowKind::Service] {
            let def = kind.definition();
            let last = def.terminal_index();
            assert_eq!(def.step(last), Some(StepKind::Confirmation));
            assert_eq!(def.step(last - 1), Some(StepKind::Review));
            assert_eq!(def.steps().filter(|s| s.is_terminal()).count(), 1);
        }
    }

    #[test]
    fn progress_marks_completed_current_upcoming() {
        let p = FlowKind::Service.definition().progress(2);
        let states: Vec<StepState> = p.iter().map(|s| s.state).collect();
        assert_eq!(states,
                   vec![StepState::Completed,
                        StepState::Completed,
                        StepState::Current,
                        StepState::Upcoming,
                        StepState::Upcoming]);
        assert_eq!(p[2].label, "Booking Details");
    }
}
