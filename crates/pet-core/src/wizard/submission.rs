use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreWizardError;
use crate::form::AdoptionForm;

/// Solicitud de adopción entregada al colaborador externo al confirmar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionApplication {
    pub id: Uuid,
    pub pet_id: String,
    pub pet_name: String,
    pub form: AdoptionForm,
    pub submitted_at: DateTime<Utc>,
}

/// Destino de las solicitudes de adopción. No hay persistencia local: la
/// solicitud sale del asistente por aquí.
pub trait SubmissionSink {
    fn submit(&mut self, application: AdoptionApplication) -> Result<(), CoreWizardError>;
}

/// Registra la solicitud en el log y la descarta.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardingSink;

impl SubmissionSink for DiscardingSink {
    fn submit(&mut self, application: AdoptionApplication) -> Result<(), CoreWizardError> {
        info!("[submission] adoption application {} for pet '{}' handed off (discarded)",
              application.id,
              application.pet_id);
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemorySubmissionSink {
    pub inner: Vec<AdoptionApplication>,
}

impl SubmissionSink for InMemorySubmissionSink {
    fn submit(&mut self, application: AdoptionApplication) -> Result<(), CoreWizardError> {
        self.inner.push(application);
        Ok(())
    }
}
