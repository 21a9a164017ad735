use pet_core::CoreWizardError;
use thiserror::Error;

/// Errores de la aplicación `petflow`: configuración, salida y errores del
/// asistente.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error interno: {0}")]
    Internal(String),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error del asistente: {0}")]
    Wizard(#[from] CoreWizardError),
    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Uso: {0}")]
    Usage(String),
}
