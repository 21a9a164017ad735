use thiserror::Error;

/// Errores del dominio del catálogo (mascotas, servicios, carrito).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validación fallida: {0}")]
    Validation(String),
    #[error("Fuente de datos externa: {0}")]
    Source(String),
    #[error("Error de serialización: {0}")]
    Serialization(String),
}

// Conversión desde serde_json::Error (payloads de la fuente externa)
impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_variant_format() {
        let err = DomainError::Validation("precio negativo".into());
        assert_eq!(err.to_string(), "Validación fallida: precio negativo");
    }

    #[test]
    fn test_serde_error_converts() {
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DomainError = bad.into();
        assert!(matches!(err, DomainError::Serialization(_)));
    }
}
