//! Configuración de la aplicación desde variables de entorno (.env opcional).
//!
//! - `PETFLOW_TODAY`: fija "hoy" (YYYY-MM-DD); por defecto el día local.
//! - `PETFLOW_STRICT_VALIDATION`: `true`/`false` (o `1`/`0`), política estricta.
//! - `PETFLOW_SEED_SERVICE`: servicio que arranca con una reserva sembrada.
//! - `PETFLOW_SEED_OFFSET_DAYS`: días desde hoy de esa reserva.
use chrono::{Local, NaiveDate};
use dotenvy::dotenv;
use once_cell::sync::Lazy;
use pet_core::ValidationPolicy;
use std::env;

use crate::errors::CoreError;

pub const DEFAULT_SEED_SERVICE: &str = "service_01";
pub const DEFAULT_SEED_OFFSET_DAYS: u64 = 5;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub today: Option<NaiveDate>,
    pub strict_validation: bool,
    pub seed_service: String,
    pub seed_offset_days: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { today: None,
               strict_validation: false,
               seed_service: DEFAULT_SEED_SERVICE.to_string(),
               seed_offset_days: DEFAULT_SEED_OFFSET_DAYS }
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, CoreError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(CoreError::Config(format!("{key}: se esperaba booleano, llegó '{other}'"))),
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, CoreError> {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
        where F: Fn(&str) -> Option<String>
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup("PETFLOW_TODAY") {
            let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|e| CoreError::Config(format!("PETFLOW_TODAY '{raw}': {e}")))?;
            cfg.today = Some(date);
        }
        if let Some(raw) = lookup("PETFLOW_STRICT_VALIDATION") {
            cfg.strict_validation = parse_bool("PETFLOW_STRICT_VALIDATION", &raw)?;
        }
        if let Some(raw) = lookup("PETFLOW_SEED_SERVICE") {
            let raw = raw.trim();
            if raw.is_empty() {
                return Err(CoreError::Config("PETFLOW_SEED_SERVICE vacío".into()));
            }
            cfg.seed_service = raw.to_string();
        }
        if let Some(raw) = lookup("PETFLOW_SEED_OFFSET_DAYS") {
            cfg.seed_offset_days = raw.trim()
                                      .parse()
                                      .map_err(|_| CoreError::Config(format!("PETFLOW_SEED_OFFSET_DAYS '{raw}' no es un entero")))?;
        }
        Ok(cfg)
    }

    /// Día efectivo: `PETFLOW_TODAY` o el día local.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn policy(&self) -> ValidationPolicy {
        if self.strict_validation {
            ValidationPolicy::Strict
        } else {
            ValidationPolicy::Presence
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.policy(), ValidationPolicy::Presence);
    }

    #[test]
    fn reads_all_variables() {
        let cfg = AppConfig::from_lookup(lookup(&[("PETFLOW_TODAY", "2024-06-01"),
                                                  ("PETFLOW_STRICT_VALIDATION", "1"),
                                                  ("PETFLOW_SEED_SERVICE", "service_03"),
                                                  ("PETFLOW_SEED_OFFSET_DAYS", "9")])).unwrap();
        assert_eq!(cfg.today(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(cfg.policy(), ValidationPolicy::Strict);
        assert_eq!(cfg.seed_service, "service_03");
        assert_eq!(cfg.seed_offset_days, 9);
    }

    #[test]
    fn malformed_values_are_config_errors() {
        for vars in [[("PETFLOW_TODAY", "06/01/2024")],
                     [("PETFLOW_STRICT_VALIDATION", "maybe")],
                     [("PETFLOW_SEED_OFFSET_DAYS", "-1")]] {
            let err = AppConfig::from_lookup(lookup(&vars)).unwrap_err();
            assert!(matches!(err, CoreError::Config(_)), "{err}");
        }
    }
}
