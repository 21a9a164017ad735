//! PetFlow
//!
//! Librería de la aplicación:
//! - `errors`: errores de aplicación (`CoreError`).
//! - `config`: configuración desde variables de entorno.
//! - `app`: armado de catálogo + motor y sesiones de demostración.
//!
//! El binario `petflow` la usa desde `main.rs`.

pub mod app;
pub mod config;
pub mod errors;

pub use app::{build_engine, AppEngine, DemoReport};
pub use config::AppConfig;
pub use errors::CoreError;
