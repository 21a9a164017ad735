//! Fuente externa de mascotas.
//!
//! El listado de mascotas lo produce un colaborador externo (un generador de
//! datos remoto en producción). Aquí sólo se define el contrato y dos
//! implementaciones locales: un conjunto fijo de ejemplo y un payload JSON.
//! La carga se hace una única vez al iniciar la aplicación; si falla, el
//! catálogo queda sin mascotas y el error se reporta como mensaje.
use async_trait::async_trait;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::service::default_services;
use crate::{Catalog, DomainError, Pet, Species};

/// Registro de mascota tal como lo entrega la fuente (sin imágenes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetRecord {
    pub id: String,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: u32,
    pub description: String,
    #[serde(default)]
    pub quick_facts: Vec<String>,
}

impl PetRecord {
    pub fn into_pet(self) -> Result<Pet, DomainError> {
        let species: Species = self.species.parse()?;
        Pet::new(self.id, self.name, species, self.breed, self.age, self.description, self.quick_facts)
    }
}

#[async_trait]
pub trait PetDataSource: Send + Sync {
    /// Nombre del proveedor para logs.
    fn name(&self) -> &str;
    async fn fetch_pets(&self) -> Result<Vec<PetRecord>, DomainError>;
}

/// Doce mascotas de ejemplo embebidas.
#[derive(Debug, Default, Clone)]
pub struct StaticPetSource;

fn record(id: &str, name: &str, species: &str, breed: &str, age: u32, description: &str, facts: [&str; 4]) -> PetRecord {
    PetRecord { id: id.into(),
                name: name.into(),
                species: species.into(),
                breed: breed.into(),
                age,
                description: description.into(),
                quick_facts: facts.iter().map(|f| f.to_string()).collect() }
}

#[async_trait]
impl PetDataSource for StaticPetSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_pets(&self) -> Result<Vec<PetRecord>, DomainError> {
        Ok(vec![
            record("pet_01", "Buddy", "Dog", "Golden Retriever", 3,
                   "Buddy is a friendly and energetic golden retriever who loves to play fetch and go on long walks.",
                   ["Loves water and swimming", "House trained", "Knows basic commands", "Great with children"]),
            record("pet_02", "Whiskers", "Cat", "Siamese", 2,
                   "Whiskers is an elegant Siamese cat with piercing blue eyes.",
                   ["Very talkative", "Enjoys lap time", "Indoor cat", "Playful and curious"]),
            record("pet_03", "Max", "Dog", "German Shepherd", 5,
                   "Max is a loyal and intelligent German Shepherd.",
                   ["Highly trainable", "Protective instinct", "Needs daily exercise", "Great guard dog"]),
            record("pet_04", "Luna", "Cat", "Persian", 1,
                   "Luna is a beautiful Persian kitten with soft, fluffy fur.",
                   ["Requires regular grooming", "Very calm", "Loves soft beds", "Indoor only"]),
            record("pet_05", "Charlie", "Dog", "Beagle", 4,
                   "Charlie is a sweet beagle with a nose for adventure.",
                   ["Good with other dogs", "Loves treats", "Enjoys walks", "Calm temperament"]),
            record("pet_06", "Mittens", "Cat", "Tabby", 4,
                   "Mittens is a sweet tabby cat who loves cuddles and sunny windowsills.",
                   ["Independent", "Loves sun bathing", "Gentle nature", "Low maintenance"]),
            record("pet_07", "Rocky", "Dog", "Bulldog", 2,
                   "Rocky is a charming English Bulldog with a lovable wrinkly face.",
                   ["Low energy", "Apartment friendly", "Loves naps", "Great companion"]),
            record("pet_08", "Tweety", "Bird", "Canary", 1,
                   "Tweety is a cheerful canary with a beautiful singing voice.",
                   ["Beautiful singer", "Bright yellow color", "Easy to care for", "Social bird"]),
            record("pet_09", "Daisy", "Dog", "Poodle", 2,
                   "Daisy is an intelligent toy poodle with a hypoallergenic coat.",
                   ["Hypoallergenic", "Highly intelligent", "Loves tricks", "Great for allergies"]),
            record("pet_10", "Shadow", "Cat", "Black Cat", 5,
                   "Shadow is a mysterious black cat with golden eyes.",
                   ["Sleek black coat", "Very affectionate", "Calm demeanor", "Lucky charm"]),
            record("pet_11", "Coco", "Bird", "Cockatiel", 2,
                   "Coco is a friendly cockatiel who loves to whistle and interact with people.",
                   ["Loves whistling", "Very social", "Hand-tamed", "Playful character"]),
            record("pet_12", "Bella", "Cat", "Maine Coon", 3,
                   "Bella is a majestic Maine Coon with a playful personality.",
                   ["Large breed", "Playful nature", "Good with children", "Dog-like personality"]),
        ])
    }
}

/// Fuente que decodifica un payload JSON (array de registros), como el que
/// devuelve el generador remoto.
#[derive(Debug, Clone)]
pub struct JsonPetSource {
    payload: String,
}

impl JsonPetSource {
    pub fn new(payload: impl Into<String>) -> Self {
        Self { payload: payload.into() }
    }
}

#[async_trait]
impl PetDataSource for JsonPetSource {
    fn name(&self) -> &str {
        "json"
    }

    async fn fetch_pets(&self) -> Result<Vec<PetRecord>, DomainError> {
        Ok(serde_json::from_str(&self.payload)?)
    }
}

/// Resultado de la carga inicial del catálogo.
#[derive(Debug, Clone)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    /// Mensaje para el usuario si no se pudieron obtener mascotas.
    pub error: Option<String>,
}

/// Carga mascotas desde la fuente y arma el catálogo con los servicios fijos.
/// Nunca falla: los errores de la fuente dejan el catálogo sin mascotas.
pub async fn load_catalog(source: &dyn PetDataSource) -> CatalogLoad {
    let records = match source.fetch_pets().await {
        Ok(r) => r,
        Err(e) => {
            warn!("[catalog] source '{}' failed: {e}", source.name());
            Vec::new()
        }
    };

    let mut pets = Vec::with_capacity(records.len());
    for rec in records {
        let id = rec.id.clone();
        match rec.into_pet() {
            Ok(p) if pets.iter().all(|q: &Pet| q.id != p.id) => pets.push(p),
            Ok(_) => warn!("[catalog] duplicated pet id '{id}' skipped"),
            Err(e) => warn!("[catalog] pet '{id}' skipped: {e}"),
        }
    }

    let error = if pets.is_empty() {
        Some("Could not fetch pet data. Please check the pet data source configuration.".to_string())
    } else {
        None
    };

    let services = default_services();
    let catalog = match Catalog::new(pets, services) {
        Ok(c) => c,
        Err(e) => {
            warn!("[catalog] inconsistent catalog, keeping services only: {e}");
            Catalog::with_default_services()
        }
    };
    info!("[catalog] loaded pets={} services={} from '{}'",
          catalog.pets().len(),
          catalog.services().len(),
          source.name());
    CatalogLoad { catalog, error }
}
