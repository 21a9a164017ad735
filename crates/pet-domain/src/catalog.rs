//! Catálogo en memoria: mascotas (fuente externa) + servicios (lista fija).
use serde::Serialize;

use crate::service::default_services;
use crate::{DomainError, Pet, Service};

/// Referencia a un elemento del catálogo resuelto por id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogItem<'a> {
    Pet(&'a Pet),
    Service(&'a Service),
}

impl CatalogItem<'_> {
    pub fn id(&self) -> &str {
        match self {
            CatalogItem::Pet(p) => &p.id,
            CatalogItem::Service(s) => &s.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CatalogItem::Pet(p) => &p.name,
            CatalogItem::Service(s) => &s.name,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    pets: Vec<Pet>,
    services: Vec<Service>,
}

impl Catalog {
    /// Construye el catálogo rechazando ids duplicados.
    pub fn new(pets: Vec<Pet>, services: Vec<Service>) -> Result<Self, DomainError> {
        let mut seen = std::collections::HashSet::new();
        for id in pets.iter().map(|p| p.id.as_str()).chain(services.iter().map(|s| s.id.as_str())) {
            if !seen.insert(id) {
                return Err(DomainError::Validation(format!("id duplicado en catálogo: {id}")));
            }
        }
        Ok(Self { pets, services })
    }

    /// Catálogo sólo con los servicios base (sin mascotas).
    pub fn with_default_services() -> Self {
        Self { pets: Vec::new(),
               services: default_services() }
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn find_pet(&self, id: &str) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == id)
    }

    pub fn find_service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn find(&self, id: &str) -> Option<CatalogItem<'_>> {
        self.find_pet(id)
            .map(CatalogItem::Pet)
            .or_else(|| self.find_service(id).map(CatalogItem::Service))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Species;

    #[test]
    fn find_resolves_pets_and_services() {
        let pet = Pet::new("pet_01", "Buddy", Species::Dog, "Golden Retriever", 3, "", vec![]).unwrap();
        let catalog = Catalog::new(vec![pet], default_services()).unwrap();
        assert!(matches!(catalog.find("pet_01"), Some(CatalogItem::Pet(_))));
        assert_eq!(catalog.find("service_02").map(|i| i.name().to_string()).as_deref(),
                   Some("Annual Health Checkup"));
        assert!(catalog.find("nope").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let a = Pet::new("x", "A", Species::Cat, "", 1, "", vec![]).unwrap();
        let b = Pet::new("x", "B", Species::Cat, "", 1, "", vec![]).unwrap();
        assert!(Catalog::new(vec![a, b], vec![]).is_err());
    }
}
