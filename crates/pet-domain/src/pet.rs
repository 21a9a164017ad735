use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::images::pet_image_urls;
use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Dog,
    Cat,
    Bird,
    Other,
}

impl FromStr for Species {
    type Err = DomainError;

    /// Acepta cualquier capitalización; especies desconocidas caen en `Other`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::Validation("especie vacía".into()));
        }
        Ok(match s.to_ascii_lowercase().as_str() {
            "dog" => Species::Dog,
            "cat" => Species::Cat,
            "bird" => Species::Bird,
            _ => Species::Other,
        })
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
            Species::Bird => "Bird",
            Species::Other => "Other",
        };
        f.write_str(s)
    }
}

/// Mascota adoptable del catálogo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub species: Species,
    pub breed: String,
    pub age: u32,
    pub description: String,
    pub quick_facts: Vec<String>,
    pub image_urls: Vec<String>,
}

impl Pet {
    /// Construye una mascota validando `id`/`name` y derivando sus imágenes.
    pub fn new(id: impl Into<String>,
               name: impl Into<String>,
               species: Species,
               breed: impl Into<String>,
               age: u32,
               description: impl Into<String>,
               quick_facts: Vec<String>)
               -> Result<Self, DomainError> {
        let id = id.into();
        let name = name.into();
        if id.trim().is_empty() {
            return Err(DomainError::Validation("una mascota necesita id".into()));
        }
        if name.trim().is_empty() {
            return Err(DomainError::Validation(format!("la mascota {id} no tiene nombre")));
        }
        let image_urls = pet_image_urls(&id, species);
        Ok(Self { id,
                  name,
                  species,
                  breed: breed.into(),
                  age,
                  description: description.into(),
                  quick_facts,
                  image_urls })
    }
}
