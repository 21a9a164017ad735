//! Servicios ofrecidos (lista local fija).
use serde::{Deserialize, Serialize};

use crate::images::service_image_url;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Duración en minutos.
    pub duration_minutes: u32,
    pub activities: Vec<String>,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Service {
    pub fn new(id: &str, name: &str, description: &str, price: f64, duration_minutes: u32, activities: &[&str]) -> Self {
        Self { id: id.to_string(),
               name: name.to_string(),
               description: description.to_string(),
               price,
               duration_minutes,
               activities: activities.iter().map(|a| a.to_string()).collect(),
               image_url: service_image_url(id, name),
               notes: None }
    }
}

/// Los cinco servicios base del catálogo.
pub fn default_services() -> Vec<Service> {
    vec![Service::new("service_01",
                      "Full Grooming Package",
                      "A complete pampering session for your pet.",
                      1500.00,
                      120,
                      &["Warm bath", "Haircut", "Nail trim"]),
         Service::new("service_02",
                      "Annual Health Checkup",
                      "A comprehensive veterinary examination.",
                      2500.00,
                      45,
                      &["Physical exam", "Vaccinations", "Parasite check"]),
         Service::new("service_03",
                      "Basic Obedience Training",
                      "A 4-week group course for essential commands.",
                      8000.00,
                      60,
                      &["Sit, stay, come", "Leash manners", "Socialization"]),
         Service::new("service_04",
                      "Pet Sitting (Per Day)",
                      "Peace of mind while you're away.",
                      1000.00,
                      1440,
                      &["Two walks", "Playtime", "Feeding"]),
         Service::new("service_05",
                      "Dog Walking (30 min)",
                      "A refreshing 30-minute walk for your dog.",
                      500.00,
                      30,
                      &["30-min walk", "Water break", "Paw wipe-down"]),]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_services_have_unique_ids_and_images() {
        let services = default_services();
        assert_eq!(services.len(), 5);
        let mut ids: Vec<&str> = services.iter().map(|s| s.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
        assert!(services[0].image_url.contains("-grooming/"));
        assert!(services[4].image_url.contains("-walking/"));
    }
}
