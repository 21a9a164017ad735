//! Construcción de URLs de imágenes de relleno para mascotas y servicios.
//!
//! Las URLs se derivan de forma determinista del `id`: la semilla es la suma
//! de los códigos de carácter del identificador, así la misma mascota siempre
//! muestra las mismas imágenes.
use crate::pet::Species;

const PET_BASE_SIZE: u32 = 400;
const PET_IMAGE_COUNT: u32 = 4;

/// Semilla determinista a partir de un identificador.
pub fn seed_for(id: &str) -> u32 {
    id.chars().map(|c| c as u32).sum()
}

/// Cuatro URLs por mascota, dependientes de la especie.
pub fn pet_image_urls(id: &str, species: Species) -> Vec<String> {
    let seed = seed_for(id);
    (0..PET_IMAGE_COUNT).map(|i| {
                            let size = PET_BASE_SIZE + i * 10;
                            let current = seed + i;
                            match species {
                                Species::Dog => format!("https://placedog.net/{size}/{size}?random={current}"),
                                Species::Cat => format!("https://placekitten.com/{size}/{size}?image={}", current % 16),
                                Species::Bird => format!("https://picsum.photos/seed/{current}-bird/{size}"),
                                Species::Other => format!("https://picsum.photos/seed/{current}-pet/{size}"),
                            }
                        })
                        .collect()
}

/// URL de portada de un servicio según palabras clave del nombre.
pub fn service_image_url(id: &str, name: &str) -> String {
    let seed = seed_for(id);
    let name = name.to_lowercase();
    let topic = if name.contains("grooming") {
        "grooming"
    } else if name.contains("training") {
        "training"
    } else if name.contains("health") || name.contains("vet") {
        "vet"
    } else if name.contains("walking") {
        "walking"
    } else {
        "service"
    };
    format!("https://picsum.photos/seed/{seed}-{topic}/600/400")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_sum_of_char_codes() {
        // 'a' = 97, 'b' = 98
        assert_eq!(seed_for("ab"), 195);
        assert_eq!(seed_for(""), 0);
    }

    #[test]
    fn pet_urls_depend_on_species_and_grow_in_size() {
        let dogs = pet_image_urls("ab", Species::Dog);
        assert_eq!(dogs.len(), 4);
        assert_eq!(dogs[0], "https://placedog.net/400/400?random=195");
        assert_eq!(dogs[3], "https://placedog.net/430/430?random=198");

        let cats = pet_image_urls("ab", Species::Cat);
        assert_eq!(cats[0], "https://placekitten.com/400/400?image=3"); // 195 % 16

        let other = pet_image_urls("ab", Species::Other);
        assert_eq!(other[1], "https://picsum.photos/seed/196-pet/410");
    }

    #[test]
    fn service_url_picks_topic_from_name() {
        assert!(service_image_url("x", "Full Grooming Package").ends_with("-grooming/600/400"));
        assert!(service_image_url("x", "Annual Health Checkup").ends_with("-vet/600/400"));
        assert!(service_image_url("x", "Pet Sitting (Per Day)").ends_with("-service/600/400"));
    }
}
