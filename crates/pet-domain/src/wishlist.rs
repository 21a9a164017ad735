use serde::{Deserialize, Serialize};

use crate::{Pet, Service};

/// Elemento guardable: mascota o servicio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WishlistItem {
    Pet(Pet),
    Service(Service),
}

impl WishlistItem {
    pub fn id(&self) -> &str {
        match self {
            WishlistItem::Pet(p) => &p.id,
            WishlistItem::Service(s) => &s.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            WishlistItem::Pet(p) => &p.name,
            WishlistItem::Service(s) => &s.name,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wishlist {
    items: Vec<WishlistItem>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Añade el elemento si no estaba; lo quita si ya estaba. Devuelve true
    /// cuando el elemento queda en la lista.
    pub fn toggle(&mut self, item: WishlistItem) -> bool {
        if let Some(pos) = self.items.iter().position(|i| i.id() == item.id()) {
            self.items.remove(pos);
            false
        } else {
            self.items.push(item);
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id() == id)
    }

    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
