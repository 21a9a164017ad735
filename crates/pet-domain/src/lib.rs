// pet-domain library entry point
pub mod booking;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod images;
pub mod pet;
pub mod service;
pub mod source;
pub mod wishlist;
pub use booking::{Booking, TimeSlot};
pub use cart::{Cart, CartItem, Product};
pub use catalog::{Catalog, CatalogItem};
pub use error::DomainError;
pub use pet::{Pet, Species};
pub use service::Service;
pub use source::{load_catalog, CatalogLoad, JsonPetSource, PetDataSource, PetRecord, StaticPetSource};
pub use wishlist::{Wishlist, WishlistItem};
