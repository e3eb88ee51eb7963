//! Records exchanged over the HTTP API and handed to the storage layer.
//!
//! Every record type implements [`Record`], which is all the generic CRUD dispatcher
//! needs to know about it: a fresh value can be built with `Default`, it moves through
//! serde, and it carries a string identity that can be read and overwritten.

pub mod api;
pub mod plant;
pub mod plant_cultivar;
pub mod plant_species;

use serde::{de::DeserializeOwned, Serialize};

/// A record with a string identity.
///
/// The identity is empty until storage assigns one on create. Record types derive
/// `#[serde(default)]` so a request body missing fields decodes onto the
/// `Default` value.
pub trait Record: Default + Serialize + DeserializeOwned + Send + Sync + 'static {
    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);
}
