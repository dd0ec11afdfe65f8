//! Service layer: the generic Entity Store and one CRUD service per resource.
//! - Rows, payloads and validation come from the `models` crate.
//! - Every operation returns a [`errors::ServiceError`] the HTTP layer maps to a status.

pub mod errors;
pub mod resource;
pub mod resources;
pub mod resource_service;
pub mod store;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use resource::Resource;
pub use resource_service::{Deleted, Fetched, ResourceService};
pub use store::EntityStore;
