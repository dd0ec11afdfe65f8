//! [`Resource`](crate::resource::Resource) implementations, one per stored entity.

mod lookup;
mod product;
mod stock;

pub use lookup::{ProductTypes, Sites, Units};
pub use product::Products;
pub use stock::Stocks;
