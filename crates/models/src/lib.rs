pub mod errors;
pub mod db;
pub mod audit;
pub mod validation;
pub mod payload;
pub mod product_type;
pub mod site;
pub mod unit;
pub mod product;
pub mod stock;

#[cfg(test)]
mod tests;
