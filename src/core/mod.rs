// Core exports
pub mod catalog;

pub use catalog::Catalog;
