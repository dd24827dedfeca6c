//! Каталог кровельных материалов: данные и навигация.

pub mod aggregate;
pub mod data;
pub mod navigator;

pub use aggregate::{Catalog, CompetitorPrice, Material, Product, RoofingType};
pub use navigator::CatalogView;
