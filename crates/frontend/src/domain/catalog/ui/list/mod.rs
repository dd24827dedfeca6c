mod materials;
mod products;
mod types;

pub use materials::MaterialList;
pub use products::ProductList;
pub use types::RoofingTypeList;
