mod persistence;
mod snapshot;

pub use persistence::{load_catalog, save_catalog};
pub use snapshot::FoodCatalog;
