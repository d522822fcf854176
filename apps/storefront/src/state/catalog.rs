//! # Catalog State
//!
//! The static product catalog, loaded once at startup. Read-only after
//! that, so it is shared through an `Arc` without a lock.

use std::sync::Arc;
use sweetshop_core::{Catalog, CatalogCard};
use tracing::info;

use crate::error::AppError;
use crate::state::ConfigState;

/// Shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// Loads the catalog named in the config, or the built-in one.
    pub fn load(config: &ConfigState) -> Result<Self, AppError> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                let catalog = Catalog::from_json(&json)?;
                info!(?path, cards = catalog.len(), "Loaded catalog from file");
                catalog
            }
            None => default_catalog(),
        };

        Ok(Self::new(catalog))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(default_catalog())
    }
}

/// The storefront's built-in sweets.
pub fn default_catalog() -> Catalog {
    let card = |title: &str, category: &str, price: f64, image: &str| CatalogCard {
        title: title.to_string(),
        category: category.to_string(),
        price,
        image_ref: format!("images/{}.jpg", image),
    };

    Catalog::new(vec![
        card("Besan Ladoo", "dry", 10.0, "besan-ladoo"),
        card("Kaju Katli", "dry", 14.5, "kaju-katli"),
        card("Gulab Jamun", "syrup", 8.0, "gulab-jamun"),
        card("Rasgulla", "syrup", 7.5, "rasgulla"),
        card("Jalebi", "fried", 4.25, "jalebi"),
        card("Mysore Pak", "dry", 9.75, "mysore-pak"),
        card("Malpua", "fried", 6.0, "malpua"),
        card("Rasmalai", "milk", 11.0, "rasmalai"),
    ])
    .unwrap_or_default()
}
