//! # Catalog Commands
//!
//! Category buttons and the search box both narrow the same card list.
//! The two conditions combine: a card shows only if it is in the selected
//! category AND its title contains the query.

use sweetshop_core::{CatalogView, CategoryFilter};
use tracing::debug;

use crate::error::ApiError;
use crate::state::CatalogState;

/// Lists the cards matching `filter` and `query`.
///
/// ## Errors
/// `VALIDATION_ERROR` if the query is longer than 100 characters.
pub fn search_catalog(
    catalog: &CatalogState,
    filter: &CategoryFilter,
    query: &str,
) -> Result<CatalogView, ApiError> {
    debug!(?filter, query, "search_catalog command");

    let view = catalog.catalog().filter(filter, query)?;
    debug!(visible = view.visible.len(), "Catalog filtered");
    Ok(view)
}

/// Lists the category buttons, `all` first.
pub fn list_categories(catalog: &CatalogState) -> Vec<String> {
    std::iter::once("all".to_string())
        .chain(catalog.catalog().categories().into_iter().map(String::from))
        .collect()
}
