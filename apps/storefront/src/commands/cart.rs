//! # Cart Commands
//!
//! One command per cart interaction.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐  add_to_cart   ┌───────────┐                             │
//! │  │  Empty   │───────────────►│ Populated │◄──┐ increase / decrease /   │
//! │  │          │◄───────────────│           │───┘ remove (items remain)   │
//! │  └──────────┘  clear_cart    └───────────┘                             │
//! │                checkout                                                 │
//! │                last item removed                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Decrease and remove tolerate ids that are no longer in the cart: a stale
//! row clicked twice is logged and answered with the current cart.

use serde::Serialize;
use sweetshop_core::{CartStore, CartSummary, CartView, CheckoutReceipt, CoreError, ProductId};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{CartState, CatalogState};

/// Cart response including the rendered view and full-precision totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub view: CartView,
    pub totals: CartSummary,
}

impl From<&CartStore> for CartResponse {
    fn from(store: &CartStore) -> Self {
        CartResponse {
            view: store.view(),
            totals: store.summary(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_store(|s| CartResponse::from(s))
}

/// Adds the catalog card at `index` to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases
/// - Product not in cart: added with its current catalog price, which is
///   then frozen for this line item
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    index: usize,
) -> Result<CartResponse, ApiError> {
    debug!(index, "add_to_cart command");

    let product = catalog
        .catalog()
        .product_ref(index)
        .ok_or_else(|| ApiError::not_found("Product", index))?;

    cart.with_store_mut(|s| {
        s.add_item(&product)?;
        Ok(CartResponse::from(&*s))
    })
}

/// Adds one unit to a line item.
pub fn increase_quantity(cart: &CartState, id: &str) -> Result<CartResponse, ApiError> {
    debug!(id, "increase_quantity command");
    let id = ProductId::from(id);

    cart.with_store_mut(|s| {
        s.increment(&id)?;
        Ok(CartResponse::from(&*s))
    })
}

/// Removes one unit from a line item; the last unit removes the row.
pub fn decrease_quantity(cart: &CartState, id: &str) -> Result<CartResponse, ApiError> {
    debug!(id, "decrease_quantity command");
    let id = ProductId::from(id);

    cart.with_store_mut(|s| tolerate_stale(s.decrement(&id), s))
}

/// Removes a line item entirely.
pub fn remove_from_cart(cart: &CartState, id: &str) -> Result<CartResponse, ApiError> {
    debug!(id, "remove_from_cart command");
    let id = ProductId::from(id);

    cart.with_store_mut(|s| tolerate_stale(s.remove_item(&id), s))
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_store_mut(|s| {
        s.clear();
        CartResponse::from(&*s)
    })
}

/// Checks out the cart.
///
/// ## Returns
/// The receipt on success; `EMPTY_CART` when there is nothing to check out.
pub fn checkout(cart: &CartState) -> Result<CheckoutReceipt, ApiError> {
    debug!("checkout command");

    let receipt = cart.with_store_mut(|s| s.checkout())?;
    info!(
        receipt_id = %receipt.id,
        items = receipt.item_count,
        total = %receipt.formatted_total,
        "Checkout completed"
    );
    Ok(receipt)
}

fn tolerate_stale(
    result: Result<CartSummary, CoreError>,
    store: &CartStore,
) -> Result<CartResponse, ApiError> {
    match result {
        Ok(_) => Ok(CartResponse::from(store)),
        Err(err) if err.is_benign() => {
            debug!(%err, "Ignoring stale cart row");
            Ok(CartResponse::from(store))
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn states() -> (CatalogState, CartState) {
        (CatalogState::default(), CartState::default())
    }

    #[test]
    fn test_get_cart_reads_shared_store() {
        let (catalog, cart) = states();
        assert!(get_cart(&cart).view.is_empty);

        add_to_cart(&catalog, &cart.clone(), 3).unwrap();
        let response = get_cart(&cart);
        assert_eq!(response.view.rows[0].title, "Rasgulla");
        assert_eq!(response.totals.item_count, 1);
    }

    #[test]
    fn test_add_to_cart_twice_aggregates() {
        let (catalog, cart) = states();

        add_to_cart(&catalog, &cart, 0).unwrap();
        let response = add_to_cart(&catalog, &cart, 0).unwrap();

        assert_eq!(response.view.rows.len(), 1);
        assert_eq!(response.view.rows[0].id.as_str(), "Besan Ladoo-0");
        assert_eq!(response.view.item_count, 2);
        assert_eq!(response.totals.total_price.amount(), 20.0);
        assert_eq!(response.view.formatted_total, "$20.00");
    }

    #[test]
    fn test_add_unknown_index_is_not_found() {
        let (catalog, cart) = states();

        let err = add_to_cart(&catalog, &cart, 99).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&cart).view.is_empty);
    }

    #[test]
    fn test_quantity_controls() {
        let (catalog, cart) = states();
        add_to_cart(&catalog, &cart, 4).unwrap();

        let response = increase_quantity(&cart, "Jalebi-4").unwrap();
        assert_eq!(response.view.rows[0].quantity, 2);

        decrease_quantity(&cart, "Jalebi-4").unwrap();
        let response = decrease_quantity(&cart, "Jalebi-4").unwrap();
        assert!(response.view.is_empty);
    }

    #[test]
    fn test_increase_unknown_item_is_an_error() {
        let (_, cart) = states();

        let err = increase_quantity(&cart, "Jalebi-4").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownItem);
    }

    #[test]
    fn test_stale_remove_and_decrease_are_noops() {
        let (catalog, cart) = states();
        add_to_cart(&catalog, &cart, 1).unwrap();

        remove_from_cart(&cart, "Kaju Katli-1").unwrap();
        let again = remove_from_cart(&cart, "Kaju Katli-1").unwrap();
        assert!(again.view.is_empty);

        let response = decrease_quantity(&cart, "Kaju Katli-1").unwrap();
        assert!(response.view.is_empty);
    }

    #[test]
    fn test_checkout_flow() {
        let (catalog, cart) = states();

        let err = checkout(&cart).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyCart);

        add_to_cart(&catalog, &cart, 2).unwrap();
        add_to_cart(&catalog, &cart, 3).unwrap();
        let receipt = checkout(&cart).unwrap();

        assert_eq!(receipt.item_count, 2);
        assert_eq!(receipt.formatted_total, "$15.50");
        assert!(get_cart(&cart).view.is_empty);
    }

    #[test]
    fn test_clear_cart() {
        let (catalog, cart) = states();
        add_to_cart(&catalog, &cart, 0).unwrap();

        let response = clear_cart(&cart);
        assert!(response.view.is_empty);
        assert_eq!(response.totals.item_count, 0);
    }
}
