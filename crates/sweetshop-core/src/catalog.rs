//! # Catalog
//!
//! The static list of product cards, with the category filter and the
//! title search used by the storefront.
//!
//! ## Visibility Rule
//! ```text
//! visible(card) = (filter == All || card.category == filter)
//!              && lowercase(card.title).contains(lowercase(trim(query)))
//! ```
//!
//! The catalog never touches the cart. It only hands out [`ProductRef`]s,
//! whose `index` is the card's position in this list.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::ProductRef;
use crate::validation::{
    validate_product_title, validate_search_query, validate_unit_price, ValidationResult,
};

/// One product card as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogCard {
    pub title: String,
    pub category: String,
    pub price: f64,
    pub image_ref: String,
}

/// Active category button.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// `"all"` (any case) or a blank label selects everything; anything else
/// is taken as a category name.
impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(s.to_string()))
        }
    }
}

/// A card that passed the current filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VisibleCard {
    pub index: usize,
    pub title: String,
    pub category: String,
    pub formatted_price: String,
    pub image_ref: String,
}

/// Result of filtering the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogView {
    pub visible: Vec<VisibleCard>,
    /// True when nothing matched, so the page shows its "no results" text.
    pub no_results: bool,
}

/// Ordered, validated list of product cards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    cards: Vec<CatalogCard>,
}

impl Catalog {
    /// Builds a catalog, rejecting cards with blank titles or bad prices.
    pub fn new(cards: Vec<CatalogCard>) -> ValidationResult<Self> {
        for card in &cards {
            validate_product_title(&card.title)?;
            validate_unit_price(card.price)?;
        }

        Ok(Catalog { cards })
    }

    /// Parses a JSON array of cards.
    ///
    /// ## Example
    /// ```rust
    /// use sweetshop_core::catalog::Catalog;
    ///
    /// let catalog = Catalog::from_json(
    ///     r#"[{"title": "Ladoo", "category": "dry", "price": 10.0, "imageRef": "img/ladoo.png"}]"#,
    /// ).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn from_json(json: &str) -> ValidationResult<Self> {
        let cards: Vec<CatalogCard> =
            serde_json::from_str(json).map_err(|e| ValidationError::InvalidFormat {
                field: "catalog".to_string(),
                reason: e.to_string(),
            })?;
        Self::new(cards)
    }

    pub fn cards(&self) -> &[CatalogCard] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&CatalogCard> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for card in &self.cards {
            if !seen.contains(&card.category.as_str()) {
                seen.push(&card.category);
            }
        }
        seen
    }

    /// What an "add to cart" click on card `index` hands to the cart.
    pub fn product_ref(&self, index: usize) -> Option<ProductRef> {
        self.cards
            .get(index)
            .map(|card| ProductRef::new(&card.title, card.price, &card.image_ref, index))
    }

    /// Applies the category filter and the search query.
    ///
    /// ## Errors
    /// `TooLong` if the query exceeds 100 characters.
    pub fn filter(&self, category: &CategoryFilter, query: &str) -> ValidationResult<CatalogView> {
        let query = validate_search_query(query)?;

        let visible: Vec<VisibleCard> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| {
                category.matches(&card.category) && card.title.to_lowercase().contains(&query)
            })
            .map(|(index, card)| VisibleCard {
                index,
                title: card.title.clone(),
                category: card.category.clone(),
                // Prices were validated in `new`
                formatted_price: Money::try_new(card.price)
                    .map(|m| m.formatted())
                    .unwrap_or_default(),
                image_ref: card.image_ref.clone(),
            })
            .collect();

        Ok(CatalogView {
            no_results: visible.is_empty(),
            visible,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, category: &str, price: f64) -> CatalogCard {
        CatalogCard {
            title: title.to_string(),
            category: category.to_string(),
            price,
            image_ref: format!("img/{}.png", title.to_lowercase()),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            card("Ladoo", "dry", 10.0),
            card("Rasgulla", "syrup", 6.0),
            card("Motichoor Ladoo", "dry", 12.0),
            card("Gulab Jamun", "syrup", 8.0),
        ])
        .unwrap()
    }

    fn titles(view: &CatalogView) -> Vec<&str> {
        view.visible.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn test_filter_all_with_empty_query_shows_everything() {
        let view = catalog().filter(&CategoryFilter::All, "").unwrap();
        assert_eq!(view.visible.len(), 4);
        assert!(!view.no_results);
    }

    #[test]
    fn test_filter_by_category_and_search() {
        let catalog = catalog();

        let view = catalog
            .filter(&CategoryFilter::Only("dry".into()), "")
            .unwrap();
        assert_eq!(titles(&view), vec!["Ladoo", "Motichoor Ladoo"]);

        let view = catalog.filter(&CategoryFilter::All, "  LADOO ").unwrap();
        assert_eq!(titles(&view), vec!["Ladoo", "Motichoor Ladoo"]);
        assert_eq!(view.visible[1].index, 2);
        assert_eq!(view.visible[1].formatted_price, "$12.00");

        let view = catalog
            .filter(&CategoryFilter::Only("syrup".into()), "ladoo")
            .unwrap();
        assert!(view.visible.is_empty());
        assert!(view.no_results);
    }

    #[test]
    fn test_filter_rejects_long_query() {
        assert!(catalog()
            .filter(&CategoryFilter::All, &"x".repeat(101))
            .is_err());
    }

    #[test]
    fn test_category_filter_parsing() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(" ALL ".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "syrup".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only("syrup".into())
        );
    }

    #[test]
    fn test_product_ref_uses_catalog_position() {
        let product = catalog().product_ref(3).unwrap();
        assert_eq!(product.title, "Gulab Jamun");
        assert_eq!(product.index, 3);
        assert_eq!(product.product_id().as_str(), "Gulab Jamun-3");
        assert!(catalog().product_ref(4).is_none());
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        assert_eq!(catalog().categories(), vec!["dry", "syrup"]);
    }

    #[test]
    fn test_new_rejects_bad_cards() {
        assert!(Catalog::new(vec![card("", "dry", 1.0)]).is_err());
        assert!(Catalog::new(vec![card("Peda", "dry", -2.0)]).is_err());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"title": "Kaju Katli", "category": "dry", "price": 14.5, "imageRef": "img/kaju.png"},
            {"title": "Jalebi", "category": "fried", "price": 4.0, "imageRef": "img/jalebi.png"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().title, "Jalebi");

        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }
}
