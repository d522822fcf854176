//! Property-based tests for the cart engine.
//!
//! Random sequences of cart operations are applied to a `CartStore`, and
//! the totals, quantity bounds and rendered view are checked after every
//! step.

use std::sync::{Arc, Mutex};

use proptest::prelude::*;

use sweetshop_core::{
    CartEventEmitter, CartStore, CartView, CheckoutOutcome, CoreError, ProductId, ProductRef,
};

/// Small fixed catalog so operations collide often.
const CATALOG: &[(&str, f64)] = &[
    ("Ladoo", 10.0),
    ("Jalebi", 4.5),
    ("Barfi", 7.25),
    ("Peda", 0.125),
    ("Kaju Katli", 14.99),
];

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    Increment(usize),
    Decrement(usize),
    Remove(usize),
    Clear,
    Checkout,
}

fn op() -> impl Strategy<Value = Op> {
    let idx = 0..CATALOG.len();
    prop_oneof![
        4 => idx.clone().prop_map(Op::Add),
        2 => idx.clone().prop_map(Op::Increment),
        2 => idx.clone().prop_map(Op::Decrement),
        1 => idx.prop_map(Op::Remove),
        1 => Just(Op::Clear),
        1 => Just(Op::Checkout),
    ]
}

fn product(index: usize) -> ProductRef {
    let (title, price) = CATALOG[index];
    ProductRef::new(title, price, format!("img/{}.png", index), index)
}

fn id(index: usize) -> ProductId {
    product(index).product_id()
}

#[derive(Default)]
struct LastView(Mutex<Option<CartView>>);

impl CartEventEmitter for LastView {
    fn emit_view(&self, view: &CartView) {
        *self.0.lock().unwrap() = Some(view.clone());
    }
    fn emit_notification(&self, _message: &str) {}
    fn emit_checkout(&self, _outcome: &CheckoutOutcome) {}
}

fn apply(store: &mut CartStore, op: &Op) -> Result<(), CoreError> {
    match *op {
        Op::Add(i) => store.add_item(&product(i)).map(|_| ()),
        Op::Increment(i) => store.increment(&id(i)).map(|_| ()),
        Op::Decrement(i) => store.decrement(&id(i)).map(|_| ()),
        Op::Remove(i) => store.remove_item(&id(i)).map(|_| ()),
        Op::Clear => {
            store.clear();
            Ok(())
        }
        Op::Checkout => store.checkout().map(|_| ()),
    }
}

proptest! {
    #[test]
    fn totals_always_match_line_items(ops in prop::collection::vec(op(), 0..60)) {
        let mut store = CartStore::detached();

        for op in &ops {
            let _ = apply(&mut store, op);

            let cart = store.cart();
            let expected_count: u64 = cart.items().map(|i| u64::from(i.quantity)).sum();
            let expected_total: f64 = cart
                .items()
                .map(|i| i.unit_price.amount() * f64::from(i.quantity))
                .sum();

            let summary = store.summary();
            prop_assert_eq!(summary.item_count, expected_count);
            prop_assert!((summary.total_price.amount() - expected_total).abs() < 1e-9);
            prop_assert!(cart.items().all(|i| i.quantity >= 1));
        }
    }

    #[test]
    fn emitted_view_is_fresh_after_every_success(ops in prop::collection::vec(op(), 1..60)) {
        let emitter = Arc::new(LastView::default());
        let mut store = CartStore::new(emitter.clone());

        for op in &ops {
            *emitter.0.lock().unwrap() = None;
            let result = apply(&mut store, op);

            let emitted = emitter.0.lock().unwrap().take();
            if result.is_err() {
                prop_assert!(emitted.is_none());
                continue;
            }

            let view = emitted.expect("successful operation must render");
            let cart = store.cart();
            prop_assert_eq!(view.rows.len(), cart.line_count());
            prop_assert_eq!(view.is_empty, cart.is_empty());

            for (row, item) in view.rows.iter().zip(cart.items()) {
                prop_assert_eq!(&row.id, &item.id);
                prop_assert_eq!(row.quantity, item.quantity);
                prop_assert_eq!(row.line_total, (item.unit_price * item.quantity).rounded());
            }
        }
    }

    #[test]
    fn failed_operations_leave_state_unchanged(ops in prop::collection::vec(op(), 0..40)) {
        let mut store = CartStore::detached();

        for op in &ops {
            let before = store.view();
            if apply(&mut store, op).is_err() {
                prop_assert_eq!(store.view(), before);
            }
        }
    }

    #[test]
    fn remove_twice_equals_remove_once(
        ops in prop::collection::vec(op(), 0..30),
        target in 0..CATALOG.len(),
    ) {
        let mut store = CartStore::detached();
        for op in &ops {
            let _ = apply(&mut store, op);
        }

        let _ = store.remove_item(&id(target));
        let once = store.view();

        let second = store.remove_item(&id(target));
        prop_assert!(matches!(second, Err(CoreError::UnknownItem(_))));
        prop_assert_eq!(store.view(), once);
    }
}

#[test]
fn adding_the_same_product_twice_aggregates() {
    let mut store = CartStore::detached();
    let ladoo = ProductRef::new("Ladoo", 10.0, "img/ladoo.png", 0);

    store.add_item(&ladoo).unwrap();
    let summary = store.add_item(&ladoo).unwrap();

    assert_eq!(store.cart().line_count(), 1);
    assert_eq!(summary.item_count, 2);
    assert_eq!(summary.total_price.amount(), 20.0);
}

#[test]
fn decrement_from_one_deletes() {
    let mut store = CartStore::detached();
    store.add_item(&product(0)).unwrap();

    store.decrement(&id(0)).unwrap();

    assert!(store.cart().get(&id(0)).is_none());
}

#[test]
fn checkout_on_empty_cart_is_refused() {
    let mut store = CartStore::detached();

    assert!(matches!(store.checkout(), Err(CoreError::EmptyCart)));
    assert!(store.cart().is_empty());
}

#[test]
fn checkout_success_empties_the_cart() {
    let mut store = CartStore::detached();
    store.add_item(&product(1)).unwrap();
    store.add_item(&product(2)).unwrap();

    let receipt = store.checkout().unwrap();

    assert_eq!(receipt.item_count, 2);
    assert_eq!(store.summary().item_count, 0);
    assert!(store.cart().is_empty());
}
