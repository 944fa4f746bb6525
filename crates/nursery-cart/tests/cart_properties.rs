//! Behavioural properties of the cart store over arbitrary transition
//! sequences, plus the reference scenarios.

use std::collections::HashSet;

use nursery_cart::prelude::*;
use proptest::prelude::*;

fn product(name: &str, cost: &str) -> Product {
    Product::new(name, Money::parse_price(cost).unwrap())
}

fn pool() -> Vec<Product> {
    vec![
        product("Fern", "$15"),
        product("Moss", "$8.50"),
        product("Lavender", "$20"),
        product("Mint", "$0.99"),
    ]
}

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    SetQuantity(usize, i64),
    Remove(usize),
    Increment(usize),
    Decrement(usize),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..4usize).prop_map(Op::Add),
        2 => (0..4usize, -3i64..12).prop_map(|(i, q)| Op::SetQuantity(i, q)),
        2 => (0..4usize).prop_map(Op::Remove),
        1 => (0..4usize).prop_map(Op::Increment),
        2 => (0..4usize).prop_map(Op::Decrement),
        1 => Just(Op::Clear),
    ]
}

fn apply(cart: &mut CartStore, products: &[Product], op: &Op) {
    match op {
        Op::Add(i) => {
            cart.add(&products[*i]);
        }
        Op::SetQuantity(i, q) => {
            cart.set_quantity(products[*i].name.as_str(), *q);
        }
        Op::Remove(i) => {
            cart.remove(products[*i].name.as_str());
        }
        Op::Increment(i) => {
            cart.increment(products[*i].name.as_str());
        }
        Op::Decrement(i) => {
            cart.decrement(products[*i].name.as_str());
        }
        Op::Clear => {
            cart.clear();
        }
    }
}

fn build(ops: &[Op]) -> CartStore {
    let products = pool();
    let mut cart = CartStore::new();
    for op in ops {
        apply(&mut cart, &products, op);
    }
    cart
}

proptest! {
    #[test]
    fn names_stay_unique_and_quantities_positive(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let products = pool();
        let mut cart = CartStore::new();
        for op in &ops {
            apply(&mut cart, &products, op);

            let mut names = HashSet::new();
            for item in cart.items() {
                prop_assert!(names.insert(item.name.clone()), "duplicate {}", item.name);
                prop_assert!(item.quantity >= 1);
            }
        }
    }

    #[test]
    fn total_quantity_is_sum_of_quantities(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let cart = build(&ops);
        let expected: u64 = cart.items().iter().map(|i| u64::from(i.quantity)).sum();
        prop_assert_eq!(cart.total_quantity(), expected);
    }

    #[test]
    fn total_amount_is_sum_of_line_totals(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let cart = build(&ops);
        let expected: i64 = cart
            .items()
            .iter()
            .map(|i| cart.line_total(i).unwrap().cents())
            .sum();
        prop_assert_eq!(cart.total_amount().unwrap().cents(), expected);

        let summary = cart.summary().unwrap();
        prop_assert_eq!(summary.total_amount, cart.total_amount().unwrap());
        prop_assert_eq!(summary.total_quantity, cart.total_quantity());
    }

    #[test]
    fn remove_is_idempotent(
        ops in prop::collection::vec(op_strategy(), 0..40),
        target in 0..4usize,
    ) {
        let name = pool()[target].name.clone();
        let mut cart = build(&ops);

        cart.remove(name.as_str());
        let once = cart.items().to_vec();
        prop_assert!(!cart.remove(name.as_str()));
        prop_assert_eq!(cart.items(), once.as_slice());
    }

    #[test]
    fn add_then_remove_round_trips(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut cart = build(&ops);
        let before = cart.items().to_vec();
        let sprout = product("Fresh Sprout", "$3");

        cart.add(&sprout);
        cart.remove("Fresh Sprout");

        prop_assert_eq!(cart.items(), before.as_slice());
    }
}

#[test]
fn scenario_add_to_empty_cart() {
    let mut cart = CartStore::new();
    cart.add(&product("Fern", "$15"));

    assert_eq!(cart.total_quantity(), 1);
    assert_eq!(cart.total_amount_display().unwrap(), "15.00");
}

#[test]
fn scenario_add_duplicate_increments() {
    let mut cart = CartStore::new();
    cart.add(&product("Fern", "$15"));
    cart.add(&product("Fern", "$15"));

    assert_eq!(cart.get("Fern").unwrap().quantity, 2);
    assert_eq!(cart.total_amount_display().unwrap(), "30.00");
}

#[test]
fn scenario_set_quantity_zero_removes() {
    let mut cart = CartStore::new();
    cart.add(&product("Fern", "$15"));
    cart.set_quantity("Fern", 0);

    assert!(cart.is_empty());
    assert_eq!(cart.total_quantity(), 0);
}

#[test]
fn scenario_two_items_total() {
    let mut cart = CartStore::new();
    let fern = product("Fern", "$15");
    cart.add(&fern);
    cart.set_quantity("Fern", 2);
    cart.add(&product("Moss", "$8.50"));

    assert_eq!(cart.total_amount_display().unwrap(), "38.50");
}

#[test]
fn scenario_remove_unknown_is_noop() {
    let mut cart = CartStore::new();
    cart.add(&product("Fern", "$15"));
    let before = cart.items().to_vec();

    assert!(!cart.remove("Nonexistent"));
    assert_eq!(cart.items(), before.as_slice());
}

#[test]
fn builtin_catalog_feeds_the_cart() {
    let load = Catalog::builtin().unwrap();
    let lavender = load.catalog.find("Lavender").unwrap();

    let mut cart = CartStore::new();
    cart.add(lavender);
    cart.add(lavender);

    assert_eq!(cart.total_amount_display().unwrap(), "40.00");
    assert_eq!(cart.get("Lavender").unwrap().image, lavender.image);
}
