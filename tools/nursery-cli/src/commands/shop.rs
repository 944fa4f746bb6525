//! Interactive storefront session.
//!
//! Two screens: the product list and the cart. The cart screen gets back to
//! the product list through the continue-shopping navigator.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::Result;
use dialoguer::Select;
use nursery_cart::catalog::{Catalog, Product};
use nursery_cart::cart::CartStore;
use nursery_cart::screen::{handle_action, ActionOutcome, CartAction, CartScreen};

use super::ShopArgs;
use crate::context::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Products,
    Cart,
}

/// Choices offered on the product list.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ProductChoice {
    Add(usize),
    ViewCart,
    Quit,
}

/// Choices offered on the cart screen.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CartChoice {
    Action(CartAction),
    Quit,
}

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let products: Vec<&Product> = catalog.products().collect();

    let mut cart = CartStore::new();

    // Cart badge, kept current by the store's change notifications.
    let badge = Arc::new(AtomicU64::new(0));
    let badge_sink = Arc::clone(&badge);
    cart.subscribe(move |event, items| {
        let count: u64 = items.iter().map(|i| u64::from(i.quantity)).sum();
        badge_sink.store(count, Ordering::Relaxed);
        tracing::debug!(?event, count, "Cart badge updated");
    });

    let mut screen = if args.cart_first {
        Screen::Cart
    } else {
        Screen::Products
    };

    loop {
        match screen {
            Screen::Products => {
                let (labels, choices) =
                    product_menu(&catalog, &products, &cart, badge.load(Ordering::Relaxed));
                let selection = Select::new()
                    .with_prompt("Plants")
                    .items(&labels)
                    .default(0)
                    .interact()?;

                match &choices[selection] {
                    ProductChoice::Add(index) => {
                        let product = products[*index];
                        cart.add(product);
                        ctx.output.success(&format!("Added {} to cart", product.name));
                    }
                    ProductChoice::ViewCart => screen = Screen::Cart,
                    ProductChoice::Quit => break,
                }
            }
            Screen::Cart => {
                let view = CartScreen::from_store(&cart);
                ctx.output.cart_screen(&view);

                let (labels, choices) = cart_menu(&view);
                let selection = Select::new()
                    .with_prompt("Cart")
                    .items(&labels)
                    .default(0)
                    .interact()?;

                let action = match &choices[selection] {
                    CartChoice::Action(action) => action,
                    CartChoice::Quit => break,
                };

                let mut back_to_products = false;
                let mut navigator = || back_to_products = true;
                let outcome = handle_action(&mut cart, action, &mut navigator);

                match outcome {
                    ActionOutcome::Updated(false) if ctx.output.is_verbose() => {
                        ctx.output.debug("Cart unchanged");
                    }
                    ActionOutcome::Notice(message) => ctx.output.info(message),
                    _ => {}
                }
                if back_to_products {
                    screen = Screen::Products;
                }
            }
        }
    }

    Ok(())
}

fn product_menu(
    catalog: &Catalog,
    products: &[&Product],
    cart: &CartStore,
    cart_count: u64,
) -> (Vec<String>, Vec<ProductChoice>) {
    let mut labels = Vec::with_capacity(products.len() + 2);
    let mut choices = Vec::with_capacity(products.len() + 2);

    for (index, product) in products.iter().enumerate() {
        let category_hint = if catalog.categories().len() > 1 {
            format!(" [{}]", product.category)
        } else {
            String::new()
        };
        let state = if cart.contains(product.name.as_str()) {
            " - added to cart"
        } else {
            ""
        };
        labels.push(format!(
            "{} {}{}{}",
            product.name,
            product.price.display(),
            category_hint,
            state
        ));
        choices.push(ProductChoice::Add(index));
    }

    labels.push(format!("View cart ({})", cart_count));
    choices.push(ProductChoice::ViewCart);
    labels.push("Quit".to_string());
    choices.push(ProductChoice::Quit);

    (labels, choices)
}

fn cart_menu(view: &CartScreen) -> (Vec<String>, Vec<CartChoice>) {
    let mut labels = Vec::new();
    let mut choices = Vec::new();

    if let CartScreen::Itemized { lines, .. } = view {
        for line in lines {
            labels.push(format!("+ {}", line.name));
            choices.push(CartChoice::Action(CartAction::Increment(line.name.clone())));
            labels.push(format!("- {}", line.name));
            choices.push(CartChoice::Action(CartAction::Decrement(line.name.clone())));
            labels.push(format!("Remove {}", line.name));
            choices.push(CartChoice::Action(CartAction::Remove(line.name.clone())));
        }
    }

    labels.push("Continue shopping".to_string());
    choices.push(CartChoice::Action(CartAction::ContinueShopping));

    if !view.is_empty() {
        labels.push("Checkout".to_string());
        choices.push(CartChoice::Action(CartAction::Checkout));
    }

    labels.push("Quit".to_string());
    choices.push(CartChoice::Quit);

    (labels, choices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nursery_cart::money::Money;

    fn catalog() -> Catalog {
        Catalog::from_json_str(
            r#"{"categories": [{"name": "Shade", "plants": [
                {"name": "Fern", "image": "fern.jpg", "cost": "$15"},
                {"name": "Moss", "image": "moss.jpg", "cost": "$8.50"}
            ]}]}"#,
        )
        .unwrap()
        .catalog
    }

    #[test]
    fn test_product_menu_marks_items_in_cart() {
        let catalog = catalog();
        let products: Vec<&Product> = catalog.products().collect();
        let mut cart = CartStore::new();
        cart.add(products[0]);

        let (labels, choices) = product_menu(&catalog, &products, &cart, 1);

        assert_eq!(labels[0], "Fern $15.00 - added to cart");
        assert_eq!(labels[1], "Moss $8.50");
        assert_eq!(labels[2], "View cart (1)");
        assert_eq!(choices[2], ProductChoice::ViewCart);
        assert_eq!(choices.last(), Some(&ProductChoice::Quit));
    }

    #[test]
    fn test_empty_cart_menu_offers_only_continue_shopping() {
        let (labels, choices) = cart_menu(&CartScreen::Empty);
        assert_eq!(labels, vec!["Continue shopping", "Quit"]);
        assert_eq!(
            choices[0],
            CartChoice::Action(CartAction::ContinueShopping)
        );
    }

    #[test]
    fn test_itemized_cart_menu() {
        let mut cart = CartStore::new();
        cart.add(&Product::new("Fern", Money::from_cents(1500)));
        let (labels, choices) = cart_menu(&CartScreen::from_store(&cart));

        assert_eq!(
            labels,
            vec!["+ Fern", "- Fern", "Remove Fern", "Continue shopping", "Checkout", "Quit"]
        );
        assert_eq!(choices[4], CartChoice::Action(CartAction::Checkout));
    }
}
