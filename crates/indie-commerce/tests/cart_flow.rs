//! End-to-end cart flows against the built-in menu.

use std::sync::{Arc, Mutex};

use indie_commerce::prelude::*;

fn menu_entry(catalog: &Catalog, id: u32) -> &MenuEntry {
    catalog.get(MenuItemId::new(id)).expect("dish on the menu")
}

fn quantities(cart: &CartStore) -> Vec<(u32, u32)> {
    cart.lines().iter().map(|l| (l.id.get(), l.quantity)).collect()
}

#[test]
fn full_order_session() {
    let catalog = Catalog::indie_eat();
    let burger = menu_entry(&catalog, 1);
    let ramen = menu_entry(&catalog, 2);
    let mut cart = CartStore::new();

    cart.add(burger);
    assert_eq!(quantities(&cart), vec![(1, 1)]);
    assert_eq!(cart.total_item_count(), 1);
    assert_eq!(cart.total_price().amount, 450);

    cart.add(burger);
    assert_eq!(quantities(&cart), vec![(1, 2)]);
    assert_eq!(cart.total_price().amount, 900);

    cart.add(ramen);
    assert_eq!(cart.line_count(), 2);
    assert_eq!(cart.total_item_count(), 3);
    assert_eq!(cart.total_price().amount, 1420);

    cart.adjust_quantity(burger.id, -1);
    assert_eq!(quantities(&cart), vec![(1, 1), (2, 1)]);
    assert_eq!(cart.total_price().amount, 970);

    cart.adjust_quantity(burger.id, -1);
    assert_eq!(quantities(&cart), vec![(2, 1)]);
    assert_eq!(cart.total_price().amount, 520);

    cart.remove(ramen.id);
    assert!(cart.is_empty());
    assert_eq!(cart.total_item_count(), 0);
    assert_eq!(cart.total_price(), Money::zero(Currency::RUB));
}

#[test]
fn totals_do_not_depend_on_add_order() {
    let catalog = Catalog::indie_eat();
    let pizza = menu_entry(&catalog, 3);
    let wrap = menu_entry(&catalog, 6);

    let mut forward = CartStore::new();
    forward.add(pizza);
    forward.add(wrap);

    let mut backward = CartStore::new();
    backward.add(wrap);
    backward.add(pizza);

    assert_eq!(forward.line_count(), 2);
    assert_eq!(backward.line_count(), 2);
    assert_eq!(forward.total_item_count(), backward.total_item_count());
    assert_eq!(forward.total_price(), backward.total_price());
    assert_eq!(forward.total_price().amount, 670);
}

#[test]
fn removed_line_ignores_later_intents() {
    let catalog = Catalog::indie_eat();
    let tacos = menu_entry(&catalog, 5);
    let mut cart = CartStore::new();

    cart.add(tacos);
    cart.remove(tacos.id);
    cart.adjust_quantity(tacos.id, 1);
    cart.adjust_quantity(tacos.id, -1);
    cart.remove(tacos.id);

    assert!(cart.is_empty());
}

#[test]
fn no_line_ever_drops_below_one() {
    let catalog = Catalog::indie_eat();
    let mut cart = CartStore::new();
    for entry in catalog.entries() {
        cart.add(entry);
        cart.add(entry);
    }

    for (step, entry) in catalog.entries().iter().enumerate() {
        cart.adjust_quantity(entry.id, -(step as i64));
        assert!(cart.lines().iter().all(|l| l.quantity >= 1));
    }

    // -0 and -1 leave the first two dishes, everything else went to zero.
    assert_eq!(quantities(&cart), vec![(1, 2), (2, 1)]);
    let expected: u64 = cart.lines().iter().map(|l| u64::from(l.quantity)).sum();
    assert_eq!(cart.total_item_count(), expected);
}

#[test]
fn listeners_see_committed_state() {
    let catalog = Catalog::indie_eat();
    let bowl = menu_entry(&catalog, 4);
    let toasts = Arc::new(Mutex::new(Vec::new()));

    let mut cart = CartStore::new();
    let sink = Arc::clone(&toasts);
    cart.subscribe(move |event| {
        if let CartEvent::ItemAdded { name, quantity, .. } = event {
            sink.lock().unwrap().push(format!("{name} x{quantity}"));
        }
    });

    cart.add(bowl);
    cart.add(bowl);
    cart.adjust_quantity(bowl.id, -1);

    assert_eq!(
        *toasts.lock().unwrap(),
        vec!["DARK BOWL x1".to_string(), "DARK BOWL x2".to_string()]
    );
}

#[test]
fn cart_state_serializes_for_debugging() {
    let catalog = Catalog::indie_eat();
    let mut cart = CartStore::new();
    cart.add(menu_entry(&catalog, 1));

    let json = serde_json::to_value(cart.state()).unwrap();
    assert_eq!(json["lines"][0]["id"], 1);
    assert_eq!(json["lines"][0]["quantity"], 1);
    assert_eq!(json["lines"][0]["price"]["amount"], 450);
}
