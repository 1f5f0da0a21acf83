//! Catalog construction through the public API.

use indie_commerce::prelude::*;

#[test]
fn builtin_menu_matches_the_site() {
    let catalog = Catalog::indie_eat();
    let names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "GLITCH BURGER",
            "CYBER RAMEN",
            "NEON PIZZA",
            "DARK BOWL",
            "STREET TACOS",
            "INDIE WRAP",
        ]
    );
    assert_eq!(catalog.currency(), Currency::RUB);
    assert_eq!(Catalog::default(), catalog);
}

#[test]
fn custom_catalog_in_another_currency() {
    let entries = vec![
        MenuEntry::try_new(10, "TOFU BOWL", "", "азия", "$12", "").unwrap(),
        MenuEntry::try_new(11, "LEMONADE", "", "напитки", "3 USD", "").unwrap(),
    ];
    let catalog = Catalog::new(entries).unwrap();
    assert_eq!(catalog.currency(), Currency::USD);

    let mut cart = CartStore::new();
    for entry in catalog.entries() {
        cart.add(entry);
    }
    cart.adjust_quantity(MenuItemId::new(11), 2);
    assert_eq!(cart.total_price().display(), "$21");
}

#[test]
fn strict_entries_surface_the_bad_label() {
    let err = MenuEntry::try_new(12, "SECRET", "", "", "free", "").unwrap_err();
    assert!(err.to_string().contains("free"));
}

#[test]
fn empty_catalog_is_allowed() {
    let catalog = Catalog::new(Vec::new()).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.categories().is_empty());
    assert_eq!(catalog.currency(), Currency::default());
}
