//! The immutable menu catalog.

use crate::catalog::MenuEntry;
use crate::error::CommerceError;
use crate::ids::MenuItemId;
use crate::money::Currency;
use serde::Serialize;

const IMAGE_BURGER: &str = "https://cdn.poehali.dev/projects/2be2d697-25c1-478c-ab7e-25b1a8fe7977/files/be1722c6-de3a-4b2c-92af-dd21d3b4a425.jpg";
const IMAGE_RAMEN: &str = "https://cdn.poehali.dev/projects/2be2d697-25c1-478c-ab7e-25b1a8fe7977/files/44a63d76-ec9f-481e-ac2b-118cda36f6e8.jpg";
const IMAGE_PIZZA: &str = "https://cdn.poehali.dev/projects/2be2d697-25c1-478c-ab7e-25b1a8fe7977/files/4a976994-d4b5-4d29-9ec1-b944e84ff8fa.jpg";

/// Ordered list of dishes, fixed for the session.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<MenuEntry>,
}

impl Catalog {
    /// Build a catalog, keeping the given order.
    ///
    /// Returns an error if:
    /// - Two entries share an id
    /// - Entries are priced in more than one currency
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self, CommerceError> {
        let mut seen = std::collections::HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(CommerceError::DuplicateMenuItem(entry.id));
            }
        }

        if let Some(first) = entries.first() {
            let expected = first.price.currency;
            if let Some(other) = entries.iter().find(|e| e.price.currency != expected) {
                return Err(CommerceError::CurrencyMismatch {
                    expected,
                    got: other.price.currency,
                });
            }
        }

        tracing::info!(entries = entries.len(), "catalog loaded");
        Ok(Self { entries })
    }

    /// The INDIE EAT menu.
    pub fn indie_eat() -> Self {
        Self {
            entries: vec![
                MenuEntry::new(
                    1,
                    "GLITCH BURGER",
                    "Двойная котлета, копченый бекон, сырный соус, карамелизированный лук",
                    "бургеры",
                    "450₽",
                    IMAGE_BURGER,
                ),
                MenuEntry::new(
                    2,
                    "CYBER RAMEN",
                    "Пряный бульон тонкоцу, яйцо, свинина чашу, бамбук, водоросли нори",
                    "азия",
                    "520₽",
                    IMAGE_RAMEN,
                ),
                MenuEntry::new(
                    3,
                    "NEON PIZZA",
                    "Пепперони, моцарелла, томатный соус, базилик, острый перец",
                    "пицца",
                    "380₽",
                    IMAGE_PIZZA,
                ),
                MenuEntry::new(
                    4,
                    "DARK BOWL",
                    "Черный рис, курица терияки, авокадо, эдамаме, кунжут",
                    "азия",
                    "420₽",
                    IMAGE_RAMEN,
                ),
                MenuEntry::new(
                    5,
                    "STREET TACOS",
                    "Три мини-тако с говядиной, сальса, гуакамоле, лайм",
                    "стрит-фуд",
                    "340₽",
                    IMAGE_BURGER,
                ),
                MenuEntry::new(
                    6,
                    "INDIE WRAP",
                    "Курица гриль, овощи, соус ранч, сыр чеддер в тортилье",
                    "стрит-фуд",
                    "290₽",
                    IMAGE_BURGER,
                ),
            ],
        }
    }

    /// All entries in menu order.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Look up an entry by id.
    pub fn get(&self, id: MenuItemId) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Currency every entry is priced in.
    pub fn currency(&self) -> Currency {
        self.entries
            .first()
            .map(|e| e.price.currency)
            .unwrap_or_default()
    }

    /// Distinct categories, in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !categories.contains(&entry.category.as_str()) {
                categories.push(&entry.category);
            }
        }
        categories
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::indie_eat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_builtin_menu() {
        let catalog = Catalog::indie_eat();
        assert_eq!(catalog.len(), 6);
        let ramen = catalog.get(MenuItemId::new(2)).unwrap();
        assert_eq!(ramen.name, "CYBER RAMEN");
        assert_eq!(ramen.price, Money::new(520, Currency::RUB));
        assert!(catalog.get(MenuItemId::new(7)).is_none());
    }

    #[test]
    fn test_builtin_menu_prices_all_parse() {
        let catalog = Catalog::indie_eat();
        assert!(catalog.entries().iter().all(|e| !e.price.is_zero()));
        assert_eq!(Catalog::new(catalog.entries().to_vec()).unwrap(), catalog);
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let catalog = Catalog::indie_eat();
        assert_eq!(
            catalog.categories(),
            vec!["бургеры", "азия", "пицца", "стрит-фуд"]
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let entries = vec![
            MenuEntry::new(1, "A", "", "", "100₽", ""),
            MenuEntry::new(1, "B", "", "", "200₽", ""),
        ];
        assert_eq!(
            Catalog::new(entries),
            Err(CommerceError::DuplicateMenuItem(MenuItemId::new(1)))
        );
    }

    #[test]
    fn test_mixed_currency_rejected() {
        let entries = vec![
            MenuEntry::new(1, "A", "", "", "100₽", ""),
            MenuEntry::new(2, "B", "", "", "$2", ""),
        ];
        assert!(matches!(
            Catalog::new(entries),
            Err(CommerceError::CurrencyMismatch {
                expected: Currency::RUB,
                got: Currency::USD
            })
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.currency(), Currency::RUB);
    }
}
