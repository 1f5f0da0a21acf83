//! Static page copy for the landing sections.

use indie_commerce::Money;
use serde::Serialize;

use crate::config::StorefrontConfig;

/// Page sections reachable from the navigation, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum Section {
    #[default]
    Home,
    Menu,
    Delivery,
    Contacts,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Menu,
        Section::Delivery,
        Section::Contacts,
    ];

    /// DOM id of the section element.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Menu => "menu",
            Section::Delivery => "delivery",
            Section::Contacts => "contacts",
        }
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Menu => "Меню",
            Section::Delivery => "Доставка",
            Section::Contacts => "Контакты",
        }
    }
}

/// Hero banner copy.
#[derive(Debug, Clone, Serialize)]
pub struct HeroContent {
    pub headline: String,
    pub tagline: String,
    pub menu_cta: String,
    pub delivery_cta: String,
}

impl HeroContent {
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self {
            headline: config.brand.clone(),
            tagline: config.tagline.clone(),
            menu_cta: "Смотреть меню".to_string(),
            delivery_cta: "Условия доставки".to_string(),
        }
    }
}

/// One of the three delivery highlight cards.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryCard {
    pub icon: &'static str,
    pub title: String,
    pub description: String,
}

/// A row of the delivery zones table.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryZone {
    pub area: &'static str,
    pub terms: String,
    /// Highlighted row.
    pub featured: bool,
}

/// Delivery section copy.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryContent {
    pub section_title: String,
    pub section_subtitle: String,
    pub cards: Vec<DeliveryCard>,
    pub zones_title: String,
    pub zones: Vec<DeliveryZone>,
}

impl DeliveryContent {
    /// Build the delivery copy around the configured free-delivery threshold.
    pub fn new(free_from: Money) -> Self {
        let free_terms = format!("Бесплатно от {}", free_from);
        let zone_fee = |amount: i64| Money::new(amount, free_from.currency).display();

        Self {
            section_title: "ДОСТАВКА".to_string(),
            section_subtitle: "Быстро. Надежно. Вкусно.".to_string(),
            cards: vec![
                DeliveryCard {
                    icon: "Clock",
                    title: "30-45 минут".to_string(),
                    description: "Среднее время доставки по городу".to_string(),
                },
                DeliveryCard {
                    icon: "Banknote",
                    title: free_terms.clone(),
                    description: format!("При заказе от {} доставка в подарок", free_from),
                },
                DeliveryCard {
                    icon: "MapPin",
                    title: "Вся Москва".to_string(),
                    description: "Доставляем в пределах МКАД".to_string(),
                },
            ],
            zones_title: "Зоны доставки".to_string(),
            zones: vec![
                DeliveryZone {
                    area: "В пределах МКАД",
                    terms: free_terms,
                    featured: true,
                },
                DeliveryZone {
                    area: "До 5 км за МКАД",
                    terms: zone_fee(200),
                    featured: false,
                },
                DeliveryZone {
                    area: "5-10 км за МКАД",
                    terms: zone_fee(350),
                    featured: false,
                },
            ],
        }
    }
}

/// A contact channel card.
#[derive(Debug, Clone, Serialize)]
pub struct ContactCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

/// Contacts section copy.
#[derive(Debug, Clone, Serialize)]
pub struct ContactsContent {
    pub section_title: String,
    pub section_subtitle: String,
    pub form_title: String,
    pub cards: Vec<ContactCard>,
    pub social_title: String,
    pub social_icons: Vec<&'static str>,
}

impl Default for ContactsContent {
    fn default() -> Self {
        Self {
            section_title: "КОНТАКТЫ".to_string(),
            section_subtitle: "Свяжитесь с нами любым удобным способом".to_string(),
            form_title: "Написать нам".to_string(),
            cards: vec![
                ContactCard {
                    icon: "Phone",
                    title: "Телефон",
                    value: "+7 (495) 123-45-67",
                    note: "Ежедневно с 10:00 до 23:00",
                },
                ContactCard {
                    icon: "Mail",
                    title: "Email",
                    value: "hello@indieeat.ru",
                    note: "Ответим в течение 24 часов",
                },
            ],
            social_title: "Социальные сети".to_string(),
            social_icons: vec!["Instagram", "Send", "MessageSquare"],
        }
    }
}

/// Values typed into the contact form. Nothing is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use indie_commerce::Currency;

    #[test]
    fn test_sections_in_page_order() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["home", "menu", "delivery", "contacts"]);
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn test_delivery_uses_threshold() {
        let content = DeliveryContent::new(Money::new(1000, Currency::RUB));
        assert_eq!(content.cards[1].title, "Бесплатно от 1000₽");
        assert_eq!(content.zones[0].terms, "Бесплатно от 1000₽");
        assert_eq!(content.zones[1].terms, "200₽");
        assert_eq!(content.zones[2].terms, "350₽");
        assert!(content.zones[0].featured);
    }

    #[test]
    fn test_hero_follows_config() {
        let config = StorefrontConfig {
            brand: "NEON NOODLES".to_string(),
            ..StorefrontConfig::default()
        };
        let hero = HeroContent::from_config(&config);
        assert_eq!(hero.headline, "NEON NOODLES");
        assert_eq!(hero.tagline, config.tagline);
    }
}
