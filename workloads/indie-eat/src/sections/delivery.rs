//! Delivery terms.

use leptos::prelude::*;

use crate::app::use_storefront;
use crate::components::Icon;
use crate::data::{DeliveryContent, Section};

#[component]
pub fn DeliverySection() -> impl IntoView {
    let config = use_storefront().config;
    let content = DeliveryContent::new(config.free_delivery_threshold());

    let cards = content
        .cards
        .into_iter()
        .map(|card| {
            view! {
                <div class="delivery-card">
                    <Icon name=card.icon class="delivery-card-icon"/>
                    <h3>{card.title}</h3>
                    <p>{card.description}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let zones = content
        .zones
        .into_iter()
        .map(|zone| {
            view! {
                <li class="delivery-zone" class:featured=zone.featured>
                    <span class="delivery-zone-area">{zone.area}</span>
                    <span class="delivery-zone-terms">{zone.terms}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id=Section::Delivery.id() class="delivery-section">
            <div class="container">
                <h2 class="section-title glitch" data-text=content.section_title.clone()>
                    {content.section_title.clone()}
                </h2>
                <p class="section-subtitle">{content.section_subtitle}</p>
                <div class="delivery-cards">{cards}</div>
                <div class="delivery-zones">
                    <h3>{content.zones_title}</h3>
                    <ul>{zones}</ul>
                </div>
            </div>
        </section>
    }
}
