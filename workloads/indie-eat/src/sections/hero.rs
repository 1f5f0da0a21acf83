//! Hero banner with glitch headline.

use leptos::prelude::*;

use crate::app::{scroll_to_section, use_storefront};
use crate::components::Icon;
use crate::data::{HeroContent, Section};

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_storefront();
    let active = ctx.active_section;
    let content = HeroContent::from_config(&ctx.config);

    view! {
        <section id=Section::Home.id() class="hero">
            <div class="hero-grid" aria-hidden="true"></div>
            <div class="container hero-content">
                <h2 class="hero-headline glitch" data-text=content.headline.clone()>
                    {content.headline.clone()}
                </h2>
                <p class="hero-tagline">{content.tagline}</p>
                <div class="hero-actions">
                    <button class="btn btn-primary" on:click=move |_| scroll_to_section(active, Section::Menu)>
                        <Icon name="UtensilsCrossed" class="icon-left"/>
                        {content.menu_cta}
                    </button>
                    <button class="btn btn-outline" on:click=move |_| scroll_to_section(active, Section::Delivery)>
                        <Icon name="Truck" class="icon-left"/>
                        {content.delivery_cta}
                    </button>
                </div>
            </div>
        </section>
    }
}
