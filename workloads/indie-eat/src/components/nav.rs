//! Fixed top navigation.

use leptos::prelude::*;

use crate::app::{scroll_to_section, use_storefront};
use crate::components::Icon;
use crate::data::Section;

#[component]
pub fn Nav() -> impl IntoView {
    let ctx = use_storefront();
    let active = ctx.active_section;
    let cart = ctx.cart;
    let cart_open = ctx.cart_open;
    let brand = ctx.config.brand.clone();

    let item_count = Memo::new(move |_| cart.with(|c| c.total_item_count()));

    let links = Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <button
                    class="nav-link"
                    class:active=move || active.get() == section
                    on:click=move |_| scroll_to_section(active, section)
                >
                    {section.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="site-nav">
            <div class="container nav-inner">
                <h1 class="brand glitch" data-text=brand.clone()>{brand.clone()}</h1>
                <div class="nav-links">{links}</div>
                <button class="btn btn-primary cart-button" on:click=move |_| cart_open.set(true)>
                    <Icon name="ShoppingCart" class="icon-left"/>
                    "Корзина"
                    <Show when=move || { item_count.get() > 0 }>
                        <span class="cart-badge">{move || item_count.get().to_string()}</span>
                    </Show>
                </button>
            </div>
        </nav>
    }
}
