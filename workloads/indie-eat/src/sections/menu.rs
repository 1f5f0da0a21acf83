//! Menu grid.

use indie_commerce::prelude::*;
use leptos::prelude::*;

use crate::app::use_storefront;
use crate::components::Icon;
use crate::data::Section;

#[component]
pub fn MenuSection() -> impl IntoView {
    let catalog = use_storefront().catalog;

    view! {
        <section id=Section::Menu.id() class="menu-section">
            <div class="container">
                <h2 class="section-title glitch" data-text="МЕНЮ">"МЕНЮ"</h2>
                <p class="section-subtitle">"Уличная еда с характером"</p>
                <div class="menu-grid">
                    {catalog
                        .entries()
                        .iter()
                        .cloned()
                        .map(|entry| view! { <MenuCard entry=entry/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// A dish card with an add-to-cart button.
#[component]
pub fn MenuCard(entry: MenuEntry) -> impl IntoView {
    let cart = use_storefront().cart;
    let id = entry.id;
    let name = entry.name.clone();
    let description = entry.description.clone();
    let category = entry.category.clone();
    let image = entry.image.clone();
    let price_label = entry.price_label.clone();

    // Quantity of this dish already in the cart, shown on the button.
    let in_cart = Memo::new(move |_| cart.with(|c| c.line(id).map(|l| l.quantity).unwrap_or(0)));

    let add = move |_: leptos::ev::MouseEvent| {
        cart.update(|c| {
            c.add(&entry);
        });
    };

    view! {
        <article class="menu-card" data-id=id.to_string()>
            <div class="menu-card-image">
                <img src=image alt=name.clone() loading="lazy"/>
                <span class="category-badge">{category}</span>
            </div>
            <div class="menu-card-body">
                <h3 class="menu-card-title">{name}</h3>
                <p class="menu-card-description">{description}</p>
                <div class="menu-card-footer">
                    <span class="price">{price_label}</span>
                    <button class="btn btn-primary btn-small" on:click=add>
                        <Icon name="Plus" class="icon-left"/>
                        "В корзину"
                        <Show when=move || { in_cart.get() > 0 }>
                            <span class="menu-card-count">{move || in_cart.get().to_string()}</span>
                        </Show>
                    </button>
                </div>
            </div>
        </article>
    }
}
