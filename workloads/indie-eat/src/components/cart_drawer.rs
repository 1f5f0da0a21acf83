//! Slide-in cart panel.

use indie_commerce::prelude::*;
use leptos::prelude::*;

use crate::app::use_storefront;
use crate::components::Icon;

/// Russian label for a number of items: "1 товар", "3 товара", "5 товаров".
pub fn item_count_label(count: u64) -> String {
    let word = match (count % 10, count % 100) {
        (_, 11..=14) => "товаров",
        (1, _) => "товар",
        (2..=4, _) => "товара",
        _ => "товаров",
    };
    format!("{} {}", count, word)
}

#[component]
pub fn CartDrawer() -> impl IntoView {
    let ctx = use_storefront();
    let cart = ctx.cart;
    let cart_open = ctx.cart_open;

    let lines = Memo::new(move |_| cart.with(|c| c.lines().to_vec()));
    let total = Memo::new(move |_| cart.with(|c| c.total_price()));
    let count = Memo::new(move |_| cart.with(|c| c.total_item_count()));

    let close = move |_: leptos::ev::MouseEvent| cart_open.set(false);

    view! {
        <Show when=move || cart_open.get()>
            <div class="cart-overlay" on:click=close></div>
            <aside class="cart-drawer" aria-label="Корзина">
                <header class="cart-header">
                    <h2>"КОРЗИНА"</h2>
                    <button class="icon-button" aria-label="Закрыть" on:click=close>
                        <Icon name="X"/>
                    </button>
                </header>

                {move || {
                    if lines.with(|l| l.is_empty()) {
                        view! {
                            <div class="cart-empty">
                                <Icon name="ShoppingCart" class="cart-empty-icon"/>
                                <p>"Корзина пуста"</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <ul class="cart-lines">
                                {lines.get().into_iter().map(|line| view! { <CartRow line=line/> }).collect::<Vec<_>>()}
                            </ul>
                            <footer class="cart-footer">
                                <p class="cart-count">{move || item_count_label(count.get())}</p>
                                <div class="cart-total">
                                    <span>"Итого:"</span>
                                    <span class="price">{move || total.get().display()}</span>
                                </div>
                                <button class="btn btn-primary btn-block">"Оформить заказ"</button>
                            </footer>
                        }
                        .into_any()
                    }
                }}
            </aside>
        </Show>
    }
}

#[component]
fn CartRow(line: CartLine) -> impl IntoView {
    let cart = use_storefront().cart;
    let id = line.id;
    let unit_price = line.price.display();
    let subtotal = line.subtotal().display();
    let quantity = line.quantity.to_string();

    view! {
        <li class="cart-line" data-id=id.to_string()>
            <img class="cart-line-image" src=line.image alt=line.name.clone()/>
            <div class="cart-line-info">
                <h3>{line.name}</h3>
                <p class="cart-line-price">{unit_price}</p>
                <div class="quantity-controls">
                    <button
                        class="icon-button"
                        aria-label="Меньше"
                        on:click=move |_| {
                            cart.update(|c| {
                                c.adjust_quantity(id, -1);
                            })
                        }
                    >
                        <Icon name="Minus"/>
                    </button>
                    <span class="quantity">{quantity}</span>
                    <button
                        class="icon-button"
                        aria-label="Больше"
                        on:click=move |_| {
                            cart.update(|c| {
                                c.adjust_quantity(id, 1);
                            })
                        }
                    >
                        <Icon name="Plus"/>
                    </button>
                </div>
            </div>
            <div class="cart-line-side">
                <span class="price">{subtotal}</span>
                <button
                    class="icon-button remove"
                    aria-label="Удалить"
                    on:click=move |_| {
                        cart.update(|c| {
                            c.remove(id);
                        })
                    }
                >
                    <Icon name="Trash"/>
                </button>
            </div>
        </li>
    }
}
