use leptos::prelude::*;

use crate::app::use_storefront;

/// Copyright line for the footer.
pub fn copyright(brand: &str) -> String {
    format!("© 2025 {}. Все права защищены.", brand)
}

#[component]
pub fn Footer() -> impl IntoView {
    let brand = use_storefront().config.brand.clone();

    view! {
        <footer class="site-footer">
            <div class="container">
                <p>{copyright(&brand)}</p>
            </div>
        </footer>
    }
}
