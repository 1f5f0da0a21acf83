//! Application shell and shared storefront state.

use std::sync::Arc;

use indie_commerce::prelude::*;
use leptos::prelude::*;
use leptos_meta::*;

use crate::components::{notify_added, CartDrawer, Nav, ToastHost};
use crate::config::StorefrontConfig;
use crate::data::{Section, ToastSlot};
use crate::sections::{ContactsSection, DeliverySection, Footer, Hero, MenuSection};

/// State shared by every component through Leptos context.
#[derive(Clone)]
pub struct StorefrontContext {
    pub catalog: Arc<Catalog>,
    pub config: Arc<StorefrontConfig>,
    /// The session's cart. Only ever mutated inside `update`.
    pub cart: RwSignal<CartStore>,
    pub toast: RwSignal<ToastSlot>,
    pub cart_open: RwSignal<bool>,
    pub active_section: RwSignal<Section>,
}

impl StorefrontContext {
    /// Create the session state with an empty cart wired to the toast.
    pub fn new(catalog: Catalog, config: StorefrontConfig) -> Self {
        let toast = RwSignal::new(ToastSlot::default());
        let toast_duration = config.toast_duration();

        let mut cart = CartStore::new();
        cart.subscribe(move |event| {
            tracing::trace!(id = %event.id(), "cart event");
            if let CartEvent::ItemAdded { name, .. } = event {
                notify_added(toast, name, toast_duration);
            }
        });

        tracing::info!(dishes = catalog.len(), brand = %config.brand, "storefront session started");

        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
            cart: RwSignal::new(cart),
            toast,
            cart_open: RwSignal::new(false),
            active_section: RwSignal::new(Section::default()),
        }
    }
}

/// Get the storefront state provided by [`App`].
pub fn use_storefront() -> StorefrontContext {
    expect_context::<StorefrontContext>()
}

/// Highlight a section in the nav and smooth-scroll to it.
pub fn scroll_to_section(active: RwSignal<Section>, section: Section) {
    active.set(section);

    let Some(element) = document().get_element_by_id(section.id()) else {
        tracing::debug!(section = section.id(), "scroll target not in the page");
        return;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn App(config: StorefrontConfig) -> impl IntoView {
    provide_meta_context();

    let title = format!("{} | Доставка еды", config.brand);
    provide_context(StorefrontContext::new(Catalog::indie_eat(), config));

    view! {
        <Title text=title/>
        <Meta name="description" content="Бургеры, рамен, пицца и стрит-фуд с доставкой по Москве"/>

        <Nav/>
        <main>
            <Hero/>
            <MenuSection/>
            <DeliverySection/>
            <ContactsSection/>
        </main>
        <Footer/>
        <CartDrawer/>
        <ToastHost/>
    }
}
