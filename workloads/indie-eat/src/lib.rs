//! INDIE EAT storefront.
//!
//! Single-page site rendered client-side with Leptos:
//! - Navigation that scrolls to page sections
//! - Hero, menu grid, delivery terms and contacts sections
//! - Cart drawer driven by the `indie-commerce` cart store
//! - Toast notification whenever a dish is added

pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod logging;
pub mod sections;

pub use app::{App, StorefrontContext};
pub use config::StorefrontConfig;

/// Browser entry point: set up logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
pub fn start() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let (config, config_error) = match StorefrontConfig::embedded() {
        Ok(config) => (config, None),
        Err(e) => (StorefrontConfig::default(), Some(e)),
    };

    logging::init(&config.log_filter);
    if let Some(e) = config_error {
        tracing::error!(error = %format!("{e:#}"), "storefront config invalid, using defaults");
    }

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
