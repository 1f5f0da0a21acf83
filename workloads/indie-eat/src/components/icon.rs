//! Inline glyph icons.

use leptos::prelude::*;

/// Glyph for an icon name. Unknown names render as a bullet.
pub fn glyph(name: &str) -> &'static str {
    match name {
        "ShoppingCart" => "\u{1f6d2}",
        "UtensilsCrossed" => "\u{1f374}",
        "Truck" => "\u{1f69a}",
        "Plus" => "+",
        "Minus" => "\u{2212}",
        "Trash" => "\u{1f5d1}",
        "X" => "\u{00d7}",
        "Check" => "\u{2713}",
        "Clock" => "\u{23f1}",
        "Banknote" => "\u{1f4b5}",
        "MapPin" => "\u{1f4cd}",
        "Phone" => "\u{1f4de}",
        "Mail" => "\u{2709}",
        "MessageCircle" => "\u{1f4ac}",
        "Instagram" => "\u{1f4f7}",
        "Send" => "\u{27a4}",
        "MessageSquare" => "\u{1f5e8}",
        _ => "\u{2022}",
    }
}

#[component]
pub fn Icon(name: &'static str, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <span class=format!("icon {}", class) data-icon=name aria-hidden="true">
            {glyph(name)}
        </span>
    }
}
