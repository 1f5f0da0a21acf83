//! Add-to-cart toast.

use std::time::Duration;

use leptos::prelude::*;

use crate::app::use_storefront;
use crate::components::Icon;
use crate::data::{added_message, ToastSlot};

/// Show the "added to cart" toast and schedule its expiry.
pub fn notify_added(toast: RwSignal<ToastSlot>, name: &str, duration: Duration) {
    let Some(seq) = toast.try_update(|slot| slot.show(added_message(name))) else {
        tracing::warn!(dish = %name, "toast signal disposed, notification dropped");
        return;
    };

    set_timeout(
        move || {
            toast.try_update(|slot| slot.expire(seq));
        },
        duration,
    );
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = use_storefront().toast;

    view! {
        {move || {
            toast.with(|slot| slot.current().cloned()).map(|current| {
                view! {
                    <div class="toast" role="status" data-seq=current.seq.to_string()>
                        <Icon name="Check" class="toast-icon"/>
                        <span class="toast-message">{current.message}</span>
                        <button class="toast-close" aria-label="Закрыть" on:click=move |_| toast.update(|slot| slot.dismiss())>
                            <Icon name="X"/>
                        </button>
                    </div>
                }
            })
        }}
    }
}
