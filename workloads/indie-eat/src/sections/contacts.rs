//! Contact channels and the message form.

use leptos::prelude::*;

use crate::components::Icon;
use crate::data::{ContactForm, ContactsContent, Section};

#[component]
pub fn ContactsSection() -> impl IntoView {
    let content = ContactsContent::default();
    let form = RwSignal::new(ContactForm::default());

    // The form is display-only: submitting keeps the page and the typed values.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        tracing::debug!(
            filled = form.with(|f| !f.name.is_empty() && !f.message.is_empty()),
            "contact form submit ignored"
        );
    };

    let cards = content
        .cards
        .into_iter()
        .map(|card| {
            view! {
                <div class="contact-card">
                    <Icon name=card.icon class="contact-card-icon"/>
                    <div>
                        <h3>{card.title}</h3>
                        <p class="contact-value">{card.value}</p>
                        <p class="contact-note">{card.note}</p>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let socials = content
        .social_icons
        .into_iter()
        .map(|icon| {
            view! {
                <button class="social-button" type="button" aria-label=icon>
                    <Icon name=icon/>
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id=Section::Contacts.id() class="contacts-section">
            <div class="container">
                <h2 class="section-title glitch" data-text=content.section_title.clone()>
                    {content.section_title.clone()}
                </h2>
                <p class="section-subtitle">{content.section_subtitle}</p>
                <div class="contacts-grid">
                    <div class="contacts-info">
                        {cards}
                        <div class="socials">
                            <h3>{content.social_title}</h3>
                            <div class="social-buttons">{socials}</div>
                        </div>
                    </div>
                    <form class="contact-form" on:submit=on_submit>
                        <h3>{content.form_title}</h3>
                        <input
                            type="text"
                            placeholder="Ваше имя"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                        <input
                            type="email"
                            placeholder="Email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                        <input
                            type="tel"
                            placeholder="Телефон"
                            prop:value=move || form.with(|f| f.phone.clone())
                            on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                        />
                        <textarea
                            rows="4"
                            placeholder="Сообщение"
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        ></textarea>
                        <button type="submit" class="btn btn-primary btn-block">
                            <Icon name="Send" class="icon-left"/>
                            "Отправить"
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
