use atlasrent_core::{compose_general_inquiry, site};
use yew::prelude::*;

use crate::i18n::t;
use crate::services::whatsapp::deep_link;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let lang = crate::i18n::current();
    let whatsapp_href = deep_link(site::WHATSAPP, compose_general_inquiry(lang));

    html! {
        <div class="page contact-page" data-testid="contact-page">
            <section class="page-hero">
                <h1>{ t("contact.title") }</h1>
                <p>{ t("contact.subtitle") }</p>
            </section>
            <section class="contact-cards">
                <div class="contact-card">
                    <h3>{ t("contact.phone") }</h3>
                    <a href={format!("tel:{}", site::PHONE)}>{ site::PHONE }</a>
                </div>
                <div class="contact-card">
                    <h3>{ t("contact.email") }</h3>
                    <a href={format!("mailto:{}", site::EMAIL)}>{ site::EMAIL }</a>
                </div>
                <div class="contact-card">
                    <h3>{ t("contact.address") }</h3>
                    <p>{ site::address(lang) }</p>
                    <p>{ t("contact.delivery") }</p>
                </div>
                <div class="contact-card">
                    <h3>{ t("contact.hours") }</h3>
                    <p>{ site::HOURS }</p>
                </div>
            </section>
            <section class="contact-whatsapp">
                <a
                    class="btn btn-primary"
                    href={whatsapp_href}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    { "WhatsApp" }
                </a>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::ContactPage;
    use crate::test_util::render;
    use yew::prelude::*;

    #[test]
    fn contact_page_renders_every_channel() {
        crate::i18n::set_lang("en");
        let html = render(html! { <ContactPage /> });
        assert!(html.contains(atlasrent_core::site::PHONE));
        assert!(html.contains(atlasrent_core::site::EMAIL));
        assert!(html.contains("https://wa.me/"));
    }
}
