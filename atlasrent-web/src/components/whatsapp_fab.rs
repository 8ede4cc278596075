use atlasrent_core::{compose_general_inquiry, site};
use yew::prelude::*;

use crate::services::whatsapp::deep_link;

/// Floating WhatsApp contact button, always present over the page chrome.
/// The link is recomputed on render so it follows the active language.
#[function_component(WhatsAppFab)]
pub fn whatsapp_fab() -> Html {
    let href = deep_link(site::WHATSAPP, compose_general_inquiry(crate::i18n::current()));
    html! {
        <a
            class="whatsapp-fab"
            href={href}
            target="_blank"
            rel="noopener noreferrer"
            aria-label="WhatsApp"
        >
            { "💬" }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::WhatsAppFab;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn fab_links_to_the_configured_account() {
        crate::i18n::set_lang("fr");
        let html = block_on(LocalServerRenderer::<WhatsAppFab>::new().render());
        assert!(html.contains(&format!("https://wa.me/{}", atlasrent_core::site::WHATSAPP)));
    }
}
