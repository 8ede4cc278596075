use atlasrent_core::site;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::t;
use crate::router::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let lang = crate::i18n::current();
    html! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <p class="brand-name">{ site::NAME }</p>
                    <p>{ site::tagline(lang) }</p>
                    <p>{ site::delivery_zone(lang) }</p>
                </div>
                <nav class="footer-links" aria-label={t("footer.links_title")}>
                    <p class="footer-heading">{ t("footer.links_title") }</p>
                    <Link<Route> to={Route::Fleet}>{ t("nav.fleet") }</Link<Route>>
                    <Link<Route> to={Route::Booking}>{ t("nav.booking") }</Link<Route>>
                    <Link<Route> to={Route::Terms}>{ t("footer.terms") }</Link<Route>>
                    <Link<Route> to={Route::Privacy}>{ t("footer.privacy") }</Link<Route>>
                </nav>
                <div class="footer-contact">
                    <p class="footer-heading">{ t("footer.contact_title") }</p>
                    <a href={format!("tel:{}", site::PHONE)}>{ site::PHONE }</a>
                    <a href={format!("mailto:{}", site::EMAIL)}>{ site::EMAIL }</a>
                    <p>{ site::address(lang) }</p>
                    <a href={site::INSTAGRAM} target="_blank" rel="noopener noreferrer">
                        { "Instagram" }
                    </a>
                </div>
            </div>
            <p class="footer-copyright">
                { format!("© {} — {}", site::NAME, t("footer.rights")) }
            </p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::Footer;
    use crate::test_util::render;
    use yew::prelude::*;

    #[test]
    fn footer_renders_contact_channels() {
        crate::i18n::set_lang("fr");
        let html = render(html! { <Footer /> });
        assert!(html.contains(atlasrent_core::site::PHONE));
        assert!(html.contains(atlasrent_core::site::EMAIL));
        assert!(html.contains("Tous droits réservés"));
    }
}
