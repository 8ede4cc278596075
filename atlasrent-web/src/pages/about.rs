use atlasrent_core::site;
use yew::prelude::*;

use crate::i18n::t;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let values = [
        ("about.quality", "about.quality_desc"),
        ("about.service", "about.service_desc"),
        ("about.price", "about.price_desc"),
    ];

    html! {
        <div class="page about-page" data-testid="about-page">
            <section class="page-hero">
                <h1>{ t("about.title") }</h1>
                <p>{ t("about.subtitle") }</p>
            </section>
            <section class="about-story">
                <p>{ t("about.story") }</p>
                <p>{ site::delivery_zone(crate::i18n::current()) }</p>
            </section>
            <section class="about-values">
                <h2>{ t("about.values_title") }</h2>
                <div class="value-grid">
                    {
                        values.iter().map(|(title, desc)| html! {
                            <div class="value-card">
                                <h3>{ t(title) }</h3>
                                <p>{ t(desc) }</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::AboutPage;
    use crate::test_util::render;
    use yew::prelude::*;

    #[test]
    fn about_page_renders_story_and_values() {
        crate::i18n::set_lang("fr");
        let html = render(html! { <AboutPage /> });
        assert!(html.contains("À Propos"));
        assert!(html.contains("Nos Valeurs"));
    }
}
