use yew::prelude::*;

use crate::i18n::t;

const SECTIONS: &[(&str, &str)] = &[
    ("terms.s1_title", "terms.s1_body"),
    ("terms.s2_title", "terms.s2_body"),
    ("terms.s3_title", "terms.s3_body"),
    ("terms.s4_title", "terms.s4_body"),
];

#[function_component(TermsPage)]
pub fn terms_page() -> Html {
    html! {
        <div class="page legal-page" data-testid="terms-page">
            <section class="page-hero">
                <h1>{ t("terms.title") }</h1>
            </section>
            <section class="legal-body">
                <p>{ t("terms.intro") }</p>
                {
                    SECTIONS.iter().map(|(title, body)| html! {
                        <div class="legal-section">
                            <h2>{ t(title) }</h2>
                            <p>{ t(body) }</p>
                        </div>
                    }).collect::<Html>()
                }
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::TermsPage;
    use crate::test_util::render;
    use yew::prelude::*;

    #[test]
    fn terms_page_renders_all_sections() {
        crate::i18n::set_lang("fr");
        let html = render(html! { <TermsPage /> });
        assert!(html.contains("Conditions"));
        assert!(html.contains("Caution"));
    }
}
