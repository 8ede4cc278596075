use yew::prelude::*;

use crate::i18n::t;

const SECTIONS: &[(&str, &str)] = &[
    ("privacy.s1_title", "privacy.s1_body"),
    ("privacy.s2_title", "privacy.s2_body"),
    ("privacy.s3_title", "privacy.s3_body"),
];

#[function_component(PrivacyPage)]
pub fn privacy_page() -> Html {
    html! {
        <div class="page legal-page" data-testid="privacy-page">
            <section class="page-hero">
                <h1>{ t("privacy.title") }</h1>
            </section>
            <section class="legal-body">
                <p>{ t("privacy.intro") }</p>
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
