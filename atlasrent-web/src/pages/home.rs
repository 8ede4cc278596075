use atlasrent_core::site;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::CarCard;
use crate::i18n::t;
use crate::pages::{RemoteState, use_catalog};
use crate::router::Route;

const FEATURED_COUNT: usize = 4;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let catalog = use_catalog();
    let lang = crate::i18n::current();

    let featured = match &*catalog {
        RemoteState::Loading => html! {
            <p class="state-message">{ t("common.loading") }</p>
        },
        RemoteState::Failed(err) => html! {
            <p class="state-message state-error">{ t(err.message_key()) }</p>
        },
        RemoteState::Ready(cars) => html! {
            <div class="fleet-grid">
                {
                    cars.iter().take(FEATURED_COUNT).map(|car| {
                        let key = car.id.clone();
                        html! { <CarCard {key} car={car.clone()} /> }
                    }).collect::<Html>()
                }
            </div>
        },
    };

    let features = [
        ("home.feature_insurance_title", "home.feature_insurance_desc"),
        ("home.feature_availability_title", "home.feature_availability_desc"),
        ("home.feature_service_title", "home.feature_service_desc"),
    ];

    html! {
        <div class="page home-page" data-testid="home-page">
            <section class="hero">
                <div class="hero-content">
                    <h1>{ t("hero.title") }</h1>
                    <p class="hero-subtitle">{ t("hero.subtitle") }</p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::Fleet} classes="btn btn-primary">
                            { t("hero.cta") }
                        </Link<Route>>
                        <a href={format!("tel:{}", site::PHONE)} class="btn btn-outline">
                            { t("hero.cta_secondary") }
                        </a>
                    </div>
                    <div class="hero-stats">
                        <div><strong>{ "8+" }</strong><span>{ t("home.stats_vehicles") }</span></div>
                        <div><strong>{ "500+" }</strong><span>{ t("home.stats_clients") }</span></div>
                        <div><strong>{ site::HOURS }</strong><span>{ t("home.stats_available") }</span></div>
                        <div><strong>{ "🇲🇦" }</strong><span>{ t("home.stats_coverage") }</span></div>
                    </div>
                </div>
            </section>

            <section class="home-features">
                {
                    features.iter().map(|(title, desc)| html! {
                        <div class="feature-card">
                            <h3>{ t(title) }</h3>
                            <p>{ t(desc) }</p>
                        </div>
                    }).collect::<Html>()
                }
            </section>

            <section class="home-featured">
                <h2>{ t("home.featured_title") }</h2>
                <p>{ t("home.featured_subtitle") }</p>
                { featured }
            </section>

            <section class="home-testimonials">
                <h2>{ t("home.testimonials_title") }</h2>
                <div class="testimonial-grid">
                    {
                        site::TESTIMONIALS.iter().map(|entry| {
                            let stars = "★".repeat(usize::from(entry.rating));
                            html! {
                            <blockquote class="testimonial">
                                <p class="stars">{ stars }</p>
                                <p>{ entry.comment(lang) }</p>
                                <footer>{ entry.name }</footer>
                            </blockquote>
                        }}).collect::<Html>()
                    }
                </div>
            </section>

            <section class="home-cta">
                <h2>{ t("home.cta_title") }</h2>
                <p>{ t("home.cta_subtitle") }</p>
                <Link<Route> to={Route::Booking} classes="btn btn-primary">
                    { t("nav.booking") }
                </Link<Route>>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::HomePage;
    use crate::test_util::render;
    use yew::prelude::*;

    #[test]
    fn home_page_renders_hero_and_testimonials() {
        crate::i18n::set_lang("en");
        let html = render(html! { <HomePage /> });
        assert!(html.contains("Rent Your Dream Car"));
        assert!(html.contains("Mohammed A."));
        assert!(html.contains("★★★★★"));
    }
}
