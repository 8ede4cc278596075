//! Native server-side render smoke tests for every page, across the three
//! supported languages.

use atlasrent_core::{Descriptions, Fuel, Transmission, Vehicle};
use atlasrent_web::components::car_card::CarCard;
use atlasrent_web::pages::{
    about::AboutPage, booking::BookingPage, car_detail::CarDetailPage, contact::ContactPage,
    fleet::FleetPage, gallery::GalleryPage, home::HomePage, not_found::NotFoundPage,
    privacy::PrivacyPage, terms::TermsPage,
};
use futures::executor::block_on;
use yew::prelude::*;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
struct WrapProps {
    children: Children,
}

#[function_component(TestRouter)]
fn test_router(props: &WrapProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    html! {
        <Router history={history}>
            { for props.children.iter() }
        </Router>
    }
}

fn render(content: Html) -> String {
    block_on(
        yew::LocalServerRenderer::<TestRouter>::with_props(WrapProps {
            children: Children::new(vec![content]),
        })
        .render(),
    )
}

fn sample_car() -> Vehicle {
    Vehicle {
        id: "megane-2025".to_string(),
        brand: "Renault".to_string(),
        model: "Megane".to_string(),
        year: 2025,
        price_per_day: 450.0,
        currency: "DH".to_string(),
        seats: 5,
        transmission: Transmission::Automatic,
        fuel: Fuel::Diesel,
        category: "berline".to_string(),
        quantity: 1,
        image: "/cars/megane.jpg".to_string(),
        gallery: vec!["/cars/megane.jpg".to_string()],
        features: vec!["GPS intégré".to_string(), "Bluetooth".to_string()],
        description: Descriptions {
            fr: "Confort et technologie avancée.".to_string(),
            en: "Comfort and advanced technology.".to_string(),
            ar: "الراحة والتكنولوجيا المتقدمة.".to_string(),
        },
    }
}

#[test]
fn every_page_renders_in_every_language() {
    let pages: &[(&str, fn() -> Html)] = &[
        ("home-page", || html! { <HomePage /> }),
        ("fleet-page", || html! { <FleetPage /> }),
        ("gallery-page", || html! { <GalleryPage /> }),
        ("booking-page", || html! { <BookingPage /> }),
        ("about-page", || html! { <AboutPage /> }),
        ("contact-page", || html! { <ContactPage /> }),
        ("terms-page", || html! { <TermsPage /> }),
        ("privacy-page", || html! { <PrivacyPage /> }),
        ("notfound-page", || html! { <NotFoundPage /> }),
    ];
    for code in ["fr", "en", "ar"] {
        atlasrent_web::i18n::set_lang(code);
        for (testid, page) in pages {
            let html = render(page());
            assert!(
                html.contains(testid),
                "{testid} failed to render for {code}"
            );
        }
    }
}

#[test]
fn fleet_page_renders_loading_then_filter_bar() {
    atlasrent_web::i18n::set_lang("fr");
    let html = render(html! { <FleetPage /> });
    assert!(html.contains("Chargement"));
    assert!(html.contains("Rechercher un véhicule"));
    assert!(html.contains("Tous les prix"));
}

#[test]
fn detail_page_renders_its_loading_state() {
    atlasrent_web::i18n::set_lang("en");
    let html = render(html! { <CarDetailPage id="megane-2025" /> });
    assert!(html.contains("Loading"));
    assert!(html.contains("Back"));
}

#[test]
fn car_card_localizes_enum_labels() {
    atlasrent_web::i18n::set_lang("fr");
    let html = render(html! { <CarCard car={sample_car()} /> });
    assert!(html.contains("Automatique"));
    assert!(html.contains("Diesel"));

    atlasrent_web::i18n::set_lang("ar");
    let html = render(html! { <CarCard car={sample_car()} /> });
    assert!(html.contains("أوتوماتيك"));
}

#[test]
fn booking_page_lists_the_handoff_steps() {
    atlasrent_web::i18n::set_lang("en");
    let html = render(html! { <BookingPage /> });
    assert!(html.contains("How to Book?"));
    assert!(html.contains("Fill the form below"));
    assert!(html.contains("Estimated Total") || html.contains("Select a car to continue"));
}
