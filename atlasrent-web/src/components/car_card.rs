use atlasrent_core::Vehicle;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::{fmt_number, t};
use crate::paths::image_url;
use crate::router::{BookingQuery, Route};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub car: Vehicle,
}

#[function_component(CarCard)]
pub fn car_card(p: &Props) -> Html {
    let car = &p.car;
    let detail = Route::CarDetail { id: car.id.clone() };
    let quantity_badge = (car.quantity > 1).then(|| {
        html! {
            <span class="badge">
                { format!("{}x {}", car.quantity, t("fleet.available")) }
            </span>
        }
    });

    html! {
        <article class="car-card" data-testid={format!("car-card-{}", car.id)}>
            <div class="car-card-media">
                <img src={image_url(&car.image)} alt={car.display_name()} loading="lazy" />
                { quantity_badge.unwrap_or_default() }
            </div>
            <div class="car-card-body">
                <p class="car-brand">{ &car.brand }</p>
                <h3 class="car-model">
                    { &car.model }
                    <span class="car-year">{ format!(" ({})", car.year) }</span>
                </h3>
                <p class="car-price">
                    <strong>{ fmt_number(car.price_per_day) }</strong>
                    { format!(" {} {}", car.currency, t("fleet.price_per_day")) }
                </p>
                <ul class="car-specs">
                    <li>{ format!("{} {}", car.seats, t("fleet.seats")) }</li>
                    <li>{ t(car.transmission.key()) }</li>
                    <li>{ t(car.fuel.key()) }</li>
                </ul>
                <div class="car-card-actions">
                    <Link<Route> to={detail} classes="btn btn-outline">
                        { t("fleet.details") }
                    </Link<Route>>
                    <Link<Route, BookingQuery>
                        to={Route::Booking}
                        query={Some(BookingQuery::for_car(&car.id))}
                        classes="btn btn-primary"
                    >
                        { t("fleet.book") }
                    </Link<Route, BookingQuery>>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::CarCard;
    use crate::test_util::render;
    use atlasrent_core::{Descriptions, Fuel, Transmission, Vehicle};
    use yew::prelude::*;

    fn car() -> Vehicle {
        Vehicle {
            id: "accent-2025".to_string(),
            brand: "Hyundai".to_string(),
            model: "Accent".to_string(),
            year: 2025,
            price_per_day: 350.0,
            currency: "DH".to_string(),
            seats: 5,
            transmission: Transmission::Automatic,
            fuel: Fuel::Petrol,
            category: "berline".to_string(),
            quantity: 4,
            image: "/cars/accent.jpg".to_string(),
            gallery: vec!["/cars/accent.jpg".to_string()],
            features: vec!["Bluetooth".to_string()],
            description: Descriptions::default(),
        }
    }

    #[test]
    fn card_shows_identity_price_and_quantity() {
        crate::i18n::set_lang("en");
        let html = render(html! { <CarCard car={car()} /> });
        assert!(html.contains("Hyundai"));
        assert!(html.contains("Accent"));
        assert!(html.contains("350"));
        assert!(html.contains("4x"));
        assert!(html.contains("Automatic"));
    }
}
