use serde::{Deserialize, Serialize};
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/fleet")]
    Fleet,
    #[at("/car/:id")]
    CarDetail { id: String },
    #[at("/gallery")]
    Gallery,
    #[at("/booking")]
    Booking,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[at("/404")]
    #[not_found]
    NotFound,
}

/// Query string of the booking page; carries the vehicle preselected from a
/// card or the detail page.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookingQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car: Option<String>,
}

impl BookingQuery {
    #[must_use]
    pub fn for_car(id: &str) -> Self {
        Self {
            car: Some(id.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BookingQuery, Route};
    use yew_router::Routable;

    #[test]
    fn paths_round_trip() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Fleet.to_path(), "/fleet");
        assert_eq!(
            Route::CarDetail {
                id: "q8-2024".to_string()
            }
            .to_path(),
            "/car/q8-2024"
        );
        assert_eq!(Route::recognize("/fleet"), Some(Route::Fleet));
        assert_eq!(
            Route::recognize("/car/q8-2024"),
            Some(Route::CarDetail {
                id: "q8-2024".to_string()
            })
        );
        assert_eq!(Route::recognize("/no/such/page"), Some(Route::NotFound));
    }

    #[test]
    fn booking_query_carries_the_preselection() {
        let query = BookingQuery::for_car("clio-5-2025");
        assert_eq!(query.car.as_deref(), Some("clio-5-2025"));
        assert_eq!(BookingQuery::default().car, None);
    }
}
