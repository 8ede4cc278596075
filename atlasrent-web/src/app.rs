//! Application shell: router, chrome and the page switch.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Footer, Navbar, WhatsAppFab};
use crate::pages::{
    about::AboutPage,
    booking::BookingPage,
    car_detail::CarDetailPage,
    contact::ContactPage,
    fleet::FleetPage,
    gallery::GalleryPage,
    home::HomePage,
    not_found::NotFoundPage,
    privacy::PrivacyPage,
    terms::TermsPage,
};
use crate::router::Route;

#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppShell />
        </BrowserRouter>
    }
}

/// The language selection lives at the shell root: switching it re-renders
/// the whole tree against the freshly activated bundle.
#[function_component(AppShell)]
pub fn app_shell() -> Html {
    let current_lang = use_state(crate::i18n::current_lang);
    let on_lang_change = {
        let current_lang = current_lang.clone();
        Callback::from(move |code: String| current_lang.set(code))
    };

    html! {
        <>
            <Navbar current_lang={(*current_lang).clone()} {on_lang_change} />
            <main id="main">
                <Switch<Route> render={switch} />
            </main>
            <WhatsAppFab />
            <Footer />
        </>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Fleet => html! { <FleetPage /> },
        Route::CarDetail { id } => html! { <CarDetailPage {id} /> },
        Route::Gallery => html! { <GalleryPage /> },
        Route::Booking => html! { <BookingPage /> },
        Route::About => html! { <AboutPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::Terms => html! { <TermsPage /> },
        Route::Privacy => html! { <PrivacyPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
