use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::t;
use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="page notfound-page" data-testid="notfound-page">
            <h1>{ t("notfound.title") }</h1>
            <p>{ t("notfound.body") }</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                { t("notfound.home") }
            </Link<Route>>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::NotFoundPage;
    use crate::test_util::render;
    use yew::prelude::*;

    #[test]
    fn not_found_page_offers_a_way_home() {
        crate::i18n::set_lang("en");
        let html = render(html! { <NotFoundPage /> });
        assert!(html.contains("404"));
        assert!(html.contains("Home"));
    }
}
