use atlasrent_core::site;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::{locales, set_lang, t};
use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_lang: String,
    pub on_lang_change: Callback<String>,
}

fn links() -> [(Route, &'static str); 5] {
    [
        (Route::Home, "nav.home"),
        (Route::Fleet, "nav.fleet"),
        (Route::Gallery, "nav.gallery"),
        (Route::About, "nav.about"),
        (Route::Contact, "nav.contact"),
    ]
}

#[function_component(Navbar)]
pub fn navbar(p: &Props) -> Html {
    let menu_open = use_state(|| false);

    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                set_lang(&sel.value());
                cb.emit(sel.value());
            }
        })
    };
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let nav_links = links()
        .into_iter()
        .map(|(route, key)| {
            html! {
                <Link<Route> to={route} classes="nav-link" >
                    <span onclick={close_menu.clone()}>{ t(key) }</span>
                </Link<Route>>
            }
        })
        .collect::<Html>();

    html! {
        <header role="banner" class="navbar">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="navbar-content">
                <Link<Route> to={Route::Home} classes="navbar-brand">
                    <span class="brand-name">{ site::NAME }</span>
                    <span class="brand-tagline">{ site::tagline(crate::i18n::current()) }</span>
                </Link<Route>>

                <nav class={classes!("navbar-links", menu_open.then_some("open"))} aria-label={t("nav.menu")}>
                    { nav_links }
                    <Link<Route> to={Route::Booking} classes="nav-link nav-cta">
                        <span onclick={close_menu}>{ t("nav.booking") }</span>
                    </Link<Route>>
                </nav>

                <div class="navbar-right">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select
                        id="lang-select"
                        onchange={on_change}
                        value={p.current_lang.clone()}
                        aria-label={t("nav.language")}
                    >
                        {
                            locales().iter().map(|meta| html! {
                                <option value={meta.code} selected={meta.code == p.current_lang}>
                                    { meta.name }
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                    <button
                        class="navbar-burger"
                        onclick={toggle_menu}
                        aria-label={t("nav.menu")}
                        aria-expanded={if *menu_open { "true" } else { "false" }}
                    >
                        { "☰" }
                    </button>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::Navbar;
    use crate::test_util::render;
    use yew::prelude::*;

    #[test]
    fn navbar_renders_brand_and_language_options() {
        crate::i18n::set_lang("en");
        let html = render(html! {
            <Navbar current_lang="en" on_lang_change={Callback::noop()} />
        });
        assert!(html.contains("ATLAS RENT"));
        assert!(html.contains("Français"));
        assert!(html.contains("العربية"));
    }
}
