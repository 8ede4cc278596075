use atlasrent_core::{CategoryFilter, FilterCriteria, PriceBand, TransmissionFilter};
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::CarCard;
use crate::i18n::{t, tr};
use crate::pages::{RemoteState, use_catalog};

/// Category tags the backend uses today. The filter falls back to "all" for
/// anything it does not recognize, so a new tag degrades gracefully.
const CATEGORIES: &[&str] = &["compact", "berline", "suv", "suv-compact", "suv-premium"];

fn select_value(e: &Event) -> Option<String> {
    e.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        .map(|sel| sel.value())
}

#[function_component(FleetPage)]
pub fn fleet_page() -> Html {
    let catalog = use_catalog();
    let criteria = use_state(FilterCriteria::default);
    let filters_open = use_state(|| false);

    let on_search = {
        let criteria = criteria.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                criteria.set(FilterCriteria {
                    search: input.value(),
                    ..(*criteria).clone()
                });
            }
        })
    };
    let on_category = {
        let criteria = criteria.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = select_value(&e) {
                criteria.set(FilterCriteria {
                    category: CategoryFilter::parse(&value),
                    ..(*criteria).clone()
                });
            }
        })
    };
    let on_price = {
        let criteria = criteria.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = select_value(&e) {
                criteria.set(FilterCriteria {
                    price: PriceBand::parse(&value),
                    ..(*criteria).clone()
                });
            }
        })
    };
    let on_transmission = {
        let criteria = criteria.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = select_value(&e) {
                criteria.set(FilterCriteria {
                    transmission: TransmissionFilter::parse(&value),
                    ..(*criteria).clone()
                });
            }
        })
    };
    let on_clear = {
        let criteria = criteria.clone();
        Callback::from(move |_| criteria.set(FilterCriteria::default()))
    };
    let toggle_filters = {
        let filters_open = filters_open.clone();
        Callback::from(move |_| filters_open.set(!*filters_open))
    };

    let filter_bar = html! {
        <section class="fleet-filters">
            <div class="filter-search">
                <input
                    type="text"
                    placeholder={t("fleet.search_placeholder")}
                    value={criteria.search.clone()}
                    oninput={on_search}
                    aria-label={t("fleet.search_placeholder")}
                />
            </div>
            <button class="filter-toggle" onclick={toggle_filters}>
                { t("fleet.filter") }
            </button>
            <div class={classes!("filter-selects", filters_open.then_some("open"))}>
                <select onchange={on_category} value={criteria.category.value().to_string()} aria-label={t("fleet.category_label")}>
                    <option value="all" selected={criteria.category == CategoryFilter::All}>
                        { t("fleet.all") }
                    </option>
                    {
                        CATEGORIES.iter().map(|tag| html! {
                            <option value={*tag} selected={criteria.category.value() == *tag}>
                                { t(&format!("fleet.categories.{tag}")) }
                            </option>
                        }).collect::<Html>()
                    }
                </select>
                <select onchange={on_price} value={criteria.price.value()} aria-label={t("fleet.price_label")}>
                    {
                        PriceBand::ALL_BANDS.into_iter().map(|band| {
                            let label = if band == PriceBand::All {
                                t("fleet.all_prices")
                            } else {
                                band.label().to_string()
                            };
                            html! {
                                <option value={band.value()} selected={criteria.price == band}>
                                    { label }
                                </option>
                            }
                        }).collect::<Html>()
                    }
                </select>
                <select onchange={on_transmission} value={criteria.transmission.value()} aria-label={t("fleet.transmission_label")}>
                    <option value="all" selected={criteria.transmission == TransmissionFilter::All}>
                        { t("fleet.all") }
                    </option>
                    <option value="auto" selected={criteria.transmission.value() == "auto"}>
                        { t("specs.transmission.auto") }
                    </option>
                    <option value="manual" selected={criteria.transmission.value() == "manual"}>
                        { t("specs.transmission.manual") }
                    </option>
                </select>
                {
                    if criteria.is_default() {
                        Html::default()
                    } else {
                        html! {
                            <button class="filter-clear" onclick={on_clear.clone()}>
                                { t("fleet.clear") }
                            </button>
                        }
                    }
                }
            </div>
        </section>
    };

    let results = match &*catalog {
        RemoteState::Loading => html! {
            <p class="state-message" data-testid="fleet-loading">{ t("common.loading") }</p>
        },
        RemoteState::Failed(err) => html! {
            <p class="state-message state-error" data-testid="fleet-error">{ t(err.message_key()) }</p>
        },
        RemoteState::Ready(cars) => {
            let filtered = criteria.apply(cars);
            let count = filtered.len().to_string();
            let mut args = BTreeMap::new();
            args.insert("count", count.as_str());
            let count_line = tr("fleet.results_count", Some(&args));
            if filtered.is_empty() {
                html! {
                    <div class="fleet-empty">
                        <p>{ t("fleet.no_results") }</p>
                        <button class="btn btn-primary" onclick={on_clear}>
                            { t("fleet.reset_filters") }
                        </button>
                    </div>
                }
            } else {
                html! {
                    <>
                        <p class="fleet-count">{ count_line }</p>
                        <div class="fleet-grid">
                            {
                                filtered.into_iter().map(|car| {
                                    let key = car.id.clone();
                                    html! { <CarCard {key} {car} /> }
                                }).collect::<Html>()
                            }
                        </div>
                    </>
                }
            }
        }
    };

    html! {
        <div class="page fleet-page" data-testid="fleet-page">
            <section class="page-hero">
                <h1>{ t("fleet.title") }</h1>
                <p>{ t("fleet.subtitle") }</p>
            </section>
            { filter_bar }
            <section class="fleet-results">
                { results }
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::FleetPage;
    use crate::test_util::render;
    use yew::prelude::*;

    #[test]
    fn fleet_page_renders_loading_state_before_data() {
        crate::i18n::set_lang("en");
        let html = render(html! { <FleetPage /> });
        assert!(html.contains("Our Cars"));
        assert!(html.contains("Loading"));
    }
}
