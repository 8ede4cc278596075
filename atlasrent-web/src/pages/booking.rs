use atlasrent_core::{BookingDraft, Vehicle, quote, site};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::{fmt_number, t, tr};
use crate::pages::{RemoteState, use_catalog};
use crate::paths::image_url;
use crate::router::BookingQuery;
use crate::services::submit::{self, BookingFlow};

/// Outcome of the last submission attempt, rendered inline above the form.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Feedback {
    None,
    Error(&'static str),
    Success,
}

fn text_input(
    draft: &UseStateHandle<BookingDraft>,
    apply: fn(&mut BookingDraft, String),
) -> Callback<InputEvent> {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        }
    })
}

fn date_input(
    draft: &UseStateHandle<BookingDraft>,
    apply: fn(&mut BookingDraft, Option<NaiveDate>),
) -> Callback<Event> {
    let draft = draft.clone();
    Callback::from(move |e: Event| {
        if let Some(input) = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            let parsed = NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d").ok();
            let mut next = (*draft).clone();
            apply(&mut next, parsed);
            draft.set(next);
        }
    })
}

fn date_value(date: Option<NaiveDate>) -> String {
    date.map_or_else(String::new, |d| d.format("%Y-%m-%d").to_string())
}

#[function_component(BookingPage)]
pub fn booking_page() -> Html {
    let catalog = use_catalog();
    let draft = use_state(BookingDraft::default);
    let feedback = use_state(|| Feedback::None);
    let busy = use_state(|| false);

    // Vehicle preselected through the navigation query, applied per change
    // so direct visits keep an empty selection.
    let preselected = use_location()
        .and_then(|location| location.query::<BookingQuery>().ok())
        .and_then(|query| query.car);
    {
        let draft = draft.clone();
        use_effect_with(preselected, move |preselected| {
            if let Some(id) = preselected {
                let mut next = (*draft).clone();
                next.car_id.clone_from(id);
                draft.set(next);
            }
        });
    }

    let cars: &[Vehicle] = match &*catalog {
        RemoteState::Ready(cars) => cars,
        RemoteState::Loading | RemoteState::Failed(_) => &[],
    };
    let selected = cars.iter().find(|car| car.id == draft.car_id);
    let current_quote = quote(
        draft.pickup_date,
        draft.return_date,
        selected.map_or(0.0, |car| car.price_per_day),
    );

    let on_full_name = text_input(&draft, |d, v| d.full_name = v);
    let on_phone = text_input(&draft, |d, v| d.phone = v);
    let on_email = text_input(&draft, |d, v| d.email = v);
    let on_location = text_input(&draft, |d, v| d.pickup_location = v);
    let on_pickup = date_input(&draft, |d, v| d.pickup_date = v);
    let on_return = date_input(&draft, |d, v| d.return_date = v);

    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
            {
                let mut next = (*draft).clone();
                next.message = area.value();
                draft.set(next);
            }
        })
    };
    let on_car_select = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                let mut next = (*draft).clone();
                next.car_id = sel.value();
                draft.set(next);
            }
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let catalog = catalog.clone();
        let feedback = feedback.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let cars: &[Vehicle] = match &*catalog {
                RemoteState::Ready(cars) => cars,
                RemoteState::Loading | RemoteState::Failed(_) => &[],
            };
            let selected = cars.iter().find(|car| car.id == draft.car_id);
            let q = quote(
                draft.pickup_date,
                draft.return_date,
                selected.map_or(0.0, |car| car.price_per_day),
            );
            match BookingFlow::active() {
                BookingFlow::Messaging => {
                    match submit::messaging_handoff(
                        selected,
                        &draft,
                        &q,
                        crate::i18n::current(),
                    ) {
                        Ok(link) => {
                            feedback.set(Feedback::None);
                            #[cfg(target_arch = "wasm32")]
                            if let Err(err) = crate::dom::open_in_new_tab(&link) {
                                crate::dom::console_error(&crate::dom::js_error_message(&err));
                            }
                            #[cfg(not(target_arch = "wasm32"))]
                            let _ = link;
                        }
                        Err(err) => feedback.set(Feedback::Error(err.message_key())),
                    }
                }
                BookingFlow::Backend => {
                    if let Err(err) = draft.validate() {
                        feedback.set(Feedback::Error(err.message_key()));
                        return;
                    }
                    #[cfg(not(target_arch = "wasm32"))]
                    let _ = &busy;
                    #[cfg(target_arch = "wasm32")]
                    {
                        let draft_value = (*draft).clone();
                        let feedback = feedback.clone();
                        let busy = busy.clone();
                        busy.set(true);
                        wasm_bindgen_futures::spawn_local(async move {
                            let result = submit::backend_submit(&draft_value).await;
                            busy.set(false);
                            match result {
                                Ok(_) => feedback.set(Feedback::Success),
                                Err(err) => {
                                    log::error!("booking submission failed: {err}");
                                    feedback.set(Feedback::Error(err.message_key()));
                                }
                            }
                        });
                    }
                }
            }
        })
    };

    let feedback_line = match *feedback {
        Feedback::None => Html::default(),
        Feedback::Error(key) => html! {
            <p class="form-feedback form-error" data-testid="booking-feedback">{ t(key) }</p>
        },
        Feedback::Success => html! {
            <p class="form-feedback form-success" data-testid="booking-feedback">
                { t("booking.success") }
            </p>
        },
    };

    let submit_label = match BookingFlow::active() {
        BookingFlow::Messaging => t("booking.form.whatsapp"),
        BookingFlow::Backend => t("booking.form.submit"),
    };

    let summary = selected.map_or_else(
        || {
            html! {
                <p class="summary-empty">{ t("booking.select_prompt") }</p>
            }
        },
        |car| {
            let duration_line = current_quote.is_available().then(|| {
                let days = current_quote.days.to_string();
                let mut args = BTreeMap::new();
                args.insert("count", days.as_str());
                html! {
                    <>
                        <div class="summary-row">
                            <span>{ t("booking.duration") }</span>
                            <span>{ tr("booking.days", Some(&args)) }</span>
                        </div>
                        <div class="summary-row summary-total">
                            <span>{ t("booking.total") }</span>
                            <span>{ format!("{} {}", fmt_number(current_quote.total), car.currency) }</span>
                        </div>
                    </>
                }
            });
            html! {
                <div class="summary-card" data-testid="booking-summary">
                    <img src={image_url(&car.image)} alt={car.display_name()} />
                    <h4>{ format!("{} {}", car.brand, car.model) }</h4>
                    <p class="car-year">{ car.year }</p>
                    <div class="summary-row">
                        <span>{ t("booking.price_per_day") }</span>
                        <span>{ format!("{} {}", fmt_number(car.price_per_day), car.currency) }</span>
                    </div>
                    { duration_line.unwrap_or_default() }
                </div>
            }
        },
    );

    html! {
        <div class="page booking-page" data-testid="booking-page">
            <section class="page-hero">
                <h1>{ t("booking.title") }</h1>
                <p>{ t("booking.subtitle") }</p>
            </section>

            <section class="booking-howto">
                <h3>{ t("booking.how_title") }</h3>
                <ol>
                    <li>{ t("booking.how_step1") }</li>
                    <li>{ t("booking.how_step2") }</li>
                    <li>{ t("booking.how_step3") }</li>
                    <li>{ t("booking.how_step4") }</li>
                </ol>
            </section>

            <section class="booking-layout">
                <form class="booking-form" onsubmit={on_submit}>
                    { feedback_line }

                    <label for="full-name">{ t("booking.form.full_name") }{ " *" }</label>
                    <input
                        id="full-name"
                        type="text"
                        value={draft.full_name.clone()}
                        oninput={on_full_name}
                        placeholder={t("booking.form.full_name_placeholder")}
                    />

                    <label for="phone">{ t("booking.form.phone") }{ " *" }</label>
                    <input
                        id="phone"
                        type="tel"
                        value={draft.phone.clone()}
                        oninput={on_phone}
                        placeholder="+212..."
                    />

                    <label for="email">{ t("booking.form.email") }</label>
                    <input
                        id="email"
                        type="email"
                        value={draft.email.clone()}
                        oninput={on_email}
                        placeholder={t("booking.form.email_placeholder")}
                    />

                    <label for="car-select">{ t("booking.form.vehicle") }{ " *" }</label>
                    <select id="car-select" onchange={on_car_select} value={draft.car_id.clone()}>
                        <option value="" selected={draft.car_id.is_empty()}>
                            { t("booking.form.vehicle_placeholder") }
                        </option>
                        {
                            cars.iter().map(|car| html! {
                                <option value={car.id.clone()} selected={car.id == draft.car_id}>
                                    { car.display_name() }
                                </option>
                            }).collect::<Html>()
                        }
                    </select>

                    <label for="pickup-date">{ t("booking.form.pickup_date") }{ " *" }</label>
                    <input
                        id="pickup-date"
                        type="date"
                        value={date_value(draft.pickup_date)}
                        onchange={on_pickup}
                    />

                    <label for="return-date">{ t("booking.form.return_date") }{ " *" }</label>
                    <input
                        id="return-date"
                        type="date"
                        value={date_value(draft.return_date)}
                        onchange={on_return}
                    />

                    <label for="pickup-location">{ t("booking.form.pickup_location") }</label>
                    <input
                        id="pickup-location"
                        type="text"
                        value={draft.pickup_location.clone()}
                        oninput={on_location}
                        placeholder={t("booking.form.pickup_location")}
                    />

                    <label for="message">{ t("booking.form.message") }</label>
                    <textarea
                        id="message"
                        rows="3"
                        value={draft.message.clone()}
                        oninput={on_message}
                        placeholder={t("booking.form.message_placeholder")}
                    />

                    <button type="submit" class="btn btn-primary btn-submit" disabled={*busy}>
                        { submit_label }
                    </button>

                    <p class="booking-or">{ t("booking.or_contact") }</p>
                    <div class="booking-contacts">
                        <a href={format!("tel:{}", site::PHONE)}>{ site::PHONE }</a>
                        <a href={format!("mailto:{}", site::EMAIL)}>{ site::EMAIL }</a>
                    </div>
                </form>

                <aside class="booking-summary">
                    <h3>{ t("booking.summary") }</h3>
                    { summary }
                </aside>
            </section>
        </div>
    }
}
