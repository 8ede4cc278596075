use atlasrent_core::compose_inquiry;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::{fmt_number, t};
use crate::pages::{RemoteState, use_vehicle};
use crate::paths::image_url;
use crate::router::{BookingQuery, Route};
use crate::services::api::ApiError;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: String,
}

#[function_component(CarDetailPage)]
pub fn car_detail_page(p: &Props) -> Html {
    let state = use_vehicle(p.id.clone());
    let image_index = use_state(|| 0_usize);
    let navigator = use_navigator();

    let on_back = Callback::from(move |_| {
        if let Some(nav) = navigator.clone() {
            nav.back();
        }
    });

    let body = match &*state {
        RemoteState::Loading => html! {
            <p class="state-message" data-testid="detail-loading">{ t("common.loading") }</p>
        },
        RemoteState::Failed(err) => {
            let message = if *err == ApiError::NotFound {
                t("errors.vehicle_not_found")
            } else {
                t(err.message_key())
            };
            html! {
                <div class="detail-missing" data-testid="detail-error">
                    <h2>{ message }</h2>
                    <Link<Route> to={Route::Fleet} classes="btn btn-primary">
                        { t("detail.back_to_fleet") }
                    </Link<Route>>
                </div>
            }
        }
        RemoteState::Ready(car) => {
            let lang = crate::i18n::current();
            let gallery_len = car.gallery.len().max(1);
            let current = (*image_index).min(gallery_len - 1);
            let shown = car
                .gallery
                .get(current)
                .map_or(car.image.as_str(), String::as_str);

            let on_prev = {
                let image_index = image_index.clone();
                Callback::from(move |_| {
                    let next = if current == 0 { gallery_len - 1 } else { current - 1 };
                    image_index.set(next);
                })
            };
            let on_next = {
                let image_index = image_index.clone();
                Callback::from(move |_| {
                    let next = if current + 1 == gallery_len { 0 } else { current + 1 };
                    image_index.set(next);
                })
            };

            let on_whatsapp = {
                #[cfg(target_arch = "wasm32")]
                {
                    let car = car.clone();
                    Callback::from(move |_| {
                        let link = crate::services::whatsapp::deep_link(
                            atlasrent_core::site::WHATSAPP,
                            &compose_inquiry(&car, crate::i18n::current()),
                        );
                        if let Err(err) = crate::dom::open_in_new_tab(&link) {
                            crate::dom::console_error(&crate::dom::js_error_message(&err));
                        }
                    })
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    let _ = compose_inquiry(car, lang);
                    Callback::noop()
                }
            };

            let thumbnails = (car.gallery.len() > 1).then(|| {
                html! {
                    <div class="detail-thumbnails">
                        {
                            car.gallery.iter().enumerate().map(|(index, img)| {
                                let image_index = image_index.clone();
                                let onclick = Callback::from(move |_| image_index.set(index));
                                html! {
                                    <button
                                        class={classes!("thumbnail", (index == current).then_some("active"))}
                                        {onclick}
                                    >
                                        <img src={image_url(img)} alt={format!("{} {}", car.display_name(), index + 1)} />
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                }
            });

            let carousel_nav = (car.gallery.len() > 1).then(|| {
                html! {
                    <>
                        <button class="carousel-prev" onclick={on_prev} aria-label={t("detail.previous")}>{ "‹" }</button>
                        <button class="carousel-next" onclick={on_next} aria-label={t("detail.next")}>{ "›" }</button>
                    </>
                }
            });

            let quantity_badge = (car.quantity > 1).then(|| {
                html! {
                    <span class="badge">
                        { format!("{}x {}", car.quantity, t("fleet.available")) }
                    </span>
                }
            });

            html! {
                <div class="detail-layout" data-testid={format!("detail-{}", car.id)}>
                    <div class="detail-gallery">
                        <div class="detail-main-image">
                            <img src={image_url(shown)} alt={car.display_name()} />
                            { carousel_nav.unwrap_or_default() }
                            { quantity_badge.unwrap_or_default() }
                        </div>
                        { thumbnails.unwrap_or_default() }
                    </div>

                    <div class="detail-info">
                        <p class="car-brand">{ &car.brand }</p>
                        <h1>
                            { &car.model }
                            <span class="car-year">{ format!(" ({})", car.year) }</span>
                        </h1>
                        <p class="detail-description">{ car.description.for_lang(lang) }</p>

                        <div class="detail-price">
                            <strong>{ fmt_number(car.price_per_day) }</strong>
                            { format!(" {} {}", car.currency, t("fleet.price_per_day")) }
                            <p class="price-note">{ t("detail.price_note") }</p>
                        </div>

                        <h3>{ t("detail.specifications") }</h3>
                        <dl class="detail-specs">
                            <div><dt>{ t("detail.seats") }</dt><dd>{ car.seats }</dd></div>
                            <div><dt>{ t("detail.transmission") }</dt><dd>{ t(car.transmission.key()) }</dd></div>
                            <div><dt>{ t("detail.fuel") }</dt><dd>{ t(car.fuel.key()) }</dd></div>
                            <div><dt>{ t("detail.year") }</dt><dd>{ car.year }</dd></div>
                        </dl>

                        <h3>{ t("detail.features") }</h3>
                        <ul class="detail-features">
                            {
                                car.features.iter().map(|feature| html! {
                                    <li>{ feature }</li>
                                }).collect::<Html>()
                            }
                        </ul>

                        <div class="detail-actions">
                            <Link<Route, BookingQuery>
                                to={Route::Booking}
                                query={Some(BookingQuery::for_car(&car.id))}
                                classes="btn btn-primary"
                            >
                                { t("detail.book_now") }
                            </Link<Route, BookingQuery>>
                            <button class="btn btn-outline" onclick={on_whatsapp}>
                                { "WhatsApp" }
                            </button>
                        </div>
                    </div>
                </div>
            }
        }
    };

    html! {
        <div class="page detail-page">
            <button class="detail-back" onclick={on_back}>
                { t("detail.back") }
            </button>
            { body }
        </div>
    }
}
