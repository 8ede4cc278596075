//! Pages and their shared fetch lifecycle.

pub mod about;
pub mod booking;
pub mod car_detail;
pub mod contact;
pub mod fleet;
pub mod gallery;
pub mod home;
pub mod not_found;
pub mod privacy;
pub mod terms;

use atlasrent_core::Vehicle;
use yew::prelude::*;

use crate::services::FetchGuard;
use crate::services::api::ApiError;

/// View state of a backend fetch. Failures carry the [`ApiError`] so pages
/// can render the distinct not-found message.
#[derive(Clone, PartialEq)]
pub enum RemoteState<T> {
    Loading,
    Ready(T),
    Failed(ApiError),
}

/// Fetch the vehicle catalog once on mount, refetching on every page visit.
///
/// The fetch runs under a [`FetchGuard`] cancelled on teardown, so a slow
/// response is discarded instead of touching an unmounted view.
#[hook]
pub fn use_catalog() -> UseStateHandle<RemoteState<Vec<Vehicle>>> {
    let state = use_state(|| RemoteState::Loading);
    {
        let state = state.clone();
        use_effect_with((), move |()| {
            let guard = FetchGuard::new();
            #[cfg(target_arch = "wasm32")]
            {
                let state = state.clone();
                let guard = guard.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = crate::services::api::fetch_cars().await;
                    if !guard.is_live() {
                        return;
                    }
                    match result {
                        Ok(cars) => state.set(RemoteState::Ready(cars)),
                        Err(err) => {
                            log::error!("catalog fetch failed: {err}");
                            state.set(RemoteState::Failed(err));
                        }
                    }
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            let _ = &state;
            move || guard.cancel()
        });
    }
    state
}

/// Fetch a single vehicle, re-running when the id changes.
#[hook]
pub fn use_vehicle(id: String) -> UseStateHandle<RemoteState<Vehicle>> {
    let state = use_state(|| RemoteState::Loading);
    {
        let state = state.clone();
        use_effect_with(id, move |id| {
            let guard = FetchGuard::new();
            #[cfg(target_arch = "wasm32")]
            {
                let state = state.clone();
                let guard = guard.clone();
                let id = id.clone();
                state.set(RemoteState::Loading);
                wasm_bindgen_futures::spawn_local(async move {
                    let result = crate::services::api::fetch_car(&id).await;
                    if !guard.is_live() {
                        return;
                    }
                    match result {
                        Ok(car) => state.set(RemoteState::Ready(car)),
                        Err(err) => {
                            log::error!("vehicle fetch failed: {err}");
                            state.set(RemoteState::Failed(err));
                        }
                    }
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&state, id);
            }
            move || guard.cancel()
        });
    }
    state
}
