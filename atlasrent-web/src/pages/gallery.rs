use atlasrent_core::site;
use yew::prelude::*;

use crate::i18n::t;
use crate::paths::asset_path;

#[function_component(GalleryPage)]
pub fn gallery_page() -> Html {
    let lightbox = use_state(|| None::<usize>);

    let close = {
        let lightbox = lightbox.clone();
        Callback::from(move |_| lightbox.set(None))
    };

    let overlay = (*lightbox).and_then(|index| site::GALLERY.get(index)).map(|image| {
        html! {
            <div class="lightbox" onclick={close.clone()} data-testid="gallery-lightbox">
                <button class="lightbox-close" aria-label={t("gallery.close")}>{ "✕" }</button>
                <img src={asset_path(image.src)} alt={image.alt} />
                <p>{ image.alt }</p>
            </div>
        }
    });

    html! {
        <div class="page gallery-page" data-testid="gallery-page">
            <section class="page-hero">
                <h1>{ t("gallery.title") }</h1>
                <p>{ t("gallery.subtitle") }</p>
            </section>
            <section class="gallery-grid">
                {
                    site::GALLERY.iter().enumerate().map(|(index, image)| {
                        let lightbox = lightbox.clone();
                        let onclick = Callback::from(move |_| lightbox.set(Some(index)));
                        html! {
                            <button class="gallery-tile" {onclick}>
                                <img src={asset_path(image.src)} alt={image.alt} loading="lazy" />
                                <span class="gallery-caption">{ image.alt }</span>
                            </button>
                        }
                    }).collect::<Html>()
                }
            </section>
            { overlay.unwrap_or_default() }
        </div>
    }
}
