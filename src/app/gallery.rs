use leptos::prelude::*;

use crate::sections::ImageItem;
use crate::tracker::LightboxState;

#[component]
pub fn ImageGallery(images: Vec<ImageItem>, lightbox: RwSignal<LightboxState>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
            {images
                .into_iter()
                .map(|image| {
                    let ImageItem { src, alt } = image.clone();
                    view! {
                        <div
                            class="relative group cursor-pointer overflow-hidden rounded-lg shadow-md hover:shadow-lg transition-shadow duration-300"
                            on:click=move |_| lightbox.update(|l| l.show(image.clone()))
                        >
                            <img
                                src=src
                                alt=alt.clone()
                                class="w-full h-48 object-cover group-hover:scale-105 transition-transform duration-300"
                            />
                            <div class="absolute inset-0 bg-black/20 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                                <span class="text-white text-lg font-semibold">{alt}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ProfileImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <div class=format!(
            "relative w-48 h-48 md:w-64 md:h-64 flex-shrink-0 rounded-full overflow-hidden shadow-lg border-4 border-white dark:border-gray-700 {class}",
        )>
            <img src=src alt=alt class="absolute inset-0 w-full h-full object-cover" />
        </div>
    }
}
