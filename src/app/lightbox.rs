use leptos::{ev, prelude::*};

use crate::tracker::LightboxState;

#[component]
pub fn Lightbox(state: RwSignal<LightboxState>) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            state.update(|s| s.dismiss());
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <Show when=move || state.with(|s| s.is_open())>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/80 p-4"
                on:click=move |_| state.update(|s| s.dismiss())
            >
                <button
                    class="absolute top-4 right-4 text-white/80 hover:text-white text-2xl"
                    aria-label="Close"
                    on:click=move |_| state.update(|s| s.dismiss())
                >
                    "✕"
                </button>
                {move || {
                    state
                        .with(|s| s.image().cloned())
                        .map(|image| {
                            view! {
                                <figure class="max-w-[90vw]" on:click=|ev| ev.stop_propagation()>
                                    <img
                                        src=image.src
                                        alt=image.alt.clone()
                                        class="max-h-[90vh] w-full object-contain rounded-lg"
                                    />
                                    <figcaption class="mt-2 text-center text-sm text-gray-200">
                                        {image.alt}
                                    </figcaption>
                                </figure>
                            }
                        })
                }}
            </div>
        </Show>
    }
}
