use leptos::prelude::*;

use crate::sections::SectionMeta;

#[component]
pub fn TableOfContents(
    sections: Vec<SectionMeta>,
    #[prop(into)] active: Signal<Option<String>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <nav class=format!("pr-8 {class}")>
            <h3 class="text-xl font-serif font-semibold mb-5 text-gray-800 dark:text-gray-200">
                "On this page"
            </h3>
            <ul class="space-y-3">
                {sections
                    .into_iter()
                    .map(|section| {
                        let id = section.id.clone();
                        view! {
                            <li>
                                <a
                                    href=format!("#{}", section.id)
                                    class=move || {
                                        if active.with(|a| a.as_deref() == Some(id.as_str())) {
                                            "block font-semibold text-blue-700 dark:text-blue-400 transition-colors text-base"
                                        } else {
                                            "block text-gray-600 dark:text-gray-400 hover:text-blue-700 dark:hover:text-blue-400 transition-colors text-base"
                                        }
                                    }
                                >
                                    {section.title.clone()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

/// The same table of contents inside a slide-in drawer for small screens.
/// Open/close state is owned here, like the drawer primitive it replaces.
#[component]
pub fn MobileMenu(
    sections: Vec<SectionMeta>,
    #[prop(into)] active: Signal<Option<String>>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <button
            class="lg:hidden fixed top-4 left-4 z-50 p-2 w-10 h-10 rounded-md bg-white/80 dark:bg-gray-900/80 backdrop-blur-sm shadow text-xl"
            aria-label="Open menu"
            on:click=move |_| set_open(true)
        >
            "☰"
        </button>
        <Show when=move || open()>
            <div class="lg:hidden fixed inset-0 z-50">
                <div class="absolute inset-0 bg-black/50" on:click=move |_| set_open(false)></div>
                <div class="absolute left-0 top-0 h-full w-64 p-6 pt-16 bg-white dark:bg-gray-900 shadow-xl overflow-y-auto">
                    <button
                        class="absolute top-4 right-4 text-gray-500 hover:text-gray-800 dark:hover:text-gray-200"
                        aria-label="Close menu"
                        on:click=move |_| set_open(false)
                    >
                        "✕"
                    </button>
                    <TableOfContents sections=sections.clone() active=active class="w-full" />
                </div>
            </div>
        </Show>
    }
}
