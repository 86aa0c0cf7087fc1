use chrono::DateTime;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::gallery::ProfileImage;
use super::logo::Logo;

#[component]
pub fn HomePage() -> impl IntoView {
    let built = DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|d| d.format("%b %e, %Y").to_string())
        .unwrap_or_default();

    view! {
        <Title text="Welcome" />
        <div class="min-h-screen flex flex-col items-center justify-center p-4">
            <div class="text-center p-8 bg-white dark:bg-gray-800 rounded-xl shadow-xl max-w-2xl">
                <Logo class="mb-6" />
                <ProfileImage
                    src="https://picsum.photos/id/64/400/400"
                    alt="Portrait of Ng Qi Heng"
                    class="mx-auto mb-8"
                />
                <h1 class="text-5xl font-bold mb-4 text-gray-800 dark:text-gray-100 leading-tight">
                    "Welcome to a Journey of Life"
                </h1>
                <p class="text-xl text-gray-600 dark:text-gray-300 mb-8">
                    "Delve into the profound narrative of a remarkable individual's existence."
                </p>
                <A
                    href="/biography"
                    attr:class="inline-block px-10 py-5 text-lg font-semibold tracking-wide text-white rounded-md bg-blue-700 hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700 transition-colors duration-200"
                >
                    "Explore Biography"
                </A>
            </div>
            <footer class="mt-8 text-sm text-gray-500 dark:text-gray-400">
                {format!("Last updated {built}")}
            </footer>
        </div>
    }
}
