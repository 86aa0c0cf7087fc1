mod biography;
mod gallery;
mod home;
mod lightbox;
mod logo;
mod nav;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use biography::BiographyPage;
use home::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/biography-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-gray-50 dark:bg-gray-950 text-gray-900 dark:text-gray-100">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Ng Qi Heng - {title}") />

        <Router>
            <main class="min-h-screen w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/biography") view=BiographyPage />
                </Routes>
            </main>
        </Router>
    }
}
