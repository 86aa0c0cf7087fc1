use leptos::prelude::*;

#[component]
pub fn Logo(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <div class=format!("flex items-center justify-center {class}")>
            <img src="/logo.svg" alt="NQH Logo" class="h-16 w-auto sm:h-20" />
        </div>
    }
}
