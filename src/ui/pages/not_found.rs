//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="not-found">
            <h1>"404"</h1>
            <h2>"Página não encontrada"</h2>
            <p>"O endereço que você procurou não existe ou foi movido."</p>
            <A href="/" attr:class="btn btn-primary">"Voltar ao início"</A>
        </main>
    }
}
