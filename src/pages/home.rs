use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1>"Welcome to the SPA App"</h1>
            <nav>
                <A href="/todos">"Go to Todos"</A>
                " | "
                <A href="/products">"View Products"</A>
            </nav>
        </section>
    }
}
