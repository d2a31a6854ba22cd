//! Products Page
//!
//! Fetches the product catalog once on mount. A failed request is logged
//! and leaves the page empty.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::use_config;
use crate::models::Product;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let config = use_config();
    let (products, set_products) = signal(Vec::<Product>::new());

    Effect::new(move |_| {
        let url = config.products_url.clone();
        spawn_local(async move {
            match api::fetch_products(&url).await {
                Ok(loaded) => {
                    log::debug!("[PRODUCTS] Loaded {} products", loaded.len());
                    set_products.set(loaded);
                }
                Err(e) => log::warn!("[PRODUCTS] {}", e),
            }
        });
    });

    view! {
        <section class="products-page">
            <h1>"Products"</h1>
            <For
                each=move || products.get()
                key=|product| product.id
                children=move |product| {
                    let price = product.price_label();
                    let Product { title, image, .. } = product;
                    view! {
                        <div class="product-card">
                            <h3>{title.clone()}</h3>
                            <img src=image alt=title width="100" />
                            <p>{price}</p>
                        </div>
                    }
                }
            />
        </section>
    }
}
