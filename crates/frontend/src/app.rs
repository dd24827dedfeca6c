use crate::domain::catalog::ui::state::CatalogContext;
use crate::domain::catalog::ui::CatalogPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the selection store to the whole app via context.
    provide_context(CatalogContext::new());

    view! {
        <CatalogPage />
    }
}
