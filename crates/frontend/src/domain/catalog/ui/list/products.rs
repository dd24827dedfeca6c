use crate::domain::catalog::ui::state::CatalogContext;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::money::format_rub;
use contracts::domain::catalog::{Material, RoofingType};
use leptos::prelude::*;

/// Экран выбранного материала: список товаров с ценами конкурентов.
#[component]
pub fn ProductList(
    roofing_type: &'static RoofingType,
    material: &'static Material,
) -> impl IntoView {
    let ctx = use_context::<CatalogContext>().expect("CatalogContext context not found");

    view! {
        <PageHeader
            title=material.name.as_str()
            subtitle=format!("{} → {}", roofing_type.name, material.category)
            on_back=Callback::new(move |_| ctx.back())
        />

        <div class="card-grid">
            {material.products.iter().map(|product| {
                let product_id = product.id.as_str();
                view! {
                    <div
                        class="card card--clickable"
                        on:click=move |_| ctx.select_product(product_id)
                    >
                        <h2 class="card__title">{product.name.as_str()}</h2>
                        <p class="card__description">{product.description.as_str()}</p>
                        <div class="card__price-row">
                            <span class="card__price card__price--accent">
                                {format_rub(product.our_price)}
                            </span>
                            <Badge variant="outline">{product.unit.as_str()}</Badge>
                        </div>
                        {(!product.competitor_prices.is_empty()).then(|| view! {
                            <div class="card__competitors">
                                <p class="card__competitors-label">"Конкуренты:"</p>
                                {product.competitor_prices.iter().map(|competitor| view! {
                                    <div class="card__competitor">
                                        <span>{competitor.company.as_str()}</span>
                                        <s class="card__competitor-price">
                                            {format_rub(competitor.price)}
                                        </s>
                                    </div>
                                }).collect_view()}
                            </div>
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
