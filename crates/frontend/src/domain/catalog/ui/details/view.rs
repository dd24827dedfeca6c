use super::view_model::{comparison_rows, savings_badge};
use crate::domain::catalog::ui::state::CatalogContext;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::money::format_rub;
use contracts::domain::catalog::{Material, Product, RoofingType};
use leptos::prelude::*;

/// Карточка товара: описание и сравнение цен с конкурентами.
#[component]
pub fn ProductDetails(
    roofing_type: &'static RoofingType,
    material: &'static Material,
    product: &'static Product,
) -> impl IntoView {
    let ctx = use_context::<CatalogContext>().expect("CatalogContext context not found");
    let rows = comparison_rows(product);

    view! {
        <PageHeader
            title=product.name.as_str()
            subtitle=format!("{} → {}", roofing_type.name, material.name)
            on_back=Callback::new(move |_| ctx.back())
        />

        <div class="detail-grid">
            <div class="card">
                <h3 class="card__heading">"Описание товара"</h3>
                <p class="card__description">{product.description.as_str()}</p>
                {product.image.as_deref().map(|src| view! {
                    <img class="card__image" src=src alt=product.name.as_str() />
                })}
                <div class="detail-unit">
                    <span class="detail-unit__label">"Единица измерения:"</span>
                    <Badge variant="outline">{product.unit.as_str()}</Badge>
                </div>
            </div>

            <div class="card">
                <h3 class="card__heading card__heading--icon">
                    {icon("trending-down")}
                    "Сравнение цен"
                </h3>
                <div class="price-compare">
                    <div class="price-compare__ours">
                        <div>
                            <div class="price-compare__label">"Наша цена"</div>
                            <div class="price-compare__value">
                                {format_rub(product.our_price)}
                            </div>
                        </div>
                        <Badge variant="success">"Лучшая цена"</Badge>
                    </div>
                    <hr class="price-compare__separator" />
                    <h4 class="price-compare__heading">"Цены конкурентов"</h4>
                    {rows.into_iter().map(|row| view! {
                        <div class="price-compare__row">
                            <div>
                                <div class="price-compare__company">{row.company}</div>
                                <div class="price-compare__price">{format_rub(row.price)}</div>
                            </div>
                            <Badge variant="outline">{savings_badge(row.savings)}</Badge>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
