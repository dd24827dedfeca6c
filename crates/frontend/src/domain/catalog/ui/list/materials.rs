use crate::domain::catalog::ui::state::CatalogContext;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::money::format_rub;
use crate::shared::plural::count_with_noun;
use contracts::domain::catalog::RoofingType;
use leptos::prelude::*;

/// Экран выбранного типа кровли: список материалов.
#[component]
pub fn MaterialList(roofing_type: &'static RoofingType) -> impl IntoView {
    let ctx = use_context::<CatalogContext>().expect("CatalogContext context not found");

    view! {
        <PageHeader
            title=roofing_type.name.as_str()
            subtitle=roofing_type.description.to_string()
            on_back=Callback::new(move |_| ctx.back())
        />

        <div class="card-grid">
            {roofing_type.materials.iter().map(|material| {
                let material_id = material.id.as_str();
                view! {
                    <div
                        class="card card--clickable"
                        on:click=move |_| ctx.select_material(material_id)
                    >
                        <div class="card__header">
                            {icon("package")}
                            <h2 class="card__title">{material.name.as_str()}</h2>
                        </div>
                        <Badge variant="outline">{material.category.as_str()}</Badge>
                        <p class="card__meta">
                            {count_with_noun(material.product_count(), "товар", "товара", "товаров")}
                        </p>
                        {material.min_our_price().map(|min_price| view! {
                            <div class="card__price-from">
                                <span class="card__price-from-label">"Цены от:"</span>
                                <span class="card__price">{format_rub(min_price)}</span>
                            </div>
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
