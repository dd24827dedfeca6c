use crate::domain::catalog::ui::state::CatalogContext;
use crate::shared::icons::icon;
use crate::shared::plural::count_with_noun;
use contracts::domain::catalog::Catalog;
use leptos::prelude::*;

/// Корневой экран: витрина типов кровли.
#[component]
pub fn RoofingTypeList(catalog: &'static Catalog) -> impl IntoView {
    let ctx = use_context::<CatalogContext>().expect("CatalogContext context not found");

    view! {
        <div class="catalog-home">
            <div class="catalog-home__hero">
                <img
                    class="catalog-home__image"
                    src="/img/roofing-catalog.jpg"
                    alt="Каталог кровельных материалов"
                />
                <h1 class="catalog-home__title">"Каталог кровельных материалов"</h1>
                <p class="catalog-home__tagline">
                    "Профессиональный инструмент для менеджеров. Выберите тип кровли и найдите лучшие предложения."
                </p>
            </div>

            <div class="card-grid card-grid--types">
                {catalog.roofing_types.iter().map(|roofing_type| {
                    let type_id = roofing_type.id.as_str();
                    let materials_label = format!(
                        "{} материалов",
                        count_with_noun(
                            roofing_type.material_count(),
                            "категория",
                            "категории",
                            "категорий",
                        ),
                    );
                    view! {
                        <div class="card card--clickable" on:click=move |_| ctx.select_type(type_id)>
                            <div class="card__icon">{icon(&roofing_type.icon)}</div>
                            <h2 class="card__title">{roofing_type.name.as_str()}</h2>
                            <p class="card__description">{roofing_type.description.as_str()}</p>
                            <p class="card__meta">{materials_label}</p>
                            <div class="card__footer">
                                <span class="card__teaser">"Экономия до 15%"</span>
                                {icon("arrow-right")}
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
