//! Представления каталога: диспетчеризация по состоянию навигации.

pub mod details;
pub mod list;
pub mod state;

use self::details::ProductDetails;
use self::list::{MaterialList, ProductList, RoofingTypeList};
use self::state::CatalogContext;
use contracts::domain::catalog::{Catalog, CatalogView};
use leptos::logging::warn;
use leptos::prelude::*;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let ctx = use_context::<CatalogContext>().expect("CatalogContext context not found");

    // Restore the selection from the URL once, then mirror it back.
    ctx.init_router_integration();

    let catalog = Catalog::embedded();

    view! {
        <div class="catalog">
            {move || render_view(catalog, ctx.view.get())}
        </div>
    }
}

/// Разворачивает состояние выбора в конкретный экран.
///
/// Ссылка, не разрешившаяся в узел дерева (возможно только при рассинхроне
/// URL и данных), деградирует к ближайшему корректному родителю вместо
/// падения рендера.
fn render_view(catalog: &'static Catalog, view: CatalogView) -> AnyView {
    match view {
        CatalogView::Types => view! { <RoofingTypeList catalog=catalog /> }.into_any(),
        CatalogView::Materials { type_id } => {
            let Some(roofing_type) = catalog.roofing_type(&type_id) else {
                warn!("тип '{}' не найден, возврат к списку типов", type_id);
                return view! { <RoofingTypeList catalog=catalog /> }.into_any();
            };
            view! { <MaterialList roofing_type=roofing_type /> }.into_any()
        }
        CatalogView::Products {
            type_id,
            material_id,
        } => {
            let Some(roofing_type) = catalog.roofing_type(&type_id) else {
                warn!("тип '{}' не найден, возврат к списку типов", type_id);
                return view! { <RoofingTypeList catalog=catalog /> }.into_any();
            };
            let Some(material) = roofing_type.material(&material_id) else {
                warn!("материал '{}' не найден, возврат к материалам", material_id);
                return view! { <MaterialList roofing_type=roofing_type /> }.into_any();
            };
            view! { <ProductList roofing_type=roofing_type material=material /> }.into_any()
        }
        CatalogView::Detail {
            type_id,
            material_id,
            product_id,
        } => {
            let Some(roofing_type) = catalog.roofing_type(&type_id) else {
                warn!("тип '{}' не найден, возврат к списку типов", type_id);
                return view! { <RoofingTypeList catalog=catalog /> }.into_any();
            };
            let Some(material) = roofing_type.material(&material_id) else {
                warn!("материал '{}' не найден, возврат к материалам", material_id);
                return view! { <MaterialList roofing_type=roofing_type /> }.into_any();
            };
            let Some(product) = material.product(&product_id) else {
                warn!("товар '{}' не найден, возврат к товарам", product_id);
                return view! { <ProductList roofing_type=roofing_type material=material /> }
                    .into_any();
            };
            view! {
                <ProductDetails roofing_type=roofing_type material=material product=product />
            }
            .into_any()
        }
    }
}
