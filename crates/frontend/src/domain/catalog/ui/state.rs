//! Реактивное хранилище выбора и его синхронизация с URL.
//!
//! Само состояние — чистый [`CatalogView`] из `contracts`; здесь только
//! обёртка в сигнал, логирование отклонённых переходов и зеркалирование
//! выбора в query string (`?type=..&material=..&product=..`).

use contracts::domain::catalog::{Catalog, CatalogView};
use leptos::logging::warn;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Выбор в query string. Отсутствующие уровни не сериализуются.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SelectionQuery {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
}

impl SelectionQuery {
    pub fn from_view(view: &CatalogView) -> Self {
        match view {
            CatalogView::Types => Self::default(),
            CatalogView::Materials { type_id } => Self {
                type_id: Some(type_id.clone()),
                ..Self::default()
            },
            CatalogView::Products {
                type_id,
                material_id,
            } => Self {
                type_id: Some(type_id.clone()),
                material: Some(material_id.clone()),
                product: None,
            },
            CatalogView::Detail {
                type_id,
                material_id,
                product_id,
            } => Self {
                type_id: Some(type_id.clone()),
                material: Some(material_id.clone()),
                product: Some(product_id.clone()),
            },
        }
    }

    /// Восстанавливает выбор, проигрывая переходы по порядку.
    ///
    /// Повреждённый query (неизвестный id, чужая ветка, пропуск уровня)
    /// деградирует до самого глубокого корректного префикса.
    pub fn restore(&self, catalog: &Catalog) -> CatalogView {
        let mut view = CatalogView::Types;
        let steps = [
            (&self.type_id, "type"),
            (&self.material, "material"),
            (&self.product, "product"),
        ];
        for (value, level) in steps {
            let Some(id) = value else {
                return view;
            };
            let result = match level {
                "type" => view.select_type(catalog, id),
                "material" => view.select_material(catalog, id),
                _ => view.select_product(catalog, id),
            };
            match result {
                Ok(next) => view = next,
                Err(e) => {
                    warn!("восстановление выбора из URL остановлено: {}", e);
                    return view;
                }
            }
        }
        view
    }
}

/// Глобальное хранилище выбора каталога.
#[derive(Clone, Copy)]
pub struct CatalogContext {
    pub view: RwSignal<CatalogView>,
}

impl CatalogContext {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(CatalogView::Types),
        }
    }

    pub fn select_type(&self, id: &str) {
        self.apply(|view, catalog| view.select_type(catalog, id));
    }

    pub fn select_material(&self, id: &str) {
        self.apply(|view, catalog| view.select_material(catalog, id));
    }

    pub fn select_product(&self, id: &str) {
        self.apply(|view, catalog| view.select_product(catalog, id));
    }

    /// Шаг назад: снимает один уровень выбора, в корне ничего не делает.
    pub fn back(&self) {
        let current = self.view.get_untracked();
        let next = current.back();
        if next != current {
            self.view.set(next);
        }
    }

    fn apply(&self, transition: impl FnOnce(&CatalogView, &Catalog) -> Result<CatalogView, String>) {
        let current = self.view.get_untracked();
        match transition(&current, Catalog::embedded()) {
            Ok(next) => self.view.set(next),
            Err(e) => warn!("переход отклонён: {}", e),
        }
    }

    /// Восстанавливает выбор из query string и дальше зеркалирует его в URL.
    /// Вызывается один раз при создании корневой страницы.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let query: SelectionQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        let restored = query.restore(Catalog::embedded());
        if restored != CatalogView::Types {
            self.view.set(restored);
        }

        let this = *self;
        Effect::new(move |_| {
            let query_string =
                serde_qs::to_string(&SelectionQuery::from_view(&this.view.get()))
                    .unwrap_or_default();
            let new_search = if query_string.is_empty() {
                String::new()
            } else {
                format!("?{}", query_string)
            };

            // Use untracked reads of the window to avoid reactive dependencies.
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_search {
                return;
            }

            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    // В корне query string пустой: заменяем URL на чистый путь.
                    let target = if new_search.is_empty() {
                        w.location().pathname().unwrap_or_else(|_| "/".to_string())
                    } else {
                        new_search.clone()
                    };
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&target),
                    );
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::catalog::Catalog;

    #[test]
    fn test_restore_full_path() {
        let catalog = Catalog::embedded();
        let query = SelectionQuery {
            type_id: Some("tile".to_string()),
            material: Some("ceramic-tiles".to_string()),
            product: Some("ceramic-classic".to_string()),
        };
        assert_eq!(
            query.restore(catalog),
            CatalogView::Detail {
                type_id: "tile".to_string(),
                material_id: "ceramic-tiles".to_string(),
                product_id: "ceramic-classic".to_string(),
            }
        );
    }

    #[test]
    fn test_restore_degrades_on_cross_branch_id() {
        let catalog = Catalog::embedded();
        // Материал из другой ветки: восстановление останавливается на типе.
        let query = SelectionQuery {
            type_id: Some("metal".to_string()),
            material: Some("ceramic-tiles".to_string()),
            product: None,
        };
        assert_eq!(
            query.restore(catalog),
            CatalogView::Materials {
                type_id: "metal".to_string(),
            }
        );
    }

    #[test]
    fn test_restore_ignores_level_skip() {
        let catalog = Catalog::embedded();
        // Товар без типа и материала: корень.
        let query = SelectionQuery {
            type_id: None,
            material: None,
            product: Some("ceramic-classic".to_string()),
        };
        assert_eq!(query.restore(catalog), CatalogView::Types);
    }

    #[test]
    fn test_query_round_trip() {
        let view = CatalogView::Products {
            type_id: "tile".to_string(),
            material_id: "mounting".to_string(),
        };
        let qs = serde_qs::to_string(&SelectionQuery::from_view(&view)).unwrap();
        let parsed: SelectionQuery = serde_qs::from_str(&qs).unwrap();
        assert_eq!(parsed.restore(Catalog::embedded()), view);
    }

    #[test]
    fn test_query_empty_at_root() {
        let qs = serde_qs::to_string(&SelectionQuery::from_view(&CatalogView::Types)).unwrap();
        assert!(qs.is_empty());
    }
}
