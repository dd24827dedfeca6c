//! Машина состояний трёхуровневой навигации по каталогу.
//!
//! Выбор представлен одним tagged-вариантом вместо трёх nullable-полей:
//! недопустимые комбинации («товар выбран, а тип — нет») невозможны по
//! построению. Каждый вариант несёт только ссылки, допустимые на его глубине.

use super::aggregate::Catalog;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogView {
    /// Корень: список типов кровли.
    Types,
    /// Выбран тип: список материалов.
    Materials { type_id: String },
    /// Выбран материал: список товаров.
    Products { type_id: String, material_id: String },
    /// Выбран товар: карточка со сравнением цен.
    Detail {
        type_id: String,
        material_id: String,
        product_id: String,
    },
}

impl Default for CatalogView {
    fn default() -> Self {
        CatalogView::Types
    }
}

impl CatalogView {
    /// Глубина выбора: 0 — корень, 3 — карточка товара.
    pub fn depth(&self) -> u8 {
        match self {
            CatalogView::Types => 0,
            CatalogView::Materials { .. } => 1,
            CatalogView::Products { .. } => 2,
            CatalogView::Detail { .. } => 3,
        }
    }

    /// Переход к списку материалов. Допустим только из корня.
    pub fn select_type(&self, catalog: &Catalog, id: &str) -> Result<CatalogView, String> {
        if !matches!(self, CatalogView::Types) {
            return Err(format!(
                "select_type: допустим только из корня, текущая глубина {}",
                self.depth()
            ));
        }
        if catalog.roofing_type(id).is_none() {
            return Err(format!("select_type: неизвестный тип кровли '{}'", id));
        }
        Ok(CatalogView::Materials {
            type_id: id.to_string(),
        })
    }

    /// Переход к списку товаров. Материал обязан принадлежать выбранному типу.
    pub fn select_material(&self, catalog: &Catalog, id: &str) -> Result<CatalogView, String> {
        let CatalogView::Materials { type_id } = self else {
            return Err(format!(
                "select_material: допустим только из списка материалов, текущая глубина {}",
                self.depth()
            ));
        };
        let Some(roofing_type) = catalog.roofing_type(type_id) else {
            return Err(format!(
                "select_material: тип '{}' отсутствует в каталоге",
                type_id
            ));
        };
        if roofing_type.material(id).is_none() {
            return Err(format!(
                "select_material: материал '{}' не принадлежит типу '{}'",
                id, type_id
            ));
        }
        Ok(CatalogView::Products {
            type_id: type_id.clone(),
            material_id: id.to_string(),
        })
    }

    /// Переход к карточке товара. Товар обязан принадлежать выбранному материалу.
    pub fn select_product(&self, catalog: &Catalog, id: &str) -> Result<CatalogView, String> {
        let CatalogView::Products {
            type_id,
            material_id,
        } = self
        else {
            return Err(format!(
                "select_product: допустим только из списка товаров, текущая глубина {}",
                self.depth()
            ));
        };
        let Some(material) = catalog
            .roofing_type(type_id)
            .and_then(|t| t.material(material_id))
        else {
            return Err(format!(
                "select_product: материал '{}' отсутствует в каталоге",
                material_id
            ));
        };
        if material.product(id).is_none() {
            return Err(format!(
                "select_product: товар '{}' не принадлежит материалу '{}'",
                id, material_id
            ));
        }
        Ok(CatalogView::Detail {
            type_id: type_id.clone(),
            material_id: material_id.clone(),
            product_id: id.to_string(),
        })
    }

    /// Снимает ровно один уровень выбора; в корне не изменяет состояние.
    pub fn back(&self) -> CatalogView {
        match self {
            CatalogView::Types => CatalogView::Types,
            CatalogView::Materials { .. } => CatalogView::Types,
            CatalogView::Products { type_id, .. } => CatalogView::Materials {
                type_id: type_id.clone(),
            },
            CatalogView::Detail {
                type_id,
                material_id,
                ..
            } => CatalogView::Products {
                type_id: type_id.clone(),
                material_id: material_id.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{CompetitorPrice, Material, Product, RoofingType};

    fn fixture() -> Catalog {
        let product = |id: &str, price: f64| Product {
            id: id.to_string(),
            name: format!("Товар {}", id),
            description: String::new(),
            our_price: price,
            competitor_prices: vec![CompetitorPrice {
                company: "Конкурент А".to_string(),
                price: price + 30.0,
            }],
            unit: "м²".to_string(),
            image: None,
        };
        Catalog {
            roofing_types: vec![
                RoofingType {
                    id: "tile".to_string(),
                    name: "Черепичная кровля".to_string(),
                    icon: "home".to_string(),
                    description: String::new(),
                    materials: vec![
                        Material {
                            id: "ceramic".to_string(),
                            name: "Керамическая черепица".to_string(),
                            category: "Покрытие".to_string(),
                            products: vec![product("classic", 1200.0)],
                        },
                        Material {
                            id: "mounting".to_string(),
                            name: "Крепеж".to_string(),
                            category: "Монтаж".to_string(),
                            products: vec![product("hooks", 45.0)],
                        },
                    ],
                },
                RoofingType {
                    id: "metal".to_string(),
                    name: "Металлочерепица".to_string(),
                    icon: "layers".to_string(),
                    description: String::new(),
                    materials: vec![Material {
                        id: "sheets".to_string(),
                        name: "Листы".to_string(),
                        category: "Покрытие".to_string(),
                        products: vec![product("monterrey", 580.0)],
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_round_trip_returns_to_root() {
        let catalog = fixture();
        let view = CatalogView::Types;

        let view = view.select_type(&catalog, "tile").unwrap();
        let view = view.select_material(&catalog, "ceramic").unwrap();
        let view = view.select_product(&catalog, "classic").unwrap();
        assert_eq!(view.depth(), 3);

        let view = view.back();
        assert_eq!(
            view,
            CatalogView::Products {
                type_id: "tile".to_string(),
                material_id: "ceramic".to_string(),
            }
        );
        let view = view.back();
        assert_eq!(
            view,
            CatalogView::Materials {
                type_id: "tile".to_string(),
            }
        );
        let view = view.back();
        assert_eq!(view, CatalogView::Types);
    }

    #[test]
    fn test_back_is_identity_at_root() {
        assert_eq!(CatalogView::Types.back(), CatalogView::Types);
    }

    #[test]
    fn test_containment_material() {
        let catalog = fixture();
        let view = CatalogView::Types.select_type(&catalog, "metal").unwrap();

        // "ceramic" принадлежит типу "tile", а не "metal".
        assert!(view.select_material(&catalog, "ceramic").is_err());
        assert!(view.select_material(&catalog, "sheets").is_ok());
    }

    #[test]
    fn test_containment_product() {
        let catalog = fixture();
        let view = CatalogView::Types
            .select_type(&catalog, "tile")
            .and_then(|v| v.select_material(&catalog, "mounting"))
            .unwrap();

        // "classic" лежит в материале "ceramic", а не "mounting".
        assert!(view.select_product(&catalog, "classic").is_err());
        assert!(view.select_product(&catalog, "hooks").is_ok());
    }

    #[test]
    fn test_no_level_skipping() {
        let catalog = fixture();
        let root = CatalogView::Types;

        assert!(root.select_material(&catalog, "ceramic").is_err());
        assert!(root.select_product(&catalog, "classic").is_err());

        let materials = root.select_type(&catalog, "tile").unwrap();
        assert!(materials.select_type(&catalog, "metal").is_err());
        assert!(materials.select_product(&catalog, "classic").is_err());
    }

    #[test]
    fn test_unknown_ids_rejected() {
        let catalog = fixture();
        let root = CatalogView::Types;

        assert!(root.select_type(&catalog, "нет-такого").is_err());

        let materials = root.select_type(&catalog, "tile").unwrap();
        assert!(materials.select_material(&catalog, "нет-такого").is_err());
    }

    #[test]
    fn test_rejected_transition_leaves_value_usable() {
        let catalog = fixture();
        let materials = CatalogView::Types.select_type(&catalog, "tile").unwrap();

        // Отклонённый переход не меняет исходное значение.
        let _ = materials.select_material(&catalog, "нет-такого");
        assert_eq!(materials.depth(), 1);
        assert!(materials.select_material(&catalog, "ceramic").is_ok());
    }
}
