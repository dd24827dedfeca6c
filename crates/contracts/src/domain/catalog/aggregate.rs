//! Дерево каталога: тип кровли → материал → товар → цена конкурента.
//!
//! Дерево строится один раз при старте из встроенного ресурса и после этого
//! никогда не изменяется. Все вычисляемые значения (минимальная цена,
//! процент экономии) определены здесь, а не в слое отображения.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// Catalog root
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "roofingTypes")]
    pub roofing_types: Vec<RoofingType>,
}

impl Catalog {
    pub fn roofing_type(&self, id: &str) -> Option<&RoofingType> {
        self.roofing_types.iter().find(|t| t.id == id)
    }

    pub fn validate(&self) -> Result<(), String> {
        ensure_unique_ids(
            self.roofing_types.iter().map(|t| t.id.as_str()),
            "Тип кровли",
        )?;
        for roofing_type in &self.roofing_types {
            roofing_type.validate()?;
        }
        Ok(())
    }
}

// ============================================================================
// RoofingType
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoofingType {
    pub id: String,
    pub name: String,
    /// Имя глифа для слоя отображения; ядро хранит только ссылку.
    pub icon: String,
    pub description: String,
    pub materials: Vec<Material>,
}

impl RoofingType {
    pub fn material(&self, id: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err(format!("Тип кровли '{}': название не может быть пустым", self.id));
        }
        ensure_unique_ids(
            self.materials.iter().map(|m| m.id.as_str()),
            &format!("Материалы типа '{}'", self.id),
        )?;
        for material in &self.materials {
            material.validate()?;
        }
        Ok(())
    }
}

// ============================================================================
// Material
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub name: String,
    pub category: String,
    pub products: Vec<Product>,
}

impl Material {
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Минимальная «наша цена» среди товаров материала.
    ///
    /// `None`, если товаров нет — строка «Цены от» тогда не выводится.
    pub fn min_our_price(&self) -> Option<f64> {
        self.products
            .iter()
            .map(|p| p.our_price)
            .min_by(|a, b| a.total_cmp(b))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err(format!("Материал '{}': название не может быть пустым", self.id));
        }
        ensure_unique_ids(
            self.products.iter().map(|p| p.id.as_str()),
            &format!("Товары материала '{}'", self.id),
        )?;
        for product in &self.products {
            product.validate()?;
        }
        Ok(())
    }
}

// ============================================================================
// Product
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "ourPrice")]
    pub our_price: f64,
    #[serde(rename = "competitorPrices", default)]
    pub competitor_prices: Vec<CompetitorPrice>,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Процент экономии относительно цены конкурента, округлённый до целого.
    ///
    /// `None`, если цена конкурента не положительна — деление не определено,
    /// такая строка помечается в интерфейсе прочерком. Отрицательный результат
    /// (наша цена выше) возвращается как есть, без обрезания.
    pub fn savings_vs(&self, competitor_price: f64) -> Option<i32> {
        if !competitor_price.is_finite() || competitor_price <= 0.0 {
            return None;
        }
        let percent = (competitor_price - self.our_price) / competitor_price * 100.0;
        Some(percent.round() as i32)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err(format!("Товар '{}': название не может быть пустым", self.id));
        }
        if !(self.our_price.is_finite() && self.our_price > 0.0) {
            return Err(format!("Товар '{}': цена должна быть положительной", self.id));
        }
        for competitor in &self.competitor_prices {
            if competitor.company.trim().is_empty() {
                return Err(format!(
                    "Товар '{}': название конкурента не может быть пустым",
                    self.id
                ));
            }
            if !(competitor.price.is_finite() && competitor.price > 0.0) {
                return Err(format!(
                    "Товар '{}': цена конкурента '{}' должна быть положительной",
                    self.id, competitor.company
                ));
            }
        }
        Ok(())
    }
}

// ============================================================================
// CompetitorPrice
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorPrice {
    pub company: String,
    pub price: f64,
}

fn ensure_unique_ids<'a>(ids: impl Iterator<Item = &'a str>, scope: &str) -> Result<(), String> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(format!("{}: идентификатор не может быть пустым", scope));
        }
        if !seen.insert(id) {
            return Err(format!("{}: дублирующийся идентификатор '{}'", scope, id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, our_price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Товар {}", id),
            description: String::new(),
            our_price,
            competitor_prices: vec![],
            unit: "м²".to_string(),
            image: None,
        }
    }

    fn material(id: &str, products: Vec<Product>) -> Material {
        Material {
            id: id.to_string(),
            name: format!("Материал {}", id),
            category: "Покрытие".to_string(),
            products,
        }
    }

    #[test]
    fn test_min_our_price() {
        let single = material("m1", vec![product("p1", 580.0)]);
        assert_eq!(single.min_our_price(), Some(580.0));

        let several = material(
            "m2",
            vec![product("p1", 1200.0), product("p2", 45.0), product("p3", 420.0)],
        );
        assert_eq!(several.min_our_price(), Some(45.0));
    }

    #[test]
    fn test_min_our_price_empty() {
        let empty = material("m1", vec![]);
        assert_eq!(empty.min_our_price(), None);
    }

    #[test]
    fn test_savings_rounding() {
        let p = product("p1", 380.0);
        assert_eq!(p.savings_vs(410.0), Some(7));

        let p = product("p2", 1200.0);
        assert_eq!(p.savings_vs(1280.0), Some(6));
    }

    #[test]
    fn test_savings_negative_not_clamped() {
        // Наша цена хуже цены конкурента: знак сохраняется.
        let p = product("p1", 500.0);
        assert_eq!(p.savings_vs(400.0), Some(-25));
    }

    #[test]
    fn test_savings_guard_non_positive() {
        let p = product("p1", 380.0);
        assert_eq!(p.savings_vs(0.0), None);
        assert_eq!(p.savings_vs(-10.0), None);
        assert_eq!(p.savings_vs(f64::NAN), None);
        assert_eq!(p.savings_vs(f64::INFINITY), None);
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let catalog = Catalog {
            roofing_types: vec![
                RoofingType {
                    id: "tile".to_string(),
                    name: "Черепичная кровля".to_string(),
                    icon: "home".to_string(),
                    description: String::new(),
                    materials: vec![],
                },
                RoofingType {
                    id: "tile".to_string(),
                    name: "Дубль".to_string(),
                    icon: "home".to_string(),
                    description: String::new(),
                    materials: vec![],
                },
            ],
        };
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_price() {
        let mut p = product("p1", 0.0);
        assert!(p.validate().is_err());

        p.our_price = 100.0;
        p.competitor_prices.push(CompetitorPrice {
            company: "Конкурент А".to_string(),
            price: -1.0,
        });
        assert!(p.validate().is_err());
    }
}
