//! Встроенный набор данных каталога.
//!
//! Полное дерево зашито в бинарник как JSON-ресурс, разбирается и
//! валидируется один раз при первом обращении. Других источников данных нет.

use super::aggregate::Catalog;
use anyhow::Context;
use once_cell::sync::Lazy;

const CATALOG_JSON: &str = include_str!("catalog.json");

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    // Встроенный ресурс проверяется тестом ниже; здесь ошибка невозможна
    // без рассинхронизации исходников.
    Catalog::from_json(CATALOG_JSON).expect("встроенные данные каталога некорректны")
});

impl Catalog {
    /// Разбирает и валидирует каталог из JSON.
    pub fn from_json(json: &str) -> anyhow::Result<Catalog> {
        let catalog: Catalog =
            serde_json::from_str(json).context("не удалось разобрать данные каталога")?;
        catalog
            .validate()
            .map_err(anyhow::Error::msg)
            .context("данные каталога не прошли валидацию")?;
        Ok(catalog)
    }

    /// Каталог, встроенный при сборке.
    pub fn embedded() -> &'static Catalog {
        &CATALOG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_is_valid() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.roofing_types.len(), 4);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_embedded_catalog_contents() {
        let catalog = Catalog::embedded();
        let soft = catalog.roofing_type("soft").expect("тип 'soft' существует");
        let shingles = soft
            .material("bitumen-tiles")
            .and_then(|m| m.product("soft-shingles"))
            .expect("товар 'soft-shingles' существует");
        assert_eq!(shingles.our_price, 380.0);
        assert_eq!(shingles.unit, "м²");
        assert_eq!(shingles.competitor_prices.len(), 2);
    }

    #[test]
    fn test_from_json_rejects_broken_data() {
        assert!(Catalog::from_json("не json").is_err());
        assert!(Catalog::from_json(r#"{"roofingTypes": [{"id": "", "name": "X", "icon": "home", "description": "", "materials": []}]}"#).is_err());
    }
}
