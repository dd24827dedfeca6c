//! Подготовка данных для карточки товара.

use contracts::domain::catalog::Product;

/// Строка сравнения с одним конкурентом.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub company: String,
    pub price: f64,
    /// `None` — цена конкурента не положительна, экономия не определена.
    pub savings: Option<i32>,
}

pub fn comparison_rows(product: &Product) -> Vec<PriceRow> {
    product
        .competitor_prices
        .iter()
        .map(|competitor| PriceRow {
            company: competitor.company.clone(),
            price: competitor.price,
            savings: product.savings_vs(competitor.price),
        })
        .collect()
}

/// Текст бейджа экономии. Знак сохраняется («+7%», «-25%»): отрицательная
/// экономия показывается как есть. Неопределённая — прочерком.
pub fn savings_badge(savings: Option<i32>) -> String {
    match savings {
        Some(percent) => format!("{:+}%", percent),
        None => "—".to_string(),
    }
}
