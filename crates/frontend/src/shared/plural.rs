//! Согласование существительных с числительными.

/// Выбирает грамматическую форму для числа `n` по правилам русского языка.
///
/// `plural_ru(1, "товар", "товара", "товаров")` -> `"товар"`.
///
/// Числа, оканчивающиеся на 11–14, всегда получают форму `many`
/// («11 товаров», «112 товаров»).
pub fn plural_ru(n: usize, one: &'static str, few: &'static str, many: &'static str) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=14) => many,
        (1, _) => one,
        (2..=4, _) => few,
        _ => many,
    }
}

/// `"5 товаров"`, `"1 категория"` и т.п.
pub fn count_with_noun(
    n: usize,
    one: &'static str,
    few: &'static str,
    many: &'static str,
) -> String {
    format!("{} {}", n, plural_ru(n, one, few, many))
}
