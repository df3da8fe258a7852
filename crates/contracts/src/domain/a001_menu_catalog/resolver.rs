use std::collections::HashSet;

use super::aggregate::{Catalog, MenuItem};
use crate::enums::category::Category;
use crate::enums::meal::Meal;

/// Список блюд для ячейки (день, приём пищи, категория).
///
/// Блюда дня идут первыми в своём порядке, за ними остаток базового
/// каталога без блюд с теми же именами. Без переопределения возвращается
/// базовый список как есть.
pub fn resolve_options(catalog: &Catalog, day: &str, meal: Meal, category: Category) -> Vec<MenuItem> {
    let base = catalog.category(category);

    match catalog.day_override(day, meal, category) {
        Some(overrides) if !overrides.is_empty() => {
            // unnamed overrides never shadow anything
            let taken: HashSet<&str> = overrides
                .iter()
                .map(|item| item.name.as_str())
                .filter(|name| !name.is_empty())
                .collect();

            overrides
                .iter()
                .chain(base.iter().filter(|item| !taken.contains(item.name.as_str())))
                .cloned()
                .collect()
        }
        _ => base.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    fn sample() -> Catalog {
        Catalog::from_value(json!({
            "entrada": [{ "name": "Soup" }],
            "dias": { "2": { "almuerzo": { "entrada": [{ "name": "Salad" }] } } }
        }))
        .unwrap()
    }

    #[test]
    fn test_override_precedes_base() {
        let options = resolve_options(&sample(), "2", Meal::Almuerzo, Category::Entrada);
        assert_eq!(options, vec![MenuItem::new("Salad"), MenuItem::new("Soup")]);
    }

    #[test]
    fn test_day_without_override_gets_base() {
        let options = resolve_options(&sample(), "1", Meal::Almuerzo, Category::Entrada);
        assert_eq!(options, vec![MenuItem::new("Soup")]);

        // same day, other meal
        let options = resolve_options(&sample(), "2", Meal::Cena, Category::Entrada);
        assert_eq!(options, vec![MenuItem::new("Soup")]);
    }

    #[test]
    fn test_override_suppresses_same_name() {
        let catalog = Catalog::from_value(json!({
            "principal": [
                { "name": "Pasta" },
                { "name": "Steak", "submenu": ["Rare", "Well done"] },
                { "name": "Fish" }
            ],
            "dias": { "5": { "cena": { "principal": [
                { "name": "Steak" },
                { "name": "Risotto" }
            ] } } }
        }))
        .unwrap();

        let options = resolve_options(&catalog, "5", Meal::Cena, Category::Principal);
        assert_eq!(names(&options), vec!["Steak", "Risotto", "Pasta", "Fish"]);
        // the override's own Steak is kept, not the base one with its submenu
        assert_eq!(options[0].submenu, None);
    }

    #[test]
    fn test_empty_override_falls_back_to_base() {
        let catalog = Catalog::from_value(json!({
            "postre": [{ "name": "Flan" }, { "name": "Helado" }],
            "dias": { "1": { "almuerzo": { "postre": [] } } }
        }))
        .unwrap();
        let options = resolve_options(&catalog, "1", Meal::Almuerzo, Category::Postre);
        assert_eq!(names(&options), vec!["Flan", "Helado"]);
    }

    #[test]
    fn test_unnamed_override_does_not_hide_unnamed_base() {
        let catalog = Catalog::from_value(json!({
            "entrada": [{ "submenu": ["x"] }, { "name": "Soup" }],
            "dias": { "1": { "cena": { "entrada": [{}] } } }
        }))
        .unwrap();
        let options = resolve_options(&catalog, "1", Meal::Cena, Category::Entrada);
        assert_eq!(names(&options), vec!["", "", "Soup"]);
    }

    #[test]
    fn test_both_sources_absent() {
        let catalog = Catalog::from_value(json!({ "dias": {} })).unwrap();
        assert!(resolve_options(&catalog, "1", Meal::Almuerzo, Category::Principal).is_empty());
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let catalog = sample();
        let first = resolve_options(&catalog, "2", Meal::Almuerzo, Category::Entrada);
        let second = resolve_options(&catalog, "2", Meal::Almuerzo, Category::Entrada);
        assert_eq!(first, second);
    }

    #[test]
    fn test_null_override_is_absent() {
        let catalog = Catalog::from_value(json!({
            "entrada": [{ "name": "Soup" }],
            "dias": { "1": { "almuerzo": { "entrada": null } } }
        }))
        .unwrap();
        let options = resolve_options(&catalog, "1", Meal::Almuerzo, Category::Entrada);
        assert_eq!(options, vec![MenuItem::new("Soup")]);
    }

    #[test]
    fn test_non_array_override_is_absent() {
        let catalog = Catalog::from_value(json!({
            "entrada": [{ "name": "Soup" }],
            "dias": { "1": { "almuerzo": { "entrada": { "name": "Salad" } } } }
        }))
        .unwrap();
        assert_eq!(catalog.day_override("1", Meal::Almuerzo, Category::Entrada), None);
        let options = resolve_options(&catalog, "1", Meal::Almuerzo, Category::Entrada);
        assert_eq!(options, vec![MenuItem::new("Soup")]);
    }

    #[test]
    fn test_non_map_day_entry_keeps_other_days() {
        let catalog = Catalog::from_value(json!({
            "entrada": [{ "name": "Soup" }],
            "dias": {
                "7": "cerrado",
                "2": { "almuerzo": { "entrada": [{ "name": "Salad" }] } }
            }
        }))
        .unwrap();

        let closed = resolve_options(&catalog, "7", Meal::Almuerzo, Category::Entrada);
        assert_eq!(names(&closed), vec!["Soup"]);
        let tuesday = resolve_options(&catalog, "2", Meal::Almuerzo, Category::Entrada);
        assert_eq!(names(&tuesday), vec!["Salad", "Soup"]);
    }

    #[test]
    fn test_scalar_inside_override_is_skipped() {
        let catalog = Catalog::from_value(json!({
            "postre": [{ "name": "Flan" }],
            "dias": { "3": { "cena": { "postre": ["Helado", { "name": "Helado" }] } } }
        }))
        .unwrap();
        let options = resolve_options(&catalog, "3", Meal::Cena, Category::Postre);
        assert_eq!(names(&options), vec!["Helado", "Flan"]);
    }
}
