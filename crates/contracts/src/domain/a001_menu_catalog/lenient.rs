//! Мягкий разбор необязательных частей каталога.
//!
//! Переопределения по дням и подменю, которые имеют не ту форму, считаются
//! отсутствующими: кривой день не должен гасить всё меню.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

use super::aggregate::{DayMenu, MealMenu, MenuItem};

/// Скаляр как строка; `null`, массивы и объекты не считаются
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Массив строк; не-массив = `None`, не-скалярные элементы пропускаются
pub fn strings_from(value: &Value) -> Option<Vec<String>> {
    Some(value.as_array()?.iter().filter_map(scalar_to_string).collect())
}

/// Массив блюд; элементы, которые не являются объектами, пропускаются
pub fn items_from(value: &Value) -> Option<Vec<MenuItem>> {
    Some(
        value
            .as_array()?
            .iter()
            .filter(|item| item.is_object())
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
    )
}

/// `dias` → день → приём пищи → категория; всё, что не того вида, отбрасывается
pub fn days_from(value: &Value) -> Option<BTreeMap<String, DayMenu>> {
    let days = value.as_object()?;
    Some(
        days.iter()
            .filter_map(|(day, meals)| {
                let meals: DayMenu = meals
                    .as_object()?
                    .iter()
                    .filter_map(|(meal, categories)| {
                        let categories: MealMenu = categories
                            .as_object()?
                            .iter()
                            .filter_map(|(category, items)| {
                                Some((category.clone(), items_from(items)?))
                            })
                            .collect();
                        Some((meal.clone(), categories))
                    })
                    .collect();
                Some((day.clone(), meals))
            })
            .collect(),
    )
}

// serde adapters for `deserialize_with`

pub fn name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(&value).unwrap_or_default())
}

pub fn optional_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(&value))
}

pub fn optional_strings<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(strings_from(&value))
}

pub fn optional_items<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<MenuItem>>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(items_from(&value))
}

pub fn optional_days<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<BTreeMap<String, DayMenu>>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(days_from(&value))
}
