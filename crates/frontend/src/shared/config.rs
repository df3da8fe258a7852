//! Настройки страницы меню из строки запроса.
//!
//! `?catalog=data/otro.json&day=3` — другой файл каталога и начальный день.
//! Без параметров используется `data/menus.json` и день `1`.

use contracts::domain::a001_menu_catalog::aggregate::DEFAULT_DAY;
use serde::{Deserialize, Serialize};

/// Каталог по умолчанию, относительно страницы
pub const DEFAULT_CATALOG_URL: &str = "data/menus.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// URL JSON каталога
    #[serde(skip_serializing_if = "is_default_catalog")]
    pub catalog: String,
    /// Начальный день
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
}

#[allow(clippy::ptr_arg)]
fn is_default_catalog(catalog: &String) -> bool {
    catalog == DEFAULT_CATALOG_URL
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            catalog: DEFAULT_CATALOG_URL.to_string(),
            day: None,
        }
    }
}

impl MenuConfig {
    /// Parse `location.search` (with or without the leading `?`).
    pub fn from_query(search: &str) -> Self {
        let query = search.trim_start_matches('?');
        if query.is_empty() {
            return Self::default();
        }
        match serde_qs::from_str::<MenuConfig>(query) {
            Ok(mut config) => {
                if config.catalog.trim().is_empty() {
                    config.catalog = DEFAULT_CATALOG_URL.to_string();
                }
                config
            }
            Err(e) => {
                log::warn!("Ignoring query string {:?}: {}", search, e);
                Self::default()
            }
        }
    }

    pub fn initial_day(&self) -> String {
        self.day
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DAY)
            .to_string()
    }

    /// Строка запроса для текущего дня; каталог пишется только если он не по умолчанию
    pub fn to_query(&self, day: &str) -> String {
        let snapshot = MenuConfig {
            catalog: self.catalog.clone(),
            day: Some(day.to_string()),
        };
        format!("?{}", serde_qs::to_string(&snapshot).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_query() {
        assert_eq!(MenuConfig::from_query(""), MenuConfig::default());
        assert_eq!(MenuConfig::from_query("?"), MenuConfig::default());
        assert_eq!(MenuConfig::default().initial_day(), "1");
    }

    #[test]
    fn test_reads_catalog_and_day() {
        let config = MenuConfig::from_query("?catalog=data/semana2.json&day=4");
        assert_eq!(config.catalog, "data/semana2.json");
        assert_eq!(config.initial_day(), "4");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = MenuConfig::from_query("catalog=&day=");
        assert_eq!(config.catalog, DEFAULT_CATALOG_URL);
        assert_eq!(config.initial_day(), "1");
    }

    #[test]
    fn test_unknown_params_are_ignored() {
        let config = MenuConfig::from_query("?day=2&theme=dark");
        assert_eq!(config.initial_day(), "2");
        assert_eq!(config.catalog, DEFAULT_CATALOG_URL);
    }

    #[test]
    fn test_to_query() {
        assert_eq!(MenuConfig::default().to_query("3"), "?day=3");

        let custom = MenuConfig::from_query("catalog=semana2");
        let query = custom.to_query("5");
        assert!(query.starts_with('?'));
        assert!(query.contains("catalog=semana2"));
        assert!(query.contains("day=5"));
    }

    #[test]
    fn test_day_with_reserved_chars_survives_reload() {
        let config = MenuConfig::default();
        for day in ["fin de semana", "a&b", "feriado#1"] {
            let query = config.to_query(day);
            assert!(!query[1..].contains(['&', '#', ' ']), "query = {}", query);
            assert_eq!(MenuConfig::from_query(&query).initial_day(), day);
        }
    }
}
