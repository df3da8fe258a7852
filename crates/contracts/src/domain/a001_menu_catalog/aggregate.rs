use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::error::CatalogError;
use super::lenient;
use crate::enums::category::Category;
use crate::enums::meal::Meal;

/// Ключ блока переопределений по дням
pub const DAYS_KEY: &str = "dias";

/// День, который показывается, если ничего не выбрано
pub const DEFAULT_DAY: &str = "1";

/// Дни недели, которые всегда есть в селекторе
pub const WEEK_DAYS: std::ops::RangeInclusive<u32> = 1..=7;

/// category code -> items
pub type MealMenu = BTreeMap<String, Vec<MenuItem>>;

/// meal code -> categories
pub type DayMenu = BTreeMap<String, MealMenu>;

// ============================================================================
// Item
// ============================================================================

/// Блюдо каталога.
///
/// Подменю задаётся либо списком прямо в блюде (`submenu`), либо ссылкой
/// на именованный список в корне каталога (`submenuRef`). Встроенный список
/// всегда важнее ссылки. Поля не того вида читаются как отсутствующие.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default, alias = "nombre", deserialize_with = "lenient::name")]
    pub name: String,

    #[serde(
        default,
        deserialize_with = "lenient::optional_strings",
        skip_serializing_if = "Option::is_none"
    )]
    pub submenu: Option<Vec<String>>,

    #[serde(
        default,
        rename = "submenuRef",
        alias = "submenu_ref",
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub submenu_ref: Option<String>,
}

impl MenuItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_submenu<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.submenu = Some(entries.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_submenu_ref(mut self, key: impl Into<String>) -> Self {
        self.submenu_ref = Some(key.into());
        self
    }

    /// Разрешить подменю блюда.
    ///
    /// Inline list wins even when empty; an unknown `submenuRef` gives an empty list.
    pub fn resolve_submenu(&self, catalog: &Catalog) -> Vec<String> {
        if let Some(inline) = &self.submenu {
            return inline.clone();
        }
        self.submenu_ref
            .as_deref()
            .and_then(|key| catalog.named_list(key))
            .unwrap_or_default()
    }

    pub fn has_submenu(&self, catalog: &Catalog) -> bool {
        !self.resolve_submenu(catalog).is_empty()
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Каталог меню в том виде, в каком он лежит в `menus.json`.
///
/// Все именованные списки корня, кроме категорий и `dias`, попадают в
/// `lists` и доступны через `submenuRef`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(
        default,
        deserialize_with = "lenient::optional_items",
        skip_serializing_if = "Option::is_none"
    )]
    pub entrada: Option<Vec<MenuItem>>,

    #[serde(
        default,
        deserialize_with = "lenient::optional_items",
        skip_serializing_if = "Option::is_none"
    )]
    pub principal: Option<Vec<MenuItem>>,

    #[serde(
        default,
        deserialize_with = "lenient::optional_items",
        skip_serializing_if = "Option::is_none"
    )]
    pub postre: Option<Vec<MenuItem>>,

    #[serde(
        default,
        deserialize_with = "lenient::optional_days",
        skip_serializing_if = "Option::is_none"
    )]
    pub dias: Option<BTreeMap<String, DayMenu>>,

    #[serde(flatten)]
    pub lists: BTreeMap<String, Value>,
}

impl Catalog {
    /// Пустой каталог, который подставляется при любой ошибке загрузки
    pub fn fallback() -> Self {
        Self {
            entrada: Some(Vec::new()),
            principal: Some(Vec::new()),
            postre: Some(Vec::new()),
            ..Default::default()
        }
    }

    /// Разобрать и проверить JSON документ каталога
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| CatalogError::Json(e.to_string()))?;
        Self::from_value(value)
    }

    /// Проверить минимальную структуру и построить каталог.
    ///
    /// Документ принимается, если есть хотя бы одна базовая категория или
    /// `dias` является объектом. Необязательные части не того вида (`dias`,
    /// переопределения дня, подменю) считаются отсутствующими.
    pub fn from_value(value: Value) -> Result<Self, CatalogError> {
        let root = value.as_object().ok_or(CatalogError::InvalidShape)?;

        let has_base = Category::all()
            .iter()
            .any(|c| root.get(c.code()).is_some_and(|v| !v.is_null()));
        let has_days = root.get(DAYS_KEY).is_some_and(Value::is_object);

        if !has_base && !has_days {
            return Err(CatalogError::InvalidShape);
        }

        serde_json::from_value(value).map_err(|e| CatalogError::Json(e.to_string()))
    }

    /// Базовый список категории (пустой, если его нет)
    pub fn category(&self, category: Category) -> &[MenuItem] {
        let list = match category {
            Category::Entrada => &self.entrada,
            Category::Principal => &self.principal,
            Category::Postre => &self.postre,
        };
        list.as_deref().unwrap_or_default()
    }

    /// `dias[day][meal][category]`, если все ключи на месте
    pub fn day_override(&self, day: &str, meal: Meal, category: Category) -> Option<&[MenuItem]> {
        self.dias
            .as_ref()?
            .get(day)?
            .get(meal.code())?
            .get(category.code())
            .map(Vec::as_slice)
    }

    /// Именованный список строк из корня каталога
    pub fn named_list(&self, key: &str) -> Option<Vec<String>> {
        lenient::strings_from(self.lists.get(key)?)
    }

    /// Дни для селектора: 1..=7 и любые дополнительные ключи из `dias`.
    ///
    /// Numeric ids come first in numeric order, the rest follow lexically.
    pub fn day_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = WEEK_DAYS.map(|d| d.to_string()).collect();
        if let Some(days) = &self.dias {
            for key in days.keys() {
                if !ids.contains(key) {
                    ids.push(key.clone());
                }
            }
        }
        ids.sort_by(|a, b| match (a.parse::<u32>(), b.parse::<u32>()) {
            (Ok(x), Ok(y)) => x.cmp(&y),
            (Ok(_), Err(_)) => std::cmp::Ordering::Less,
            (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
            (Err(_), Err(_)) => a.cmp(b),
        });
        ids
    }

    /// Общее число блюд в базовых категориях
    pub fn base_item_count(&self) -> usize {
        Category::all().iter().map(|c| self.category(*c).len()).sum()
    }
}

// ============================================================================
// Slot
// ============================================================================

/// Ячейка страницы: пара (приём пищи, категория)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuSlot {
    pub meal: Meal,
    pub category: Category,
}

impl MenuSlot {
    pub fn new(meal: Meal, category: Category) -> Self {
        Self { meal, category }
    }

    /// Все шесть ячеек в порядке отображения
    pub fn all() -> Vec<MenuSlot> {
        Meal::all()
            .into_iter()
            .flat_map(|meal| Category::all().into_iter().map(move |c| MenuSlot::new(meal, c)))
            .collect()
    }

    /// DOM id основного селекта, например `almuerzo-entrada-select`
    pub fn select_id(&self) -> String {
        format!("{}-{}-select", self.meal.code(), self.category.code())
    }

    /// DOM id селекта подменю, например `cena-postre-submenu`
    pub fn submenu_id(&self) -> String {
        format!("{}-{}-submenu", self.meal.code(), self.category.code())
    }
}
