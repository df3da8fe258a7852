//! Каскадный выбор «блюдо → подменю» без DOM.
//!
//! Ячейка меню находится в одном из двух состояний: подменю нет (второй
//! селект очищен и скрыт) или подменю активно (второй селект заполнен
//! вариантами выбранного блюда).

use super::aggregate::{Catalog, MenuItem};

/// Строка подменю, которая выводится как пустая строка-разделитель
pub const BLANK_MARKER: &str = "--";

/// Подпись единственной строки пустого селекта
pub const PLACEHOLDER_LABEL: &str = "—";

/// CSS класс для блюд с подменю
pub const HAS_SUBMENU_CLASS: &str = "has-submenu";

/// Строка второго селекта
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmenuEntry {
    pub label: String,
    pub value: String,
}

impl SubmenuEntry {
    pub fn from_text(text: &str) -> Self {
        if text.trim() == BLANK_MARKER {
            Self {
                label: " ".to_string(),
                value: String::new(),
            }
        } else {
            Self {
                label: text.to_string(),
                value: text.to_string(),
            }
        }
    }

    pub fn is_blank(&self) -> bool {
        self.value.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmenuState {
    #[default]
    NoSubmenu,
    SubmenuActive(Vec<SubmenuEntry>),
}

impl SubmenuState {
    pub fn is_active(&self) -> bool {
        matches!(self, SubmenuState::SubmenuActive(_))
    }

    pub fn entries(&self) -> &[SubmenuEntry] {
        match self {
            SubmenuState::NoSubmenu => &[],
            SubmenuState::SubmenuActive(entries) => entries,
        }
    }
}

/// Переход при выборе блюда в основном селекте
pub fn select_primary(catalog: &Catalog, item: Option<&MenuItem>) -> SubmenuState {
    let Some(item) = item else {
        return SubmenuState::NoSubmenu;
    };

    let submenu = item.resolve_submenu(catalog);
    if submenu.is_empty() {
        SubmenuState::NoSubmenu
    } else {
        SubmenuState::SubmenuActive(submenu.iter().map(|s| SubmenuEntry::from_text(s)).collect())
    }
}

/// Same transition keyed by the select's value, as it arrives from a change event.
pub fn select_by_name(catalog: &Catalog, options: &[MenuItem], name: &str) -> SubmenuState {
    select_primary(catalog, options.iter().find(|item| item.name == name))
}

/// Строка основного селекта
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryEntry {
    pub label: String,
    pub value: String,
    pub has_submenu: bool,
}

impl PrimaryEntry {
    pub fn placeholder() -> Self {
        Self {
            label: PLACEHOLDER_LABEL.to_string(),
            value: String::new(),
            has_submenu: false,
        }
    }

    pub fn css_class(&self) -> &'static str {
        if self.has_submenu {
            HAS_SUBMENU_CLASS
        } else {
            ""
        }
    }
}

/// Всё, что нужно нарисовать в одной ячейке после заполнения
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRender {
    pub entries: Vec<PrimaryEntry>,
    /// Значение, выбранное в основном селекте
    pub selected: String,
    pub submenu: SubmenuState,
    /// `false` только для пустой ячейки с заглушкой
    pub has_options: bool,
}

impl SlotRender {
    /// Заполнить ячейку списком блюд.
    ///
    /// `current` is the primary value before repopulation; it is kept when it
    /// still names one of the options, otherwise the first option is taken.
    pub fn build(catalog: &Catalog, options: &[MenuItem], current: Option<&str>) -> Self {
        if options.is_empty() {
            return Self {
                entries: vec![PrimaryEntry::placeholder()],
                selected: String::new(),
                submenu: SubmenuState::NoSubmenu,
                has_options: false,
            };
        }

        let entries = options
            .iter()
            .map(|item| PrimaryEntry {
                label: item.name.clone(),
                value: item.name.clone(),
                has_submenu: item.has_submenu(catalog),
            })
            .collect();

        let initial = current
            .and_then(|value| options.iter().find(|item| item.name == value))
            .unwrap_or(&options[0]);

        Self {
            entries,
            selected: initial.name.clone(),
            submenu: select_primary(catalog, Some(initial)),
            has_options: true,
        }
    }

    /// Виден ли блок со вторым селектом
    pub fn submenu_visible(&self) -> bool {
        self.has_options && self.submenu.is_active()
    }
}
