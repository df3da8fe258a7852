use serde::{Deserialize, Serialize};

/// Приём пищи, для которого составляется меню
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Almuerzo,
    Cena,
}

impl Meal {
    /// Ключ в блоке `dias` каталога
    pub fn code(&self) -> &'static str {
        match self {
            Meal::Almuerzo => "almuerzo",
            Meal::Cena => "cena",
        }
    }

    /// Заголовок секции на странице
    pub fn display_name(&self) -> &'static str {
        match self {
            Meal::Almuerzo => "Almuerzo",
            Meal::Cena => "Cena",
        }
    }

    /// Все приёмы пищи в порядке отображения
    pub fn all() -> [Meal; 2] {
        [Meal::Almuerzo, Meal::Cena]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "almuerzo" => Some(Meal::Almuerzo),
            "cena" => Some(Meal::Cena),
            _ => None,
        }
    }
}

impl std::fmt::Display for Meal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
