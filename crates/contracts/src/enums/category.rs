use serde::{Deserialize, Serialize};

/// Категория блюда (курс)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Entrada,
    Principal,
    Postre,
}

impl Category {
    /// Ключ списка в корне каталога и в блоке `dias`
    pub fn code(&self) -> &'static str {
        match self {
            Category::Entrada => "entrada",
            Category::Principal => "principal",
            Category::Postre => "postre",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Entrada => "Entrada",
            Category::Principal => "Plato principal",
            Category::Postre => "Postre",
        }
    }

    pub fn all() -> [Category; 3] {
        [Category::Entrada, Category::Principal, Category::Postre]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "entrada" => Some(Category::Entrada),
            "principal" => Some(Category::Principal),
            "postre" => Some(Category::Postre),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::meal::Meal;

    #[test]
    fn test_codes_round_trip() {
        for category in Category::all() {
            assert_eq!(Category::from_code(category.code()), Some(category));
        }
        for meal in Meal::all() {
            assert_eq!(Meal::from_code(meal.code()), Some(meal));
        }
        assert_eq!(Category::from_code("sopa"), None);
        assert_eq!(Meal::from_code("desayuno"), None);
    }
}
