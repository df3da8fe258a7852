//! Каталог меню: модель, проверка структуры, разрешение опций дня
//! и каскадный выбор «блюдо → подменю».

pub mod aggregate;
pub mod error;
pub mod lenient;
pub mod resolver;
pub mod submenu;

pub use aggregate::{Catalog, MenuItem, MenuSlot};
pub use error::CatalogError;
pub use resolver::resolve_options;
pub use submenu::{select_by_name, select_primary, PrimaryEntry, SlotRender, SubmenuEntry, SubmenuState};
