use crate::domain::a001_menu_catalog::api::load_catalog;
use crate::shared::api_utils::page_query;
use crate::shared::config::MenuConfig;
use contracts::domain::a001_menu_catalog::Catalog;
use leptos::prelude::*;
use std::sync::Arc;
use web_sys::window;

/// Состояние страницы меню: настройки, загруженный каталог и выбранный день.
///
/// The catalog is `None` until the single fetch resolves and read-only after that.
#[derive(Clone, Copy)]
pub struct MenuGlobalContext {
    pub config: StoredValue<MenuConfig>,
    pub catalog: RwSignal<Option<Arc<Catalog>>>,
    pub day: RwSignal<String>,
}

impl MenuGlobalContext {
    pub fn new() -> Self {
        let config = MenuConfig::from_query(&page_query());
        let day = config.initial_day();
        Self {
            config: StoredValue::new(config),
            catalog: RwSignal::new(None),
            day: RwSignal::new(day),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.with(Option::is_some)
    }

    /// Загрузить каталог один раз. Ошибки уже превращены в пустой каталог.
    pub fn load(&self) {
        let this = *self;
        let url = self.config.with_value(|c| c.catalog.clone());
        leptos::task::spawn_local(async move {
            let catalog = load_catalog(&url).await;
            this.catalog.set(Some(Arc::new(catalog)));
        });
    }

    /// Держать `?day=` в адресной строке в актуальном состоянии
    pub fn init_url_sync(&self) {
        let this = *self;
        Effect::new(move |_| {
            let day = this.day.get();
            let new_url = this.config.with_value(|c| c.to_query(&day));

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Переключить день. До загрузки каталога игнорируется.
    pub fn select_day(&self, day: String) {
        if !self.catalog.with_untracked(Option::is_some) {
            log::debug!("day change to {} ignored: catalog not loaded yet", day);
            return;
        }
        self.day.set(day);
    }
}

impl Default for MenuGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_menu_context() -> MenuGlobalContext {
    use_context::<MenuGlobalContext>().expect("MenuGlobalContext context not found")
}
