use crate::shared::api_utils::is_file_origin;
use contracts::domain::a001_menu_catalog::{Catalog, CatalogError};
use gloo_net::http::Request;

/// Получить и проверить каталог
pub async fn fetch_catalog(url: &str) -> Result<Catalog, CatalogError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| CatalogError::Transport(e.to_string()))?;

    let body = if response.ok() {
        response
            .text()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?
    } else {
        String::new()
    };

    catalog_from_response(response.ok(), response.status(), &body)
}

/// Проверить ответ сервера: статус, затем JSON и структура тела
pub fn catalog_from_response(ok: bool, status: u16, body: &str) -> Result<Catalog, CatalogError> {
    if !ok {
        return Err(CatalogError::Http(status));
    }
    Catalog::from_json_str(body)
}

/// Загрузить каталог меню; при любой ошибке вернуть пустой каталог
pub async fn load_catalog(url: &str) -> Catalog {
    let result = fetch_catalog(url).await;
    catalog_or_fallback(url, result, is_file_origin())
}

/// Разобрать результат загрузки: ошибка логируется и заменяется на `Catalog::fallback()`
pub fn catalog_or_fallback(
    url: &str,
    result: Result<Catalog, CatalogError>,
    file_origin: bool,
) -> Catalog {
    match result {
        Ok(catalog) => {
            log::info!(
                "Menu catalog loaded from {}: {} base items, {} days",
                url,
                catalog.base_item_count(),
                catalog.dias.as_ref().map_or(0, |d| d.len())
            );
            catalog
        }
        Err(e) => {
            if file_origin {
                log::warn!("Page opened via file://; serve it from a local HTTP server to avoid CORS");
            }
            log::error!("Error al cargar el menú desde {}: {}", url, e);
            Catalog::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_menu_catalog::resolve_options;
    use contracts::enums::category::Category;
    use contracts::enums::meal::Meal;

    const SAMPLE: &str = include_str!("../../../data/menus.json");

    #[test]
    fn test_http_404_gives_fallback() {
        let result = catalog_from_response(false, 404, "<html>Not Found</html>");
        assert_eq!(result, Err(CatalogError::Http(404)));

        let catalog = catalog_or_fallback("data/menus.json", result, false);
        assert_eq!(catalog, Catalog::fallback());
        for category in Category::all() {
            assert!(catalog.category(category).is_empty());
        }
    }

    #[test]
    fn test_response_errors() {
        assert_eq!(
            catalog_from_response(false, 500, r#"{ "entrada": [] }"#),
            Err(CatalogError::Http(500))
        );
        assert!(matches!(
            catalog_from_response(true, 200, "{ \"entrada\": ["),
            Err(CatalogError::Json(_))
        ));
        assert_eq!(
            catalog_from_response(true, 200, r#"{ "menu": [] }"#),
            Err(CatalogError::InvalidShape)
        );
    }

    #[test]
    fn test_response_ok_parses_body() {
        let catalog = catalog_from_response(true, 200, r#"{ "entrada": [{ "name": "Soup" }] }"#)
            .unwrap();
        assert_eq!(catalog.base_item_count(), 1);
    }

    #[test]
    fn test_every_failure_kind_gives_fallback() {
        let failures = [
            CatalogError::Transport("connection refused".into()),
            CatalogError::Json("EOF while parsing".into()),
            CatalogError::InvalidShape,
        ];
        for error in failures {
            assert_eq!(
                catalog_or_fallback("data/menus.json", Err(error), true),
                Catalog::fallback()
            );
        }
    }

    #[test]
    fn test_success_passes_through() {
        let catalog = Catalog::from_json_str(r#"{ "postre": [{ "name": "Flan" }] }"#).unwrap();
        assert_eq!(
            catalog_or_fallback("data/menus.json", Ok(catalog.clone()), false),
            catalog
        );
    }

    #[test]
    fn test_bundled_sample_catalog() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.base_item_count(), 9);

        let options = resolve_options(&catalog, "5", Meal::Almuerzo, Category::Principal);
        let names: Vec<&str> = options.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Pescado a la plancha", "Milanesa", "Pollo al horno", "Ravioles"]
        );
        assert_eq!(
            catalog.named_list("guarniciones").map(|l| l.len()),
            Some(4)
        );
    }
}
